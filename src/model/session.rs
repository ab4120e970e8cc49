use serde::{Deserialize, Serialize};

/// A live or recent worker session (`sessions.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique key within the batch; `spawned_by` values refer to these
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Key of the session that spawned this one, if any. A value naming a
    /// key absent from the same batch is treated as no parent.
    #[serde(default)]
    pub spawned_by: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub last_activity: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub tokens_used: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsData {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}
