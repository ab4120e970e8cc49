use serde::{Deserialize, Serialize};

/// One change to one item, inside a changelog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// "added", "modified" or "removed"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub item_title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// A timestamped batch of changes (`changelog.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    /// ISO-8601 timestamp of the batch
    pub timestamp: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogData {
    #[serde(default)]
    pub entries: Vec<ChangelogEntry>,
}
