use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from deck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub deck: DeckInfo,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub divisions: Vec<DivisionConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckInfo {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds between board/projects/jobs/changelog reloads
    #[serde(default = "default_board_secs")]
    pub board_secs: u64,
    /// Seconds between session reloads
    #[serde(default = "default_sessions_secs")]
    pub sessions_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            board_secs: 30,
            sessions_secs: 10,
        }
    }
}

fn default_board_secs() -> u64 {
    30
}

fn default_sessions_secs() -> u64 {
    10
}

/// A division declared in deck.toml. These come before the built-in
/// division order when both name one id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// status → hex color, overrides the built-in status palette
    #[serde(default)]
    pub status_colors: HashMap<String, String>,
}
