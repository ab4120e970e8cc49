use serde::{Deserialize, Serialize};

use crate::model::item::Item;

/// One tracked project with its own urgent/active/deferred lanes
/// (`projects.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub urgent: Vec<Item>,
    #[serde(default)]
    pub active: Vec<Item>,
    #[serde(default)]
    pub deferred: Vec<Item>,
    #[serde(default)]
    pub completed: Vec<Item>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsData {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}
