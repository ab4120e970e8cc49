use serde::Serialize;

use crate::model::item::Item;
use crate::model::schedule::Job;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&Item> for ItemJson {
    fn from(item: &Item) -> Self {
        ItemJson {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            status: item.status.clone(),
            deadline: item.deadline.clone(),
            last_updated: item.last_updated.clone(),
            tags: item.tags.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct AgendaSectionJson {
    pub category: String,
    pub sort: String,
    pub count: String,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct AgendaJson {
    pub sections: Vec<AgendaSectionJson>,
}

#[derive(Serialize)]
pub struct JobJson {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_label: Option<String>,
    pub status: String,
}

impl From<&Job> for JobJson {
    fn from(job: &Job) -> Self {
        JobJson {
            id: job.id.clone(),
            name: job.name.clone(),
            schedule: job.schedule.clone(),
            schedule_label: job
                .schedule
                .as_deref()
                .and_then(crate::ops::cron::humanize),
            status: job.badge().label(),
        }
    }
}

#[derive(Serialize)]
pub struct DivisionJson {
    pub id: String,
    pub label: String,
    pub jobs: Vec<JobJson>,
}

#[derive(Serialize)]
pub struct JobsJson {
    pub divisions: Vec<DivisionJson>,
}

#[derive(Serialize)]
pub struct SessionJson {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub depth: usize,
}

#[derive(Serialize)]
pub struct SessionsJson {
    pub sessions: Vec<SessionJson>,
}

#[derive(Serialize)]
pub struct ChangeJson {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Serialize)]
pub struct ChangelogEntryJson {
    pub timestamp: String,
    pub changes: Vec<ChangeJson>,
}

#[derive(Serialize)]
pub struct ChangesJson {
    pub added: usize,
    pub modified: usize,
    pub removed: usize,
    pub entries: Vec<ChangelogEntryJson>,
}

#[derive(Serialize)]
pub struct CronJson {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Serialize)]
pub struct FileCheckJson {
    pub file: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub root: String,
    pub ok: bool,
    pub files: Vec<FileCheckJson>,
}
