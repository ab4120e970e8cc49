use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A scheduled job as reported by the scheduler (`crons.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub name: String,
    /// Raw cron expression, possibly with a trailing "(tz)" suffix
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub last_status: Option<String>,
    #[serde(default)]
    pub consecutive_errors: u32,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default)]
    pub next_run_at: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Rendered status of a job. Disabled wins over everything; a run of
/// consecutive errors shows its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobBadge {
    Disabled,
    Error(u32),
    Ok,
    Scheduled,
}

impl Job {
    pub fn badge(&self) -> JobBadge {
        if !self.enabled {
            return JobBadge::Disabled;
        }
        match self.last_status.as_deref() {
            Some("error") => JobBadge::Error(self.consecutive_errors),
            Some("ok") => JobBadge::Ok,
            _ => JobBadge::Scheduled,
        }
    }
}

impl JobBadge {
    pub fn label(&self) -> String {
        match self {
            JobBadge::Disabled => "DISABLED".to_string(),
            JobBadge::Error(n) if *n > 1 => format!("ERR×{}", n),
            JobBadge::Error(_) => "ERROR".to_string(),
            JobBadge::Ok => "OK".to_string(),
            JobBadge::Scheduled => "SCHEDULED".to_string(),
        }
    }
}

/// The jobs payload: the job list plus the division mapping table.
///
/// `cron_mapping` is an IndexMap so patterns are tried in the order the
/// payload declares them; the first match wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsData {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// pattern → division id; a pattern ending in '*' prefix-matches
    #[serde(default)]
    pub cron_mapping: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_deserialize_preserves_mapping_order() {
        let data: JobsData = serde_json::from_str(
            r#"{
                "jobs": [{"id": "j1", "name": "sweep"}],
                "cronMapping": {"sweep*": "operations", "sweep-mail": "communications"}
            }"#,
        )
        .unwrap();
        let keys: Vec<&str> = data.cron_mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sweep*", "sweep-mail"]);
        assert!(data.jobs[0].enabled);
        assert_eq!(data.jobs[0].consecutive_errors, 0);
    }

    fn job(enabled: bool, last_status: Option<&str>, errors: u32) -> Job {
        Job {
            id: "j".to_string(),
            name: "j".to_string(),
            schedule: None,
            enabled,
            last_status: last_status.map(str::to_string),
            consecutive_errors: errors,
            last_run_at: None,
            next_run_at: None,
        }
    }

    #[test]
    fn test_badge_precedence() {
        assert_eq!(job(false, Some("error"), 5).badge(), JobBadge::Disabled);
        assert_eq!(job(true, Some("error"), 1).badge(), JobBadge::Error(1));
        assert_eq!(job(true, Some("ok"), 0).badge(), JobBadge::Ok);
        assert_eq!(job(true, None, 0).badge(), JobBadge::Scheduled);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(JobBadge::Error(1).label(), "ERROR");
        assert_eq!(JobBadge::Error(3).label(), "ERR×3");
        assert_eq!(JobBadge::Disabled.label(), "DISABLED");
    }
}
