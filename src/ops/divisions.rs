use indexmap::IndexMap;

use crate::model::config::DivisionConfig;
use crate::model::schedule::Job;

/// Jobs with no division match land in this pseudo-division, always last.
pub const UNASSIGNED: &str = "other";

/// Built-in display order. Divisions the mapping introduces beyond these
/// are appended after, in first-seen order.
pub const DIVISION_ORDER: [&str; 6] = [
    "intelligence",
    "communications",
    "security",
    "operations",
    "personal-lifestyle",
    "agent-deployments",
];

/// Display label for a division id. A division declared in deck.toml
/// supplies its own name; the rest use the built-in labels.
pub fn division_label(id: &str, declared: &[DivisionConfig]) -> String {
    if let Some(division) = declared.iter().find(|d| d.id == id) {
        return division.name.to_uppercase();
    }
    match id {
        "communications" => "BRIEFINGS / AGENDA".to_string(),
        "personal-lifestyle" => "PERSONAL / LIFESTYLE".to_string(),
        "agent-deployments" => "AGENT DEPLOYMENTS".to_string(),
        UNASSIGNED => "OTHER".to_string(),
        other => other.to_uppercase(),
    }
}

/// Resolve a job to a division id. Patterns are tried in mapping order; a
/// pattern ending in '*' prefix-matches, anything else matches exactly.
/// The job name is tried first, then its id.
pub fn match_division(job: &Job, mapping: &IndexMap<String, String>) -> Option<String> {
    match_key(&job.name, mapping).or_else(|| match_key(&job.id, mapping))
}

fn match_key(key: &str, mapping: &IndexMap<String, String>) -> Option<String> {
    for (pattern, division) in mapping {
        let hit = match pattern.strip_suffix('*') {
            Some(prefix) => key.starts_with(prefix),
            None => key == pattern,
        };
        if hit {
            return Some(division.clone());
        }
    }
    None
}

/// One rendered division panel: the division id and the jobs in it, in
/// payload order.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionGroup {
    pub id: String,
    pub jobs: Vec<Job>,
}

/// Group jobs by division for display. Divisions declared in deck.toml
/// come first in declaration order, then the built-in order, then any
/// division the mapping introduces. Empty divisions are dropped; the
/// unassigned bucket renders last and only when non-empty.
pub fn group_jobs(
    jobs: &[Job],
    mapping: &IndexMap<String, String>,
    declared: &[DivisionConfig],
) -> Vec<DivisionGroup> {
    let mut grouped: IndexMap<String, Vec<Job>> = IndexMap::new();
    let mut unassigned: Vec<Job> = Vec::new();

    for job in jobs {
        match match_division(job, mapping) {
            Some(division) => grouped.entry(division).or_default().push(job.clone()),
            None => unassigned.push(job.clone()),
        }
    }

    let mut order: Vec<String> = declared.iter().map(|d| d.id.clone()).collect();
    for id in DIVISION_ORDER {
        if !order.iter().any(|o| o.as_str() == id) {
            order.push(id.to_string());
        }
    }
    for id in grouped.keys() {
        if !order.contains(id) {
            order.push(id.clone());
        }
    }

    let mut out: Vec<DivisionGroup> = order
        .into_iter()
        .filter_map(|id| {
            let jobs = grouped.shift_remove(&id)?;
            Some(DivisionGroup { id, jobs })
        })
        .collect();

    if !unassigned.is_empty() {
        out.push(DivisionGroup {
            id: UNASSIGNED.to_string(),
            jobs: unassigned,
        });
    }
    out
}
