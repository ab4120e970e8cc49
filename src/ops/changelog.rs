use chrono::{DateTime, Duration, Utc};

use crate::model::changelog::ChangelogEntry;
use crate::util::relative::parse_iso;

/// Totals across a set of changelog entries, by change type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    pub added: usize,
    pub modified: usize,
    pub removed: usize,
}

/// Entries from the last 24 hours, newest first. Entries with an
/// unparsable timestamp are dropped.
pub fn recent_entries(entries: &[ChangelogEntry], now: DateTime<Utc>) -> Vec<ChangelogEntry> {
    let cutoff = now - Duration::hours(24);
    let mut recent: Vec<(DateTime<Utc>, ChangelogEntry)> = entries
        .iter()
        .filter_map(|e| {
            let ts = parse_iso(&e.timestamp)?;
            (ts > cutoff).then(|| (ts, e.clone()))
        })
        .collect();
    recent.sort_by(|a, b| b.0.cmp(&a.0));
    recent.into_iter().map(|(_, e)| e).collect()
}

pub fn count_changes(entries: &[ChangelogEntry]) -> ChangeCounts {
    let mut counts = ChangeCounts::default();
    for entry in entries {
        for change in &entry.changes {
            match change.kind.as_str() {
                "added" => counts.added += 1,
                "modified" => counts.modified += 1,
                "removed" => counts.removed += 1,
                _ => {}
            }
        }
    }
    counts
}
