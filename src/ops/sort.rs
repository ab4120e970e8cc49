use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::item::Item;
use crate::ops::deadline::parse_deadline;
use crate::util::relative::parse_iso;

/// Ordering applied to one category's items. Each category holds its own
/// mode independently; cycling one never touches the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Status,
    Deadline,
    LastUpdated,
    Title,
}

impl SortMode {
    pub fn next(self) -> SortMode {
        match self {
            SortMode::Status => SortMode::Deadline,
            SortMode::Deadline => SortMode::LastUpdated,
            SortMode::LastUpdated => SortMode::Title,
            SortMode::Title => SortMode::Status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Status => "STATUS",
            SortMode::Deadline => "DEADLINE",
            SortMode::LastUpdated => "LAST UPDATED",
            SortMode::Title => "TITLE",
        }
    }
}

/// Per-category sort modes, keyed by category id. Unknown categories read
/// as the default mode.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    modes: HashMap<String, SortMode>,
}

impl SortState {
    pub fn mode(&self, category: &str) -> SortMode {
        self.modes.get(category).copied().unwrap_or_default()
    }

    /// Advance one category's mode and return the new value.
    pub fn cycle(&mut self, category: &str) -> SortMode {
        let next = self.mode(category).next();
        self.modes.insert(category.to_string(), next);
        next
    }
}

/// Stable-sorted copy of `items` under `mode`. The input order is the
/// payload order and survives as the tie-break wherever a comparator
/// returns Equal.
pub fn sorted_items(items: &[Item], mode: SortMode, today: NaiveDate) -> Vec<Item> {
    let mut out = items.to_vec();
    out.sort_by(|a, b| compare(a, b, mode, today));
    out
}

/// The comparator behind [`sorted_items`], exposed for callers that sort
/// in place.
pub fn compare(a: &Item, b: &Item, mode: SortMode, today: NaiveDate) -> Ordering {
    match mode {
        SortMode::Status => a
            .tier()
            .cmp(&b.tier())
            .then_with(|| updated_millis(b).cmp(&updated_millis(a))),
        SortMode::Deadline => match (deadline_of(a, today), deadline_of(b, today)) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortMode::LastUpdated => updated_millis(b).cmp(&updated_millis(a)),
        SortMode::Title => compare_titles(&a.title, &b.title),
    }
}

fn deadline_of(item: &Item, today: NaiveDate) -> Option<NaiveDate> {
    item.deadline
        .as_deref()
        .and_then(|text| parse_deadline(text, today))
}

/// Milliseconds since the epoch, with missing or unparsable timestamps
/// pinned to 0 so they sink under recency ordering.
fn updated_millis(item: &Item) -> i64 {
    item.last_updated
        .as_deref()
        .and_then(parse_iso)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    let la = a.to_lowercase();
    let lb = b.to_lowercase();
    la.cmp(&lb).then_with(|| a.cmp(b))
}
