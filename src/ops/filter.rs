use crate::model::calendar::CalendarEvent;
use crate::model::item::Item;

/// Queries are trimmed and lowercased once, at the edge; everything below
/// assumes an already-normalized query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Substring match over title and description. An empty query matches
/// everything.
pub fn item_matches(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let text = format!(
        "{} {}",
        item.title,
        item.description.as_deref().unwrap_or("")
    )
    .to_lowercase();
    text.contains(query)
}

pub fn event_matches(event: &CalendarEvent, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let text = format!(
        "{} {}",
        event.title,
        event.description.as_deref().unwrap_or("")
    )
    .to_lowercase();
    text.contains(query)
}

/// Filter result for one section. Visibility is carried as item ids, in
/// the order of the sorted input, so renderers never depend on positional
/// alignment with an unsorted list.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFilter {
    pub visible_ids: Vec<u64>,
    pub total: usize,
    filtering: bool,
}

impl SectionFilter {
    pub fn visible(&self) -> usize {
        self.visible_ids.len()
    }

    pub fn is_visible(&self, id: u64) -> bool {
        self.visible_ids.contains(&id)
    }

    /// "3 of 12" while a query is active, "12" otherwise.
    pub fn badge(&self) -> String {
        if self.filtering {
            format!("{} of {}", self.visible(), self.total)
        } else {
            self.total.to_string()
        }
    }

    /// A section disappears entirely when a query is active and nothing in
    /// it matches. With no query it always shows, even when empty.
    pub fn hidden(&self) -> bool {
        self.filtering && self.visible_ids.is_empty()
    }

    /// Collapsible sections pop open while a query is active and they hold
    /// at least one match.
    pub fn forces_open(&self) -> bool {
        self.filtering && !self.visible_ids.is_empty()
    }
}

/// Apply `query` to `sorted`, which must already be in display order.
pub fn filter_section(sorted: &[Item], query: &str) -> SectionFilter {
    let visible_ids = sorted
        .iter()
        .filter(|item| item_matches(item, query))
        .map(|item| item.id)
        .collect();
    SectionFilter {
        visible_ids,
        total: sorted.len(),
        filtering: !query.is_empty(),
    }
}

/// A column that aggregates several sections hides only when a query is
/// active and every one of them filtered down to nothing.
pub fn composite_hidden(sections: &[&SectionFilter], filtering: bool) -> bool {
    filtering && sections.iter().all(|s| s.visible_ids.is_empty())
}
