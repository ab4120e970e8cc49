use std::collections::HashMap;

/// Expanded/collapsed flags for collapsible sections, keyed by section id.
/// Sections start collapsed.
///
/// A search session may force sections open (any collapsible holding a
/// match pops open so the match is reachable). The flags as they stood
/// when the search opened are snapshotted and put back when it closes, so
/// a search session never leaks expansion changes.
#[derive(Debug, Clone, Default)]
pub struct ExpandState {
    expanded: HashMap<String, bool>,
    snapshot: Option<HashMap<String, bool>>,
}

impl ExpandState {
    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded.get(section).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, section: &str) {
        let flag = self.expanded.entry(section.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn force_open(&mut self, section: &str) {
        self.expanded.insert(section.to_string(), true);
    }

    /// Snapshot the current flags. Idempotent while a search is open.
    pub fn search_opened(&mut self) {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.expanded.clone());
        }
    }

    /// Restore the pre-search flags. No-op when no search is open.
    pub fn search_closed(&mut self) {
        if let Some(saved) = self.snapshot.take() {
            self.expanded = saved;
        }
    }
}
