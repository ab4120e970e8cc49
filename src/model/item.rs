use serde::{Deserialize, Serialize};

/// A single card on the agenda board.
///
/// Category membership is extrinsic: an item belongs to whichever
/// `Category.items` list the payload placed it in, so an item never appears
/// in two categories at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Loosely-formatted deadline text, e.g. "by Mar 14" (see ops::deadline)
    #[serde(default)]
    pub deadline: Option<String>,
    /// ISO-8601 timestamp of the last change to this item
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Status tier 1..5 (1 = most urgent). Unknown statuses rank last.
    pub fn tier(&self) -> u8 {
        status_tier(self.status.as_deref().unwrap_or(""))
    }
}

/// Status → priority tier lookup. Anything not listed is tier 5.
pub fn status_tier(status: &str) -> u8 {
    match status {
        "action-needed" | "overdue" => 1,
        "in-progress" | "starred" => 2,
        "scheduled" | "waiting" | "replied" => 3,
        "new" | "planning" => 4,
        _ => 5,
    }
}

/// Uppercase display label for a status, e.g. "action-needed" → "ACTION NEEDED"
pub fn status_label(status: &str) -> String {
    status.replace('-', " ").to_uppercase()
}

/// A named bucket of items rendered as one list/column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The agenda board payload (`items.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl BoardData {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_items(&self, id: &str) -> &[Item] {
        self.category(id).map_or(&[], |c| c.items.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tier_lookup() {
        assert_eq!(status_tier("overdue"), 1);
        assert_eq!(status_tier("action-needed"), 1);
        assert_eq!(status_tier("in-progress"), 2);
        assert_eq!(status_tier("waiting"), 3);
        assert_eq!(status_tier("planning"), 4);
        assert_eq!(status_tier("completed"), 5);
    }

    #[test]
    fn test_status_tier_unknown_defaults_last() {
        assert_eq!(status_tier("definitely-not-a-status"), 5);
        assert_eq!(status_tier(""), 5);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("action-needed"), "ACTION NEEDED");
        assert_eq!(status_label("new"), "NEW");
    }

    #[test]
    fn test_board_deserialize_missing_optionals() {
        let data: BoardData = serde_json::from_str(
            r#"{"categories":[{"id":"urgent","items":[{"id":1,"title":"Call back"}]}]}"#,
        )
        .unwrap();
        let item = &data.category_items("urgent")[0];
        assert_eq!(item.title, "Call back");
        assert!(item.description.is_none());
        assert!(item.deadline.is_none());
        assert!(item.tags.is_empty());
        assert_eq!(item.tier(), 5);
    }

    #[test]
    fn test_category_lookup_missing() {
        let data = BoardData {
            last_updated: None,
            categories: vec![],
        };
        assert!(data.category("urgent").is_none());
        assert!(data.category_items("urgent").is_empty());
    }
}
