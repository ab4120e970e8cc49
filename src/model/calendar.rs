use serde::{Deserialize, Serialize};

/// One upcoming calendar event (`calendar.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 start time
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_deserialize() {
        let data: CalendarData = serde_json::from_str(
            r#"{"events":[{"title":"Standup","start":"2026-08-30T09:00:00Z","allDay":false}]}"#,
        )
        .unwrap();
        assert_eq!(data.events.len(), 1);
        assert_eq!(data.events[0].title, "Standup");
        assert!(!data.events[0].all_day);
    }
}
