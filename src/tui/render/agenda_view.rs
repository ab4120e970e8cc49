use chrono::{Local, Utc};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::model::item::Category;
use crate::ops::filter::{composite_hidden, event_matches, filter_section, SectionFilter};
use crate::ops::sort::sorted_items;
use crate::ops::stale::{is_stale, split_completed, stale_summary, REVIEW_STALE_DAYS};
use crate::tui::app::{App, COLLAPSIBLE, COMPOSITE, OLDER_COMPLETED};

use super::helpers::{dim_line, item_line, render_lines, section_header};

pub fn render_agenda_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(board) = app.cache.board.clone() else {
        let lines = vec![dim_line("  loading agenda...".to_string(), &app.theme)];
        render_lines(frame, area, lines, 0, &app.theme);
        return;
    };

    let now = Utc::now();
    let today = Local::now().date_naive();
    let filtering = !app.query.is_empty();
    let mut lines: Vec<Line> = Vec::new();

    // Calendar strip above the item sections
    if let Some(ref calendar) = app.cache.calendar {
        let visible: Vec<_> = calendar
            .events
            .iter()
            .filter(|e| event_matches(e, &app.query))
            .collect();
        if !(filtering && visible.is_empty()) {
            let badge = if filtering {
                format!("{} of {}", visible.len(), calendar.events.len())
            } else {
                calendar.events.len().to_string()
            };
            lines.push(section_header("CALENDAR", &badge, None, false, &app.theme));
            for event in visible {
                let when = event_time(event, now);
                lines.push(dim_line(format!("  {}  {}", when, event.title), &app.theme));
            }
            lines.push(Line::default());
        }
    }

    // The deferred column goes away only when every section in it is empty
    let composite_filters: Vec<SectionFilter> = board
        .categories
        .iter()
        .filter(|c| COMPOSITE.contains(&c.id.as_str()))
        .map(|c| filter_section(&c.items, &app.query))
        .collect();
    let refs: Vec<&SectionFilter> = composite_filters.iter().collect();
    let column_hidden = composite_hidden(&refs, filtering);

    for (idx, category) in board.categories.iter().enumerate() {
        if column_hidden && COMPOSITE.contains(&category.id.as_str()) {
            continue;
        }
        render_category(app, category, idx, now, today, &mut lines);
    }

    let scroll = app.agenda_scroll;
    render_lines(frame, area, lines, scroll, &app.theme);
}

/// "in 25m" / "1.5h ago" when the start parses, the raw start text
/// otherwise, "all day" when there is none.
fn event_time(event: &crate::model::calendar::CalendarEvent, now: chrono::DateTime<Utc>) -> String {
    if event.all_day {
        return "all day".to_string();
    }
    match event.start.as_deref() {
        Some(start) => crate::util::relative::time_until(start, now)
            .or_else(|| crate::util::relative::time_ago(start, now))
            .unwrap_or_else(|| start.to_string()),
        None => "all day".to_string(),
    }
}

fn render_category(
    app: &App,
    category: &Category,
    idx: usize,
    now: chrono::DateTime<Utc>,
    today: chrono::NaiveDate,
    lines: &mut Vec<Line<'static>>,
) {
    let mode = app.sort.mode(&category.id);
    let sorted = sorted_items(&category.items, mode, today);
    let result = filter_section(&sorted, &app.query);
    if result.hidden() {
        return;
    }

    let collapsible = COLLAPSIBLE.contains(&category.id.as_str());
    let expanded = !collapsible || app.expand.is_expanded(&category.id);
    let arrow = collapsible.then_some(expanded);
    let focused = idx == app.focus;
    let label = category.id.replace('-', " ").to_uppercase();
    lines.push(section_header(
        &label,
        &result.badge(),
        arrow,
        focused,
        &app.theme,
    ));

    if !expanded {
        lines.push(Line::default());
        return;
    }

    if category.id == "completed" {
        let (recent, older) = split_completed(&sorted, now);
        for item in &recent {
            if result.is_visible(item.id) {
                lines.push(item_line(item, now, false, &app.theme));
            }
        }
        if !older.is_empty() {
            let older_open = app.expand.is_expanded(OLDER_COMPLETED);
            let older_arrow = if older_open { "\u{25BC}" } else { "\u{25B6}" };
            lines.push(dim_line(
                format!("  {} {} OLDER ITEMS", older_arrow, older.len()),
                &app.theme,
            ));
            if older_open {
                for item in &older {
                    if result.is_visible(item.id) {
                        lines.push(item_line(item, now, false, &app.theme));
                    }
                }
            }
        }
    } else {
        let review = category.id == "needs-review";
        let mut stale_count = 0;
        for item in &sorted {
            if !result.is_visible(item.id) {
                continue;
            }
            let stale = review && is_stale(item, now, REVIEW_STALE_DAYS);
            if stale {
                stale_count += 1;
            }
            lines.push(item_line(item, now, stale, &app.theme));
        }
        if stale_count > 0 {
            lines.push(dim_line(
                format!("  {}", stale_summary(stale_count, REVIEW_STALE_DAYS)),
                &app.theme,
            ));
        }
    }
    lines.push(Line::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_renders_sections_with_counts() {
        let mut app = minimal_app();
        let text = render_app(&mut app);
        assert!(text.contains("URGENT (2)"));
        assert!(text.contains("ACTIVE (1)"));
        assert!(text.contains("Call vendor"));
    }

    #[test]
    fn test_collapsed_section_hides_items() {
        let mut app = minimal_app();
        let text = render_app(&mut app);
        assert!(text.contains("\u{25B6} ARCHIVED (1)"));
        assert!(!text.contains("Archived thing"));
    }

    #[test]
    fn test_expanded_section_shows_items() {
        let mut app = minimal_app();
        app.expand.toggle("archived");
        let text = render_app(&mut app);
        assert!(text.contains("\u{25BC} ARCHIVED (1)"));
        assert!(text.contains("Archived thing"));
    }

    #[test]
    fn test_search_hides_empty_sections_and_shows_badges() {
        let mut app = minimal_app();
        app.open_search();
        app.search_input = "vendor".to_string();
        app.apply_search();
        let text = render_app(&mut app);
        assert!(text.contains("URGENT (1 of 2)"));
        assert!(!text.contains("ACTIVE"));
    }

    #[test]
    fn test_search_hides_composite_column_as_unit() {
        let mut app = minimal_app();
        app.open_search();
        app.search_input = "vendor".to_string();
        app.apply_search();
        let text = render_app(&mut app);
        // No composite member matches, so none of them render
        assert!(!text.contains("REMINDERS"));
        assert!(!text.contains("COMPLETED"));
        assert!(!text.contains("ARCHIVED"));
    }

    #[test]
    fn test_empty_composite_members_hide_while_sibling_matches() {
        let mut app = minimal_app();
        app.open_search();
        app.search_input = "water".to_string();
        app.apply_search();
        let text = render_app(&mut app);
        // The column survives through the matching member only
        assert!(text.contains("REMINDERS (1 of 1)"));
        assert!(text.contains("Water plants"));
        assert!(!text.contains("COMPLETED"));
        assert!(!text.contains("ARCHIVED"));
    }

    #[test]
    fn test_search_forces_archive_open() {
        let mut app = minimal_app();
        app.open_search();
        app.search_input = "archived thing".to_string();
        app.apply_search();
        let text = render_app(&mut app);
        assert!(text.contains("Archived thing"));
    }

    #[test]
    fn test_calendar_strip() {
        let mut app = minimal_app();
        let text = render_app(&mut app);
        assert!(text.contains("CALENDAR (1)"));
        assert!(text.contains("Standup"));
    }
}
