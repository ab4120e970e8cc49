use chrono::{Local, Utc};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::model::item::Item;
use crate::ops::filter::filter_section;
use crate::ops::sort::sorted_items;
use crate::tui::app::App;

use super::helpers::{dim_line, item_line, render_lines, section_header};

pub fn render_projects_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(projects) = app.cache.projects.clone() else {
        let lines = vec![dim_line("  loading projects...".to_string(), &app.theme)];
        render_lines(frame, area, lines, 0, &app.theme);
        return;
    };

    let now = Utc::now();
    let today = Local::now().date_naive();
    let filtering = !app.query.is_empty();
    let mut lines: Vec<Line> = Vec::new();

    for project in &projects.projects {
        let mut lane_lines: Vec<Line> = Vec::new();
        let mut visible_total = 0;
        let total = project.urgent.len() + project.active.len() + project.deferred.len();

        for (lane, items) in [
            ("urgent", &project.urgent),
            ("active", &project.active),
            ("deferred", &project.deferred),
        ] {
            visible_total += render_lane(app, lane, items, now, today, &mut lane_lines);
        }

        // Whole project disappears when a query matches none of its lanes
        if filtering && visible_total == 0 {
            continue;
        }

        let badge = if filtering {
            format!("{} of {}", visible_total, total)
        } else {
            total.to_string()
        };
        let label = match project.status.as_deref() {
            Some(status) => format!("{} · {}", project.name.to_uppercase(), status),
            None => project.name.to_uppercase(),
        };
        lines.push(section_header(&label, &badge, None, false, &app.theme));
        lines.append(&mut lane_lines);
        if !project.completed.is_empty() {
            lines.push(dim_line(
                format!("    {} completed", project.completed.len()),
                &app.theme,
            ));
        }
        lines.push(Line::default());
    }

    if lines.is_empty() {
        lines.push(dim_line("  no matching projects".to_string(), &app.theme));
    }

    let scroll = app.projects_scroll;
    render_lines(frame, area, lines, scroll, &app.theme);
}

fn render_lane(
    app: &App,
    lane: &str,
    items: &[Item],
    now: chrono::DateTime<Utc>,
    today: chrono::NaiveDate,
    lines: &mut Vec<Line<'static>>,
) -> usize {
    if items.is_empty() {
        return 0;
    }
    let sorted = sorted_items(items, app.sort.mode(lane), today);
    let result = filter_section(&sorted, &app.query);
    if result.hidden() {
        return 0;
    }
    lines.push(dim_line(format!("  {}:", lane), &app.theme));
    for item in &sorted {
        if result.is_visible(item.id) {
            lines.push(item_line(item, now, false, &app.theme));
        }
    }
    result.visible()
}
