use chrono::Utc;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ops::changelog::{count_changes, recent_entries};
use crate::ops::cron;
use crate::ops::divisions::{division_label, group_jobs};
use crate::ops::sessions::session_forest;
use crate::tui::app::App;

use super::helpers::{dim_line, render_lines, section_header};
use crate::util::relative::{time_ago, time_until};

pub fn render_monitor_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let now = Utc::now();
    let mut lines: Vec<Line> = Vec::new();

    // Scheduled jobs grouped by division
    if let Some(ref data) = app.cache.jobs {
        let declared = &app.feed.config.divisions;
        let groups = group_jobs(&data.jobs, &data.cron_mapping, declared);
        for group in &groups {
            lines.push(section_header(
                &division_label(&group.id, declared),
                &group.jobs.len().to_string(),
                None,
                false,
                &app.theme,
            ));
            for job in &group.jobs {
                let badge = job.badge();
                let mut spans: Vec<Span> = vec![
                    Span::styled(
                        format!("  [{}]", badge.label()),
                        Style::default()
                            .fg(app.theme.badge_color(badge))
                            .bg(app.theme.background),
                    ),
                    Span::styled(
                        format!(" {}", job.name),
                        Style::default().fg(app.theme.text).bg(app.theme.background),
                    ),
                ];
                if let Some(label) = job.schedule.as_deref().and_then(cron::humanize) {
                    spans.push(Span::styled(
                        format!("  {}", label),
                        Style::default().fg(app.theme.cyan).bg(app.theme.background),
                    ));
                }
                let mut timing = String::new();
                if let Some(ago) = job.last_run_at.as_deref().and_then(|t| time_ago(t, now)) {
                    timing.push_str(&format!("  last {}", ago));
                }
                if let Some(next) = job.next_run_at.as_deref().and_then(|t| time_until(t, now)) {
                    timing.push_str(&format!("  next {}", next));
                }
                if !timing.is_empty() {
                    spans.push(Span::styled(
                        timing,
                        Style::default().fg(app.theme.dim).bg(app.theme.background),
                    ));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::default());
        }
    } else {
        lines.push(dim_line("  loading jobs...".to_string(), &app.theme));
    }

    // Session forest
    if let Some(ref data) = app.cache.sessions {
        let rows = session_forest(&data.sessions);
        lines.push(section_header(
            "SESSIONS",
            &rows.len().to_string(),
            None,
            false,
            &app.theme,
        ));
        let done = rows
            .iter()
            .filter(|r| r.session.status.as_deref() == Some("completed"))
            .count();
        let running = rows.len() - done;
        let aggregate = if running > 0 { "RUNNING" } else { "IDLE" };
        lines.push(dim_line(
            format!("  {} · {} running · {} done", aggregate, running, done),
            &app.theme,
        ));
        for row in &rows {
            let s = &row.session;
            let done = s.status.as_deref() == Some("completed");
            let color = if done {
                app.theme.dim
            } else {
                match s.kind.as_deref() {
                    Some("main") => app.theme.cyan,
                    Some("subagent") => app.theme.green,
                    _ => app.theme.amber,
                }
            };
            let indent = "  ".repeat(row.depth);
            let branch = if row.depth > 0 { "\u{2514}\u{2500} " } else { "" };
            let label = s.label.as_deref().unwrap_or(&s.key);
            let status = if done { "\u{2713} DONE" } else { "\u{25CF} RUNNING" };
            let mut spans = vec![Span::styled(
                format!("  {}{}{}  {}", indent, branch, label, status),
                Style::default().fg(color).bg(app.theme.background),
            )];
            if let Some(ago) = s.last_activity.as_deref().and_then(|t| time_ago(t, now)) {
                spans.push(Span::styled(
                    format!("  {}", ago),
                    Style::default().fg(app.theme.dim).bg(app.theme.background),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    // Recent changes summary
    if let Some(ref data) = app.cache.changelog {
        let recent = recent_entries(&data.entries, now);
        let counts = count_changes(&recent);
        lines.push(dim_line(
            format!(
                "Recent Changes | Added: {} · Modified: {} · Removed: {}",
                counts.added, counts.modified, counts.removed
            ),
            &app.theme,
        ));
    }

    let scroll = app.monitor_scroll;
    render_lines(frame, area, lines, scroll, &app.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Tab;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_renders_divisions_and_badges() {
        let mut app = minimal_app();
        app.tab = Tab::Monitor;
        let text = render_app(&mut app);
        assert!(text.contains("INTELLIGENCE (1)"));
        assert!(text.contains("[OK] intel-digest"));
        assert!(text.contains("OTHER (1)"));
        assert!(text.contains("[ERR×3] mystery-job"));
    }

    #[test]
    fn test_renders_schedule_labels() {
        let mut app = minimal_app();
        app.tab = Tab::Monitor;
        let text = render_app(&mut app);
        assert!(text.contains("Daily at 2 PM"));
    }

    #[test]
    fn test_renders_session_tree() {
        let mut app = minimal_app();
        app.tab = Tab::Monitor;
        let text = render_app(&mut app);
        assert!(text.contains("SESSIONS (2)"));
        assert!(text.contains("RUNNING · 2 running · 0 done"));
        assert!(text.contains("\u{2514}\u{2500} worker"));
    }

    #[test]
    fn test_changes_summary() {
        let mut app = minimal_app();
        app.tab = Tab::Monitor;
        let text = render_app(&mut app);
        assert!(text.contains("Added: 1"));
    }
}
