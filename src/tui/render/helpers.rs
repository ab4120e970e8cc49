use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::item::{status_label, Item};
use crate::tui::theme::Theme;
use crate::util::relative::time_ago;

/// Render a pre-built list of lines with a vertical scroll offset.
pub fn render_lines(frame: &mut Frame, area: Rect, lines: Vec<Line>, scroll: usize, theme: &Theme) {
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Section header line, e.g. "URGENT (3 of 12)" with an optional
/// collapse arrow.
pub fn section_header<'a>(
    label: &str,
    badge: &str,
    arrow: Option<bool>,
    focused: bool,
    theme: &Theme,
) -> Line<'a> {
    let style = if focused {
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.highlight).bg(theme.background)
    };
    let prefix = match arrow {
        Some(true) => "\u{25BC} ",
        Some(false) => "\u{25B6} ",
        None => "",
    };
    Line::from(Span::styled(
        format!("{}{} ({})", prefix, label, badge),
        style,
    ))
}

/// One agenda item as a single rendered line.
pub fn item_line<'a>(item: &Item, now: DateTime<Utc>, stale: bool, theme: &Theme) -> Line<'a> {
    let bg = theme.background;
    let mut spans: Vec<Span> = Vec::new();

    let status_color = item
        .status
        .as_deref()
        .map(|s| theme.status_color(s))
        .unwrap_or(theme.text);
    spans.push(Span::styled(
        "  \u{25CF} ",
        Style::default().fg(status_color).bg(bg),
    ));
    spans.push(Span::styled(
        item.title.clone(),
        Style::default().fg(theme.text).bg(bg),
    ));

    if let Some(ref status) = item.status {
        spans.push(Span::styled(
            format!("  {}", status_label(status)),
            Style::default().fg(status_color).bg(bg),
        ));
    }
    if let Some(ref deadline) = item.deadline {
        spans.push(Span::styled(
            format!("  due {}", deadline),
            Style::default().fg(theme.amber).bg(bg),
        ));
    }
    if let Some(ago) = item.last_updated.as_deref().and_then(|t| time_ago(t, now)) {
        spans.push(Span::styled(
            format!("  {}", ago),
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    if stale {
        spans.push(Span::styled(
            "  \u{26A0} stale",
            Style::default().fg(theme.amber).bg(bg),
        ));
    }

    Line::from(spans)
}

/// A dim single-span line, used for summaries and placeholders.
pub fn dim_line<'a>(text: String, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default().fg(theme.dim).bg(theme.background),
    ))
}
