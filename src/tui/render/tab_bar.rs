use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Tab};

/// Render the tab bar: deck name + dashboard tabs + clock, separator below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    // Leading icon and deck name
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25B6}",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    let name = app.feed.config.deck.name.as_deref().unwrap_or("deck");
    spans.push(Span::styled(
        format!(" {} ", name),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    sep_cols.push(spans.iter().map(|s| s.content.width()).sum());
    spans.push(sep.clone());

    for tab in Tab::ALL {
        let style = tab_style(app, tab == app.tab);
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        sep_cols.push(spans.iter().map(|s| s.content.width()).sum());
        spans.push(sep.clone());
    }

    // Right-aligned clock
    let clock = Local::now().format("%H:%M").to_string();
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let width = area.width as usize;
    if used + clock.len() + 1 < width {
        spans.push(Span::styled(
            " ".repeat(width - used - clock.len() - 1),
            bg_style,
        ));
        spans.push(Span::styled(
            clock,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let mut line = String::with_capacity(width * 3);
    for col in 0..width {
        if sep_cols.contains(&col) {
            line.push('\u{2534}');
        } else {
            line.push('\u{2500}');
        }
    }
    let widget = Paragraph::new(line)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
