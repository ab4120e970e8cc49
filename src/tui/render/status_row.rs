use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode, Tab};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let mut spans: Vec<Span> = Vec::new();
            if app.tab == Tab::Agenda {
                if let Some(category) = app.focused_category() {
                    spans.push(Span::styled(
                        format!(" {} · sort: {}", category, app.sort.mode(&category).label()),
                        Style::default().fg(app.theme.dim).bg(bg),
                    ));
                }
            }
            let hint = "/ search  s sort  tab views  r refresh  q quit ";
            let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
            let hint_width = hint.width();
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            }
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
            Line::from(spans)
        }
        Mode::Search => {
            // Search prompt: /pattern▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            let hint = "Esc cancel ";
            let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
            let hint_width = hint.width();
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
