pub mod agenda_view;
pub mod helpers;
pub mod monitor_view;
pub mod projects_view;
pub mod status_row;
pub mod tab_bar;
#[cfg(test)]
pub mod test_helpers;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::app::{App, Tab};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let banner = app.cache.banner();

    // Layout: tab bar (2 rows) | optional sync banner | content | status row
    let constraints = if banner.is_some() {
        vec![
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    let content_idx = if let Some(text) = banner {
        let widget = Paragraph::new(text)
            .style(Style::default().fg(app.theme.banner_fg).bg(app.theme.banner_bg));
        frame.render_widget(widget, chunks[1]);
        2
    } else {
        1
    };

    match app.tab {
        Tab::Agenda => agenda_view::render_agenda_view(frame, app, chunks[content_idx]),
        Tab::Projects => projects_view::render_projects_view(frame, app, chunks[content_idx]),
        Tab::Monitor => monitor_view::render_monitor_view(frame, app, chunks[content_idx]),
    }

    status_row::render_status_row(frame, app, chunks[content_idx + 1]);
}
