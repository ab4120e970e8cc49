use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Tab};

pub fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Tab switching
        KeyCode::Tab => app.tab = app.tab.next(),
        KeyCode::BackTab => app.tab = app.tab.prev(),
        KeyCode::Char('1') => app.tab = Tab::Agenda,
        KeyCode::Char('2') => app.tab = Tab::Projects,
        KeyCode::Char('3') => app.tab = Tab::Monitor,

        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('r') => app.refresh_all(Instant::now()),

        // Agenda interactions
        KeyCode::Char('s') if app.tab == Tab::Agenda => app.cycle_focused_sort(),
        KeyCode::Left | KeyCode::Char('h') if app.tab == Tab::Agenda => app.focus_prev(),
        KeyCode::Right | KeyCode::Char('l') if app.tab == Tab::Agenda => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') if app.tab == Tab::Agenda => app.toggle_focused(),
        KeyCode::Char('o') if app.tab == Tab::Agenda => {
            app.expand.toggle(crate::tui::app::OLDER_COMPLETED)
        }

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => {
            let scroll = scroll_of(app);
            *scroll = scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let scroll = scroll_of(app);
            *scroll += 1;
        }
        KeyCode::PageUp => {
            let scroll = scroll_of(app);
            *scroll = scroll.saturating_sub(10);
        }
        KeyCode::PageDown => {
            let scroll = scroll_of(app);
            *scroll += 10;
        }
        KeyCode::Home => *scroll_of(app) = 0,

        _ => {}
    }
}

fn scroll_of(app: &mut App) -> &mut usize {
    match app.tab {
        Tab::Agenda => &mut app.agenda_scroll,
        Tab::Projects => &mut app.projects_scroll,
        Tab::Monitor => &mut app.monitor_scroll,
    }
}
