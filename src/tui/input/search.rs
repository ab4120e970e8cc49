use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_search(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.close_search();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.apply_search();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.apply_search();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::minimal_app;

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_search(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_typing_updates_query() {
        let mut app = minimal_app();
        app.open_search();
        type_str(&mut app, "  Invoice");
        assert_eq!(app.search_input, "  Invoice");
        assert_eq!(app.query, "invoice");
    }

    #[test]
    fn test_backspace() {
        let mut app = minimal_app();
        app.open_search();
        type_str(&mut app, "ab");
        handle_search(&mut app, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.query, "a");
    }

    #[test]
    fn test_escape_closes() {
        let mut app = minimal_app();
        app.open_search();
        type_str(&mut app, "x");
        handle_search(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.search_input.is_empty());
        assert!(app.query.is_empty());
    }
}
