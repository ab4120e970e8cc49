use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::feed::{Feed, FeedCache};
use crate::ops::expand::ExpandState;
use crate::ops::filter::{filter_section, normalize_query};
use crate::ops::sort::SortState;

use super::input;
use super::render;
use super::theme::Theme;

/// Which dashboard is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Agenda,
    Projects,
    Monitor,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Agenda, Tab::Projects, Tab::Monitor];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Agenda => "AGENDA",
            Tab::Projects => "PROJECTS",
            Tab::Monitor => "MONITOR",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Agenda => Tab::Projects,
            Tab::Projects => Tab::Monitor,
            Tab::Monitor => Tab::Agenda,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Agenda => Tab::Monitor,
            Tab::Projects => Tab::Agenda,
            Tab::Monitor => Tab::Projects,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// Sections that render collapsed by default.
pub const COLLAPSIBLE: [&str; 3] = ["reminders", "completed", "archived"];

/// Sections that share one column: they hide as a unit during a search,
/// only when none of them holds a match.
pub const COMPOSITE: [&str; 4] = ["deferred", "reminders", "completed", "archived"];

/// Nested bucket of completed items older than 30 days.
pub const OLDER_COMPLETED: &str = "older-completed";

/// Main application state
pub struct App {
    pub feed: Feed,
    pub cache: FeedCache,
    pub tab: Tab,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub sort: SortState,
    pub expand: ExpandState,
    /// Raw search text being typed
    pub search_input: String,
    /// Normalized query applied to the views
    pub query: String,
    /// Focused category index in the agenda tab
    pub focus: usize,
    pub agenda_scroll: usize,
    pub projects_scroll: usize,
    pub monitor_scroll: usize,
    last_board_refresh: Option<Instant>,
    last_sessions_refresh: Option<Instant>,
}

impl App {
    pub fn new(feed: Feed) -> Self {
        let theme = Theme::from_config(&feed.config.ui);
        App {
            feed,
            cache: FeedCache::default(),
            tab: Tab::Agenda,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            sort: SortState::default(),
            expand: ExpandState::default(),
            search_input: String::new(),
            query: String::new(),
            focus: 0,
            agenda_scroll: 0,
            projects_scroll: 0,
            monitor_scroll: 0,
            last_board_refresh: None,
            last_sessions_refresh: None,
        }
    }

    /// Reload both payload groups immediately.
    pub fn refresh_all(&mut self, now: Instant) {
        self.cache.refresh_board(&self.feed);
        self.cache.refresh_sessions(&self.feed);
        self.last_board_refresh = Some(now);
        self.last_sessions_refresh = Some(now);
    }

    /// Reload whichever payload group is due on its poll cadence.
    pub fn poll_feed(&mut self, now: Instant) {
        let board_due = self
            .last_board_refresh
            .is_none_or(|t| now.duration_since(t).as_secs() >= self.feed.config.poll.board_secs);
        if board_due {
            self.cache.refresh_board(&self.feed);
            self.last_board_refresh = Some(now);
        }

        let sessions_due = self.last_sessions_refresh.is_none_or(|t| {
            now.duration_since(t).as_secs() >= self.feed.config.poll.sessions_secs
        });
        if sessions_due {
            self.cache.refresh_sessions(&self.feed);
            self.last_sessions_refresh = Some(now);
        }
    }

    pub fn open_search(&mut self) {
        if self.mode == Mode::Search {
            return;
        }
        self.mode = Mode::Search;
        self.expand.search_opened();
    }

    pub fn close_search(&mut self) {
        if self.mode != Mode::Search {
            return;
        }
        self.mode = Mode::Navigate;
        self.search_input.clear();
        self.query.clear();
        self.expand.search_closed();
    }

    /// Re-normalize the query and pop open any collapsible section that
    /// now holds a match.
    pub fn apply_search(&mut self) {
        self.query = normalize_query(&self.search_input);
        if self.query.is_empty() {
            return;
        }
        let forced: Vec<String> = match self.cache.board {
            Some(ref board) => COLLAPSIBLE
                .iter()
                .filter(|section| {
                    let result = filter_section(board.category_items(section), &self.query);
                    result.forces_open()
                })
                .map(|s| s.to_string())
                .collect(),
            None => Vec::new(),
        };
        for section in forced {
            self.expand.force_open(&section);
        }
    }

    /// Id of the category under focus, if the board is loaded.
    pub fn focused_category(&self) -> Option<String> {
        let board = self.cache.board.as_ref()?;
        board.categories.get(self.focus).map(|c| c.id.clone())
    }

    pub fn focus_next(&mut self) {
        if let Some(ref board) = self.cache.board {
            if !board.categories.is_empty() {
                self.focus = (self.focus + 1) % board.categories.len();
            }
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(ref board) = self.cache.board {
            let n = board.categories.len();
            if n > 0 {
                self.focus = (self.focus + n - 1) % n;
            }
        }
    }

    pub fn cycle_focused_sort(&mut self) {
        if let Some(category) = self.focused_category() {
            self.sort.cycle(&category);
        }
    }

    /// Toggle the focused section if it is collapsible.
    pub fn toggle_focused(&mut self) {
        if let Some(category) = self.focused_category() {
            if COLLAPSIBLE.contains(&category.as_str()) {
                self.expand.toggle(&category);
            }
        }
    }
}

pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let feed = match data_dir {
        Some(dir) => Feed::discover(Path::new(dir))?,
        None => Feed::discover(&std::env::current_dir()?)?,
    };

    let mut app = App::new(feed);
    app.refresh_all(Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.poll_feed(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::minimal_app;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Agenda.next(), Tab::Projects);
        assert_eq!(Tab::Monitor.next(), Tab::Agenda);
        assert_eq!(Tab::Agenda.prev(), Tab::Monitor);
    }

    #[test]
    fn test_search_session_lifecycle() {
        let mut app = minimal_app();
        app.expand.toggle("archived");

        app.open_search();
        app.search_input = "invoice".to_string();
        app.apply_search();
        assert_eq!(app.query, "invoice");

        app.close_search();
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.query.is_empty());
        assert!(app.expand.is_expanded("archived"));
    }

    #[test]
    fn test_search_forces_matching_section_open() {
        let mut app = minimal_app();
        app.open_search();
        app.search_input = "Archived thing".to_string();
        app.apply_search();
        assert!(app.expand.is_expanded("archived"));
        assert!(!app.expand.is_expanded("completed"));

        app.close_search();
        assert!(!app.expand.is_expanded("archived"));
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = minimal_app();
        let n = app.cache.board.as_ref().unwrap().categories.len();
        assert!(n > 1);
        app.focus_prev();
        assert_eq!(app.focus, n - 1);
        app.focus_next();
        assert_eq!(app.focus, 0);
    }

    #[test]
    fn test_cycle_sort_only_touches_focused() {
        use crate::ops::sort::SortMode;
        let mut app = minimal_app();
        app.focus = 0;
        let focused = app.focused_category().unwrap();
        app.cycle_focused_sort();
        assert_eq!(app.sort.mode(&focused), SortMode::Deadline);
        assert_eq!(app.sort.mode("active"), SortMode::Status);
    }
}
