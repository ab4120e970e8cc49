use std::path::PathBuf;

use chrono::{Duration, Utc};
use indexmap::IndexMap;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::feed::Feed;
use crate::model::calendar::{CalendarData, CalendarEvent};
use crate::model::changelog::{Change, ChangelogData, ChangelogEntry};
use crate::model::config::DeckConfig;
use crate::model::item::{BoardData, Category, Item};
use crate::model::projects::{Project, ProjectsData};
use crate::model::schedule::{Job, JobsData};
use crate::model::session::{Session, SessionsData};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 30;

/// Render the whole UI into an in-memory buffer and return plain text
/// (no styles).
pub fn render_app(app: &mut App) -> String {
    let backend = TestBackend::new(TERM_W, TERM_H);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| crate::tui::render::render(frame, app))
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub fn item(id: u64, title: &str, status: Option<&str>) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: None,
        status: status.map(str::to_string),
        deadline: None,
        last_updated: None,
        tags: vec![],
    }
}

fn job(id: &str, name: &str, schedule: &str, last_status: &str, errors: u32) -> Job {
    Job {
        id: id.to_string(),
        name: name.to_string(),
        schedule: Some(schedule.to_string()),
        enabled: true,
        last_status: Some(last_status.to_string()),
        consecutive_errors: errors,
        last_run_at: None,
        next_run_at: None,
    }
}

fn session(key: &str, kind: &str, spawned_by: Option<&str>) -> Session {
    Session {
        key: key.to_string(),
        label: Some(key.to_string()),
        kind: Some(kind.to_string()),
        status: None,
        spawned_by: spawned_by.map(str::to_string),
        started_at: None,
        last_activity: None,
        model: None,
        tokens_used: None,
    }
}

fn fixture_board() -> BoardData {
    BoardData {
        last_updated: None,
        categories: vec![
            Category {
                id: "urgent".to_string(),
                items: vec![
                    item(1, "Call vendor", Some("overdue")),
                    item(2, "Pay invoice", Some("action-needed")),
                ],
            },
            Category {
                id: "active".to_string(),
                items: vec![item(3, "Draft report", Some("in-progress"))],
            },
            Category {
                id: "needs-review".to_string(),
                items: vec![Item {
                    last_updated: Some(
                        (Utc::now() - Duration::days(10)).to_rfc3339(),
                    ),
                    ..item(4, "Review access", Some("waiting"))
                }],
            },
            Category {
                id: "reminders".to_string(),
                items: vec![item(5, "Water plants", None)],
            },
            Category {
                id: "completed".to_string(),
                items: vec![item(6, "Shipped feature", Some("completed"))],
            },
            Category {
                id: "archived".to_string(),
                items: vec![item(7, "Archived thing", None)],
            },
        ],
    }
}

/// An App with a full set of in-memory payloads and no disk behind it.
pub fn minimal_app() -> App {
    let feed = Feed {
        root: PathBuf::from("/tmp/test-deck"),
        deck_dir: PathBuf::from("/tmp/test-deck/deck"),
        config: DeckConfig::default(),
    };
    let mut app = App::new(feed);

    app.cache.board = Some(fixture_board());

    app.cache.calendar = Some(CalendarData {
        last_updated: None,
        events: vec![CalendarEvent {
            title: "Standup".to_string(),
            description: None,
            start: Some("09:00".to_string()),
            end: None,
            location: None,
            all_day: false,
        }],
    });

    app.cache.projects = Some(ProjectsData {
        last_updated: None,
        projects: vec![Project {
            id: "atlas".to_string(),
            name: "Atlas".to_string(),
            status: Some("on-track".to_string()),
            urgent: vec![item(10, "Fix deploy", Some("action-needed"))],
            active: vec![item(11, "Wire up ingest", Some("in-progress"))],
            deferred: vec![],
            completed: vec![item(12, "Scaffold repo", Some("completed"))],
        }],
    });

    let mut cron_mapping = IndexMap::new();
    cron_mapping.insert("intel-*".to_string(), "intelligence".to_string());
    app.cache.jobs = Some(JobsData {
        last_updated: None,
        jobs: vec![
            job("1", "intel-digest", "0 14 * * *", "ok", 0),
            job("2", "mystery-job", "*/15 * * * *", "error", 3),
        ],
        cron_mapping,
    });

    app.cache.sessions = Some(SessionsData {
        last_updated: None,
        sessions: vec![
            session("main", "main", None),
            session("worker", "subagent", Some("main")),
        ],
    });

    app.cache.changelog = Some(ChangelogData {
        entries: vec![ChangelogEntry {
            timestamp: Utc::now().to_rfc3339(),
            source: None,
            changes: vec![Change {
                kind: "added".to_string(),
                item_title: Some("New lead".to_string()),
                summary: None,
            }],
        }],
    });

    app
}
