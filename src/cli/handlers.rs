use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Local, Utc};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::feed::{Feed, FeedError};
use crate::model::item::{status_label, Item};
use crate::ops::changelog::{count_changes, recent_entries};
use crate::ops::cron;
use crate::ops::divisions::{division_label, group_jobs};
use crate::ops::filter::{filter_section, normalize_query};
use crate::ops::sessions::session_forest;
use crate::ops::sort::{sorted_items, SortMode};

/// Global override for the deck directory (set by -C flag)
static DATA_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for open_feed()
    if let Some(ref dir) = cli.data_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        if let Ok(mut guard) = DATA_DIR_OVERRIDE.lock() {
            guard.replace(abs);
        }
    }

    match cli.command {
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Agenda(args) => cmd_agenda(args, json),
            Commands::Jobs(args) => cmd_jobs(args, json),
            Commands::Sessions => cmd_sessions(json),
            Commands::Changes => cmd_changes(json),
            Commands::Cron(args) => cmd_cron(args, json),
            Commands::Check => cmd_check(json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_feed() -> Result<Feed, FeedError> {
    let start = match DATA_DIR_OVERRIDE.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => None,
    };
    let start = match start {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(FeedError::IoError)?,
    };
    Feed::discover(&start)
}

fn parse_sort_mode(name: &str) -> Result<SortMode, String> {
    match name {
        "status" => Ok(SortMode::Status),
        "deadline" => Ok(SortMode::Deadline),
        "updated" => Ok(SortMode::LastUpdated),
        "title" => Ok(SortMode::Title),
        other => Err(format!(
            "unknown sort mode '{}' (expected status, deadline, updated or title)",
            other
        )),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_agenda(args: AgendaArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let feed = open_feed()?;
    let board = feed.load_board()?;
    let mode = parse_sort_mode(&args.sort)?;
    let query = normalize_query(args.search.as_deref().unwrap_or(""));
    let today = Local::now().date_naive();

    let mut sections = Vec::new();
    for category in &board.categories {
        if let Some(ref wanted) = args.category {
            if &category.id != wanted {
                continue;
            }
        }
        let sorted = sorted_items(&category.items, mode, today);
        let result = filter_section(&sorted, &query);
        if result.hidden() {
            continue;
        }
        let visible: Vec<Item> = sorted
            .into_iter()
            .filter(|item| result.is_visible(item.id))
            .collect();
        sections.push((category.id.clone(), result.badge(), visible));
    }

    if let Some(ref wanted) = args.category {
        if sections.is_empty() && query.is_empty() {
            return Err(format!("no category '{}'", wanted).into());
        }
    }

    if json {
        let out = AgendaJson {
            sections: sections
                .iter()
                .map(|(id, badge, items)| AgendaSectionJson {
                    category: id.clone(),
                    sort: mode.label().to_string(),
                    count: badge.clone(),
                    items: items.iter().map(ItemJson::from).collect(),
                })
                .collect(),
        };
        return print_json(&out);
    }

    for (id, badge, items) in &sections {
        println!("{} ({}) · sort: {}", id.to_uppercase(), badge, mode.label());
        for item in items {
            let mut line = format!("  {}", item.title);
            if let Some(ref status) = item.status {
                line = format!("  [{}] {}", status_label(status), item.title);
            }
            if let Some(ref deadline) = item.deadline {
                line.push_str(&format!("  (due {})", deadline));
            }
            println!("{}", line);
        }
        println!();
    }
    Ok(())
}

fn cmd_jobs(args: JobsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let feed = open_feed()?;
    let data = feed.load_jobs()?;
    let declared = &feed.config.divisions;
    let groups = group_jobs(&data.jobs, &data.cron_mapping, declared);

    let groups: Vec<_> = groups
        .into_iter()
        .filter(|g| args.division.as_deref().is_none_or(|d| g.id == d))
        .collect();

    if json {
        let out = JobsJson {
            divisions: groups
                .iter()
                .map(|g| DivisionJson {
                    id: g.id.clone(),
                    label: division_label(&g.id, declared),
                    jobs: g.jobs.iter().map(JobJson::from).collect(),
                })
                .collect(),
        };
        return print_json(&out);
    }

    for group in &groups {
        println!("{} ({})", division_label(&group.id, declared), group.jobs.len());
        for job in &group.jobs {
            let schedule = job
                .schedule
                .as_deref()
                .and_then(cron::humanize)
                .unwrap_or_default();
            println!("  [{}] {}  {}", job.badge().label(), job.name, schedule);
        }
        println!();
    }
    Ok(())
}

fn cmd_sessions(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let feed = open_feed()?;
    let data = feed.load_sessions()?;
    let rows = session_forest(&data.sessions);

    if json {
        let out = SessionsJson {
            sessions: rows
                .iter()
                .map(|row| SessionJson {
                    key: row.session.key.clone(),
                    label: row.session.label.clone(),
                    kind: row.session.kind.clone(),
                    status: row.session.status.clone(),
                    depth: row.depth,
                })
                .collect(),
        };
        return print_json(&out);
    }

    for row in &rows {
        let indent = "  ".repeat(row.depth);
        let branch = if row.depth > 0 { "└─ " } else { "" };
        let label = row.session.label.as_deref().unwrap_or(&row.session.key);
        let status = row.session.status.as_deref().unwrap_or("running");
        println!("{}{}{} [{}]", indent, branch, label, status);
    }
    Ok(())
}

fn cmd_changes(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let feed = open_feed()?;
    let data = feed.load_changelog()?;
    let recent = recent_entries(&data.entries, Utc::now());
    let counts = count_changes(&recent);

    if json {
        let out = ChangesJson {
            added: counts.added,
            modified: counts.modified,
            removed: counts.removed,
            entries: recent
                .iter()
                .map(|e| ChangelogEntryJson {
                    timestamp: e.timestamp.clone(),
                    changes: e
                        .changes
                        .iter()
                        .map(|c| ChangeJson {
                            kind: c.kind.clone(),
                            item_title: c.item_title.clone(),
                            summary: c.summary.clone(),
                        })
                        .collect(),
                })
                .collect(),
        };
        return print_json(&out);
    }

    println!(
        "Added: {} · Modified: {} · Removed: {}",
        counts.added, counts.modified, counts.removed
    );
    if recent.is_empty() {
        println!("No changes in the last 24 hours.");
        return Ok(());
    }
    for entry in &recent {
        println!("{}", entry.timestamp);
        for change in &entry.changes {
            println!(
                "  {} {}",
                change.kind.to_uppercase(),
                change.item_title.as_deref().unwrap_or("")
            );
        }
    }
    Ok(())
}

fn cmd_cron(args: CronArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let label = cron::humanize(&args.expr);
    if json {
        return print_json(&CronJson {
            expression: args.expr,
            label,
        });
    }
    match label {
        Some(label) => println!("{}", label),
        None => println!("(empty expression)"),
    }
    Ok(())
}

fn cmd_check(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let feed = open_feed()?;

    let files: Vec<(&str, Result<(), FeedError>)> = vec![
        ("items.json", feed.load_board().map(|_| ())),
        ("calendar.json", feed.load_calendar().map(|_| ())),
        ("projects.json", feed.load_projects().map(|_| ())),
        ("crons.json", feed.load_jobs().map(|_| ())),
        ("sessions.json", feed.load_sessions().map(|_| ())),
        ("changelog.json", feed.load_changelog().map(|_| ())),
    ];

    let ok = files.iter().all(|(_, r)| r.is_ok());

    if json {
        let out = CheckJson {
            root: feed.root.display().to_string(),
            ok,
            files: files
                .iter()
                .map(|(name, result)| FileCheckJson {
                    file: name.to_string(),
                    status: match result {
                        Ok(()) => "ok".to_string(),
                        Err(e) => e.to_string(),
                    },
                })
                .collect(),
        };
        print_json(&out)?;
    } else {
        println!("deck: {}", feed.root.display());
        for (name, result) in &files {
            match result {
                Ok(()) => println!("  {}: ok", name),
                Err(e) => println!("  {}: {}", name, e),
            }
        }
    }

    if ok {
        Ok(())
    } else {
        Err("deck has unreadable snapshot files".into())
    }
}
