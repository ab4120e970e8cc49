use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::model::calendar::CalendarData;
use crate::model::changelog::ChangelogData;
use crate::model::config::DeckConfig;
use crate::model::item::BoardData;
use crate::model::projects::ProjectsData;
use crate::model::schedule::JobsData;
use crate::model::session::SessionsData;

/// Banner shown while the newest snapshot load failed and the view is
/// serving the previous payloads.
pub const SYNC_FAILED_BANNER: &str = "⚠ Data sync failed — showing cached data";

/// Error type for snapshot I/O operations
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("not a deck: no deck/ directory found")]
    NotADeck,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse deck.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not parse {path}: {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the deck by walking up from the given directory, looking for
/// a `deck/` subdirectory holding deck.toml.
pub fn discover_deck(start: &Path) -> Result<PathBuf, FeedError> {
    let mut current = start.to_path_buf();
    loop {
        let deck_dir = current.join("deck");
        if deck_dir.is_dir() && deck_dir.join("deck.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(FeedError::NotADeck);
        }
    }
}

/// An opened deck: its location and parsed configuration. Snapshot
/// payloads are loaded on demand, never held here.
#[derive(Debug, Clone)]
pub struct Feed {
    pub root: PathBuf,
    pub deck_dir: PathBuf,
    pub config: DeckConfig,
}

impl Feed {
    /// Open the deck at an explicit root directory.
    pub fn open(root: &Path) -> Result<Feed, FeedError> {
        let deck_dir = root.join("deck");
        if !deck_dir.is_dir() {
            return Err(FeedError::NotADeck);
        }
        let config_path = deck_dir.join("deck.toml");
        let config_text = fs::read_to_string(&config_path).map_err(|e| FeedError::ReadError {
            path: config_path.clone(),
            source: e,
        })?;
        let config: DeckConfig = toml::from_str(&config_text)?;
        Ok(Feed {
            root: root.to_path_buf(),
            deck_dir,
            config,
        })
    }

    /// Walk up from `start` to find and open the deck.
    pub fn discover(start: &Path) -> Result<Feed, FeedError> {
        let root = discover_deck(start)?;
        Feed::open(&root)
    }

    pub fn load_board(&self) -> Result<BoardData, FeedError> {
        self.load_json("items.json")
    }

    pub fn load_calendar(&self) -> Result<CalendarData, FeedError> {
        self.load_json("calendar.json")
    }

    pub fn load_projects(&self) -> Result<ProjectsData, FeedError> {
        self.load_json("projects.json")
    }

    pub fn load_jobs(&self) -> Result<JobsData, FeedError> {
        self.load_json("crons.json")
    }

    pub fn load_sessions(&self) -> Result<SessionsData, FeedError> {
        self.load_json("sessions.json")
    }

    pub fn load_changelog(&self) -> Result<ChangelogData, FeedError> {
        self.load_json("changelog.json")
    }

    fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, FeedError> {
        let path = self.deck_dir.join(name);
        let text = fs::read_to_string(&path).map_err(|e| FeedError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| FeedError::JsonParseError { path, source: e })
    }
}

/// Last-good payloads. A failed refresh keeps whatever loaded before and
/// raises `sync_failed`; the next clean refresh clears it.
#[derive(Debug, Clone, Default)]
pub struct FeedCache {
    pub board: Option<BoardData>,
    pub calendar: Option<CalendarData>,
    pub projects: Option<ProjectsData>,
    pub jobs: Option<JobsData>,
    pub changelog: Option<ChangelogData>,
    pub sessions: Option<SessionsData>,
    pub sync_failed: bool,
}

impl FeedCache {
    /// Reload everything on the board cadence. Returns true when every
    /// payload loaded.
    pub fn refresh_board(&mut self, feed: &Feed) -> bool {
        let mut ok = true;
        match feed.load_board() {
            Ok(data) => self.board = Some(data),
            Err(_) => ok = false,
        }
        match feed.load_calendar() {
            Ok(data) => self.calendar = Some(data),
            Err(_) => ok = false,
        }
        match feed.load_projects() {
            Ok(data) => self.projects = Some(data),
            Err(_) => ok = false,
        }
        match feed.load_jobs() {
            Ok(data) => self.jobs = Some(data),
            Err(_) => ok = false,
        }
        match feed.load_changelog() {
            Ok(data) => self.changelog = Some(data),
            Err(_) => ok = false,
        }
        self.sync_failed = !ok;
        ok
    }

    /// Reload the session payload on its faster cadence.
    pub fn refresh_sessions(&mut self, feed: &Feed) -> bool {
        match feed.load_sessions() {
            Ok(data) => {
                self.sessions = Some(data);
                true
            }
            Err(_) => {
                self.sync_failed = true;
                false
            }
        }
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.sync_failed.then_some(SYNC_FAILED_BANNER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_deck(dir: &Path) {
        let deck_dir = dir.join("deck");
        fs::create_dir_all(&deck_dir).unwrap();
        fs::write(deck_dir.join("deck.toml"), "[deck]\nname = \"test\"\n").unwrap();
        fs::write(
            deck_dir.join("items.json"),
            r#"{"categories":[{"id":"urgent","items":[{"id":1,"title":"First"}]}]}"#,
        )
        .unwrap();
        fs::write(deck_dir.join("calendar.json"), r#"{"events":[]}"#).unwrap();
        fs::write(deck_dir.join("projects.json"), r#"{"projects":[]}"#).unwrap();
        fs::write(
            deck_dir.join("crons.json"),
            r#"{"jobs":[],"cronMapping":{}}"#,
        )
        .unwrap();
        fs::write(deck_dir.join("sessions.json"), r#"{"sessions":[]}"#).unwrap();
        fs::write(deck_dir.join("changelog.json"), r#"{"entries":[]}"#).unwrap();
    }

    #[test]
    fn test_discover_deck() {
        let tmp = TempDir::new().unwrap();
        create_test_deck(tmp.path());

        let root = discover_deck(tmp.path()).unwrap();
        assert_eq!(root, tmp.path());

        let sub = tmp.path().join("deck");
        let root = discover_deck(&sub).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn test_discover_deck_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(discover_deck(tmp.path()).is_err());
    }

    #[test]
    fn test_open_and_load() {
        let tmp = TempDir::new().unwrap();
        create_test_deck(tmp.path());

        let feed = Feed::open(tmp.path()).unwrap();
        assert_eq!(feed.config.deck.name.as_deref(), Some("test"));
        let board = feed.load_board().unwrap();
        assert_eq!(board.categories[0].items[0].title, "First");
    }

    #[test]
    fn test_refresh_keeps_cache_on_failure() {
        let tmp = TempDir::new().unwrap();
        create_test_deck(tmp.path());
        let feed = Feed::open(tmp.path()).unwrap();

        let mut cache = FeedCache::default();
        assert!(cache.refresh_board(&feed));
        assert!(cache.refresh_sessions(&feed));
        assert!(cache.banner().is_none());

        // Corrupt one payload: refresh fails, cached board survives.
        fs::write(tmp.path().join("deck/items.json"), "{not json").unwrap();
        assert!(!cache.refresh_board(&feed));
        assert!(cache.banner().is_some());
        assert_eq!(
            cache.board.as_ref().unwrap().categories[0].items[0].title,
            "First"
        );

        // Restored payload clears the banner.
        fs::write(
            tmp.path().join("deck/items.json"),
            r#"{"categories":[]}"#,
        )
        .unwrap();
        assert!(cache.refresh_board(&feed));
        assert!(cache.banner().is_none());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        create_test_deck(tmp.path());
        fs::write(tmp.path().join("deck/sessions.json"), "[]").unwrap();

        let feed = Feed::open(tmp.path()).unwrap();
        assert!(matches!(
            feed.load_sessions(),
            Err(FeedError::JsonParseError { .. })
        ));
    }
}
