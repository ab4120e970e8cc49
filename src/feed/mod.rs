pub mod snapshot;

pub use snapshot::{discover_deck, Feed, FeedCache, FeedError};
