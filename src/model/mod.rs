pub mod calendar;
pub mod changelog;
pub mod config;
pub mod item;
pub mod projects;
pub mod schedule;
pub mod session;

pub use calendar::*;
pub use changelog::*;
pub use config::*;
pub use item::*;
pub use projects::*;
pub use schedule::*;
pub use session::*;
