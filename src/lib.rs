pub mod cli;
pub mod feed;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
