pub mod changelog;
pub mod cron;
pub mod deadline;
pub mod divisions;
pub mod expand;
pub mod filter;
pub mod sessions;
pub mod sort;
pub mod stale;
