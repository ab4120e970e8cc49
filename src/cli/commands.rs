use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deck", about = concat!("[>] opsdeck v", env!("CARGO_PKG_VERSION"), " - your dashboards are plain json"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different deck directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the agenda board (sorted, optionally filtered)
    Agenda(AgendaArgs),
    /// Show scheduled jobs grouped by division
    Jobs(JobsArgs),
    /// Show worker sessions as a tree
    Sessions,
    /// Show changes from the last 24 hours
    Changes,
    /// Explain a cron expression
    Cron(CronArgs),
    /// Validate the deck and its snapshot files
    Check,
}

#[derive(Args)]
pub struct AgendaArgs {
    /// Category to show (default: all)
    pub category: Option<String>,
    /// Sort mode: status, deadline, updated, title
    #[arg(long, default_value = "status")]
    pub sort: String,
    /// Filter items by substring over title and description
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct JobsArgs {
    /// Division to show (default: all)
    pub division: Option<String>,
}

#[derive(Args)]
pub struct CronArgs {
    /// Cron expression, e.g. "*/15 9-17 * * 1-5"
    pub expr: String,
}
