use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::{BoardConfig, Filter, TaskId};

#[derive(Parser)]
#[command(name = "tb", about = concat!("[x] taskboard v", env!("CARGO_PKG_VERSION"), " - a tiny synced to-do board"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./taskboard.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the task service
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Number of seed tasks to fetch
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Log filter, e.g. "debug" or "taskboard=trace"
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Command-line flags win over the config file
    pub fn apply_overrides(&self, config: &mut BoardConfig) {
        if let Some(url) = &self.api_url {
            config.remote.base_url = url.clone();
        }
        if let Some(limit) = self.limit {
            config.remote.seed_limit = limit;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the seed tasks and list them
    List(ListArgs),
    /// Create a task on the remote service
    Add(AddArgs),
    /// Change a task's title on the remote service
    Update(UpdateArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Which tasks to show (all, completed, uncompleted)
    #[arg(long, short, default_value = "all")]
    pub filter: Filter,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Task ID
    pub id: TaskId,
    /// New title
    pub title: String,
    /// Keep the task marked completed
    #[arg(long)]
    pub completed: bool,
}
