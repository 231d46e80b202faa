use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tt_core::todo::{CategoryFilter, Priority, StatusFilter, TodoFilter};

/// TaskTrack - todo list synced with a hosted table, usable offline
#[derive(Parser, Debug)]
#[command(name = "tasktrack", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: <config dir>/tasktrack/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Signed-in user id (or set TASKTRACK_USER_ID)
    #[arg(long, global = true, env = "TASKTRACK_USER_ID")]
    pub user_id: Option<String>,

    /// Access token for the signed-in user (or set TASKTRACK_ACCESS_TOKEN)
    #[arg(long, global = true, env = "TASKTRACK_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List todos, newest first
    List(ListArgs),
    /// List the category filter choices
    Categories,
    /// Create a todo
    Add(NewTodoArgs),
    /// Change fields of a todo
    Edit(EditArgs),
    /// Flip a todo between active and completed
    Toggle { id: String },
    /// Delete a todo
    Rm { id: String },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// all, active or completed
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Category name, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,
}

impl ListArgs {
    pub fn filter(&self) -> TodoFilter {
        TodoFilter::new(self.status, CategoryFilter::from(self.category.as_str()))
    }
}

#[derive(Args, Debug)]
pub struct NewTodoArgs {
    pub title: String,

    #[arg(long)]
    pub description: Option<String>,

    /// RFC 3339 timestamp or YYYY-MM-DD
    #[arg(long, value_parser = parse_due)]
    pub due: Option<DateTime<Utc>>,

    #[arg(long, default_value = "medium")]
    pub priority: Priority,

    #[arg(long, default_value = "personal")]
    pub category: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// RFC 3339 timestamp or YYYY-MM-DD
    #[arg(long, value_parser = parse_due, conflicts_with = "clear_due")]
    pub due: Option<DateTime<Utc>>,

    #[arg(long)]
    pub priority: Option<Priority>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub clear_due: bool,

    #[arg(long)]
    pub clear_description: bool,
}

/// Due dates: full RFC 3339, or a bare date meaning midnight UTC.
pub fn parse_due(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date '{value}': expected RFC 3339 or YYYY-MM-DD"))
}
