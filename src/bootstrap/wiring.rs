//! # Dependency Injection
//!
//! The only place that knows about `tt-infra` and `tt-app` at once. It
//! assembles concrete adapters behind the port traits and hands them to
//! [`TodoSync`]; it makes no decisions beyond filling in empty config
//! fields with their defaults.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tt_app::{AppDeps, SyncOptions, TodoSync};
use tt_core::config::AppConfig;
use tt_core::ports::{ClockPort, RemoteTodoStorePort, SessionPort, TodoMirrorPort};
use tt_infra::db::executor::DieselSqliteExecutor;
use tt_infra::db::mappers::TodoRowMapper;
use tt_infra::db::pool::init_db_pool;
use tt_infra::remote::DEFAULT_TABLE;
use tt_infra::{
    DieselTodoMirrorRepository, RestTodoStore, RestTodoStoreConfig, StaticSessionProvider,
    SystemClock,
};

use super::config::default_data_dir;

const USER_AGENT: &str = concat!("tasktrack/", env!("CARGO_PKG_VERSION"));

/// Database file for the local mirror; an empty config path means the
/// platform data directory.
pub fn resolve_database_path(config: &AppConfig) -> anyhow::Result<PathBuf> {
    if !config.database_path.as_os_str().is_empty() {
        return Ok(config.database_path.clone());
    }
    let data_dir = default_data_dir().context("No local data directory on this platform")?;
    Ok(AppConfig::with_system_defaults(data_dir).database_path)
}

pub fn resolve_remote_config(config: &AppConfig) -> RestTodoStoreConfig {
    let table = if config.remote_table.is_empty() {
        DEFAULT_TABLE.to_string()
    } else {
        config.remote_table.clone()
    };
    RestTodoStoreConfig {
        base_url: config.remote_url.clone(),
        anon_key: config.remote_anon_key.clone(),
        table,
    }
}

/// Build a [`TodoSync`] wired to the SQLite mirror and the hosted table.
pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<TodoSync> {
    let db_path = resolve_database_path(config)?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create database directory: {}", parent.display())
        })?;
    }
    let db_url = db_path.to_string_lossy();
    let pool = init_db_pool(&db_url)
        .with_context(|| format!("Failed to open local mirror at {}", db_path.display()))?;
    info!(path = %db_path.display(), "Local mirror ready");

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let mirror: Arc<dyn TodoMirrorPort> = Arc::new(DieselTodoMirrorRepository::new(
        DieselSqliteExecutor::new(pool),
        TodoRowMapper::new(clock.clone()),
        clock,
    ));

    let session: Arc<dyn SessionPort> = Arc::new(StaticSessionProvider::from_config(config));

    if config.remote_url.is_empty() {
        warn!("No remote url configured; lists will be served from the local mirror");
    }
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;
    let remote: Arc<dyn RemoteTodoStorePort> = Arc::new(RestTodoStore::new(
        client,
        resolve_remote_config(config),
        session.clone(),
    ));

    Ok(TodoSync::new(
        AppDeps {
            remote,
            session,
            mirror,
        },
        SyncOptions {
            prune_on_full_sync: config.prune_on_full_sync,
        },
    ))
}
