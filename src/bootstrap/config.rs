//! # Configuration Loader
//!
//! Reads the TOML file into the [`AppConfig`] DTO and lays command-line
//! overrides on top. Defaults for an empty field are decided in
//! [`wiring`](super::wiring), not here.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;
use tt_core::config::AppConfig;

use crate::cli::GlobalArgs;

const APP_DIR: &str = "tasktrack";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file
///
/// Pure data loading: empty strings and missing sections are accepted as
/// they are.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config_dir>/tasktrack/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `<data_local_dir>/tasktrack`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR))
}

/// Config for this invocation.
///
/// An explicit `--config` must exist. The default location is optional:
/// when it is absent an empty config is used.
pub fn resolve_config(args: &GlobalArgs) -> anyhow::Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(&path)?,
            _ => {
                debug!("No config file found, using empty config");
                AppConfig::empty()
            }
        },
    };

    apply_overrides(&mut config, args);
    Ok(config)
}

/// Session values from flags or environment win over the file.
pub fn apply_overrides(config: &mut AppConfig, args: &GlobalArgs) {
    if let Some(user_id) = &args.user_id {
        config.session_user_id = user_id.clone();
    }
    if let Some(token) = &args.access_token {
        config.session_access_token = token.clone();
    }
}
