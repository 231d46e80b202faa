//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration structures and the TOML → DTO mapping. Nothing here
//! validates or computes defaults: an empty string is a fact, and deciding
//! what it means belongs to the wiring code.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the hosted backend, e.g. `https://xyz.example.co`
    pub remote_url: String,

    /// Public API key sent with every table request
    pub remote_anon_key: String,

    /// Table name (may be empty; wiring falls back to `todos`)
    pub remote_table: String,

    /// Signed-in user id (may be empty - nobody signed in)
    pub session_user_id: String,

    /// Access token for the signed-in user
    pub session_access_token: String,

    /// Local mirror database path (path info only, no existence check)
    pub database_path: PathBuf,

    /// Remove mirror entries that a successful full list no longer returns
    pub prune_on_full_sync: bool,
}

fn str_at<'a>(value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation or
    /// default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            remote_url: str_at(toml_value, "remote", "url").to_string(),
            remote_anon_key: str_at(toml_value, "remote", "anon_key").to_string(),
            remote_table: str_at(toml_value, "remote", "table").to_string(),
            session_user_id: str_at(toml_value, "session", "user_id").to_string(),
            session_access_token: str_at(toml_value, "session", "access_token").to_string(),
            database_path: PathBuf::from(str_at(toml_value, "storage", "database_path")),
            prune_on_full_sync: toml_value
                .get("mirror")
                .and_then(|m| m.get("prune_on_full_sync"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            remote_url: String::new(),
            remote_anon_key: String::new(),
            remote_table: String::new(),
            session_user_id: String::new(),
            session_access_token: String::new(),
            database_path: PathBuf::new(),
            prune_on_full_sync: false,
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// `data_dir` is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tasktrack.db"),
            ..Self::empty()
        }
    }
}
