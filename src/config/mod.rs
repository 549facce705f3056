//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::app::profile::DEFAULT_SETTINGS_PATH;
use crate::app::session::SessionUser;

/// Directory name under the platform config root
const APP_DIR_NAME: &str = "admin-dashboard";

/// Prefix for environment overrides (ADMIN_PORT, ADMIN_USER__NAME, ...)
const ENV_PREFIX: &str = "ADMIN";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Target of the account-settings link
    #[serde(default = "default_settings_path")]
    pub settings_path: String,

    /// User the session starts with; absent means signed out
    #[serde(default)]
    pub user: Option<SessionUser>,
}

fn default_port() -> u16 {
    8080
}

fn default_settings_path() -> String {
    DEFAULT_SETTINGS_PATH.to_string()
}

/// Get config directory (ADMIN_CONFIG_DIR or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ADMIN_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Read a port from the environment; unset or unparsable gives `None`.
fn env_port(name: &str) -> Option<u16> {
    let value = std::env::var(name).ok()?;
    match value.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", name, value);
            None
        }
    }
}

/// ADMIN_* variables for the environment source. ADMIN_PORT is resolved
/// separately so an invalid value cannot fail deserialization.
fn prefixed_env() -> HashMap<String, String> {
    let port_var = format!("{}_PORT", ENV_PREFIX);
    let prefix = format!("{}_", ENV_PREFIX);
    std::env::vars()
        .filter(|(key, _)| key.starts_with(&prefix) && *key != port_var)
        .collect()
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        .set_default("settings_path", default_settings_path())?
        // Load from config file if it exists (config.toml, config.json, ...)
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (ADMIN_SETTINGS_PATH, ADMIN_USER__NAME, etc.)
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(Some(prefixed_env())),
        );

    // Port precedence: ADMIN_PORT > PORT > config file > default
    if let Some(port) = env_port("ADMIN_PORT").or_else(|| env_port("PORT")) {
        builder = builder.set_override("port", i64::from(port))?;
    }

    let config: Config = builder.build()?.try_deserialize()?;
    crate::api::validate_settings_path(&config.settings_path)?;

    Ok(config)
}
