//! Runtime configuration
//!
//! Settings are resolved in layers, later layers winning:
//! built-in defaults, a TOML file, the process environment (after `.env`
//! has been loaded by `main`), and finally command-line flags.

pub mod database;
pub mod repository;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://swift_codes.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Environment variable names
mod env_vars {
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const BIND_ADDR: &str = "BIND_ADDR";
    pub const MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// sqlx SQLite connection string
    pub database_url: String,
    /// Address the HTTP server listens on
    pub bind_addr: String,
    /// Upper bound for pooled database connections
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database_url: Option<String>,
    pub bind_addr: Option<String>,
}

impl Config {
    /// Resolve the configuration from every layer.
    ///
    /// An explicitly given config file must exist; the default location
    /// (~/.config/swift-registry/config.toml) is only read when present.
    pub fn load(config_path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_overrides(overrides);

        log::debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay values from environment variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env_vars::DATABASE_URL) {
            self.database_url = url;
        }
        if let Some(addr) = lookup(env_vars::BIND_ADDR) {
            self.bind_addr = addr;
        }
        if let Some(max) = lookup(env_vars::MAX_CONNECTIONS) {
            self.max_connections = max.trim().parse().with_context(|| {
                format!("{} must be a positive integer, got '{}'", env_vars::MAX_CONNECTIONS, max)
            })?;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(url) = &overrides.database_url {
            self.database_url = url.clone();
        }
        if let Some(addr) = &overrides.bind_addr {
            self.bind_addr = addr.clone();
        }
    }
}

/// ~/.config/swift-registry/config.toml (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("swift-registry").join("config.toml"))
}
