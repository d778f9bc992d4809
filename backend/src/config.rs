//! Runtime configuration, read from the environment (and `.env` via `dotenvy`).

use anyhow::{anyhow, Context, Result};
use chrono::FixedOffset;
use std::str::FromStr;

use crate::storage::connection::DEFAULT_DATABASE_URL;

/// Which event store backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!("unknown storage backend '{}'", other)),
        }
    }
}

/// Application configuration.
///
/// | Env Var                      | Default            |
/// |------------------------------|--------------------|
/// | `HOST`                       | `0.0.0.0`          |
/// | `PORT`                       | `8000`             |
/// | `DATABASE_URL`               | `sqlite:intake.db` |
/// | `STORAGE_BACKEND`            | `sqlite`           |
/// | `DAILY_GOAL_ML`              | `1300`             |
/// | `DISPLAY_UTC_OFFSET_MINUTES` | `330`              |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub storage_backend: StorageBackend,
    /// Intake goal per day in ml
    pub daily_goal_ml: i64,
    /// Offset used to show times and to read submitted `HH:MM` values.
    /// Defaults to India Standard Time.
    pub display_offset: FixedOffset,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            storage_backend: StorageBackend::Sqlite,
            daily_goal_ml: 1300,
            display_offset: FixedOffset::east_opt(330 * 60).expect("330 minutes is a valid offset"),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => defaults.port,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse::<StorageBackend>()?,
            None => defaults.storage_backend,
        };

        let daily_goal_ml = match lookup("DAILY_GOAL_ML") {
            Some(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("DAILY_GOAL_ML must be an integer, got '{}'", raw))?,
            None => defaults.daily_goal_ml,
        };

        let display_offset = match lookup("DISPLAY_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes = raw.parse::<i32>().with_context(|| {
                    format!("DISPLAY_UTC_OFFSET_MINUTES must be an integer, got '{}'", raw)
                })?;
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| anyhow!("DISPLAY_UTC_OFFSET_MINUTES out of range: {}", minutes))?
            }
            None => defaults.display_offset,
        };

        Ok(Self {
            host,
            port,
            database_url,
            storage_backend,
            daily_goal_ml,
            display_offset,
        })
    }

    /// `host:port` string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
