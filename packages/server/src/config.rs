use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jobs_feed_url: String,
    /// Cron expression (with seconds) for repeated ingestion. `None` = run once at startup.
    pub ingest_schedule: Option<String>,
    pub request_timeout_secs: u64,
    pub database_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: non_empty("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: non_empty("PORT")
                .map(|v| v.parse())
                .transpose()
                .context("PORT must be a valid number")?
                .unwrap_or(DEFAULT_PORT),
            jobs_feed_url: non_empty("JOBS_FEED_URL")
                .unwrap_or_else(|| remotive_client::DEFAULT_URL.to_string()),
            ingest_schedule: non_empty("INGEST_SCHEDULE"),
            request_timeout_secs: non_empty("REQUEST_TIMEOUT_SECS")
                .map(|v| v.parse())
                .transpose()
                .context("REQUEST_TIMEOUT_SECS must be a valid number")?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            database_max_connections: non_empty("DATABASE_MAX_CONNECTIONS")
                .map(|v| v.parse())
                .transpose()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }
}
