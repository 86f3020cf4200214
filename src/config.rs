//! Runtime configuration resolved from flags, the environment, and `.env`.

use std::env;

use crate::error::{AppError, AppResult};

/// Database used when neither `--database-url` nor `DATABASE_URL` is set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://campaigns.db?mode=rwc";

/// Log filter used when neither `CAMPAIGNCTL_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// sqlx connection URL of the SQLite store.
    pub database_url: String,
    /// `tracing` env-filter directive.
    pub log_filter: String,
}

impl AppConfig {
    /// Loads `.env` if present, then resolves settings from the process environment.
    ///
    /// A flag value wins over the environment, which wins over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the resolved database URL is blank.
    pub fn load(database_url: Option<&str>, verbose: bool) -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::resolve(|key| env::var(key).ok(), database_url, verbose)
    }

    /// Resolves settings using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the resolved database URL is blank.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        database_url: Option<&str>,
        verbose: bool,
    ) -> AppResult<Self> {
        let database_url = database_url
            .map(str::to_string)
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(AppError::Config("DATABASE_URL must not be empty".into()));
        }

        let log_filter = if verbose {
            "debug".to_string()
        } else {
            lookup("CAMPAIGNCTL_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
        };

        Ok(Self { database_url, log_filter })
    }
}
