//! Service context bundling all port trait objects.

use std::io::{self, BufReader};

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::prompt::TerminalPrompter;
use crate::adapters::sqlite::Database;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::ports::clock::Clock;
use crate::ports::prompt::Prompter;
use crate::ports::repository::CampaignRepository;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations.
pub struct ServiceContext {
    /// Store of campaigns, influencers, and their links.
    pub repo: Box<dyn CampaignRepository>,
    /// Source of interactive answers.
    pub prompter: Box<dyn Prompter>,
    /// Clock for status filters.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Creates a live context: the configured SQLite store, the terminal, the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the database cannot be opened or migrated.
    pub async fn live(config: &AppConfig) -> AppResult<Self> {
        let db = Database::connect(&config.database_url)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(Self::new(
            Box::new(db),
            Box::new(TerminalPrompter::new(BufReader::new(io::stdin()), io::stdout())),
            Box::new(LiveClock),
        ))
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(
        repo: Box<dyn CampaignRepository>,
        prompter: Box<dyn Prompter>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self { repo, prompter, clock }
    }
}

/// Context over a fresh in-memory store, scripted answers, and a clock
/// pinned at `2021-07-01 00:00:00`.
#[cfg(test)]
pub(crate) async fn test_context(answers: &str) -> ServiceContext {
    scripted_context(Box::new(crate::adapters::sqlite::memory_database().await), answers)
}

/// Context over `repo` with scripted answers and the pinned test clock.
#[cfg(test)]
pub(crate) fn scripted_context(repo: Box<dyn CampaignRepository>, answers: &str) -> ServiceContext {
    use crate::adapters::live::clock::FixedClock;

    let now = crate::model::parse_timestamp("2021-07-01 00:00:00").unwrap();
    ServiceContext::new(
        repo,
        Box::new(TerminalPrompter::new(
            io::Cursor::new(answers.as_bytes().to_vec()),
            io::sink(),
        )),
        Box::new(FixedClock(now)),
    )
}
