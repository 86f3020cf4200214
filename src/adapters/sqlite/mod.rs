//! SQLite store
//!
//! Holds campaigns, influencers, and the join table linking them. Query
//! methods live in per-table modules; this module owns the pool and wires
//! them to the [`CampaignRepository`] port.

mod assignments;
mod campaigns;
mod influencers;
mod migrations;

pub use migrations::run_migrations;

use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use crate::model::{
    Campaign, CampaignSummary, Influencer, ListQuery, NewCampaign, NewInfluencer,
};
use crate::ports::repository::{AssignOutcome, CampaignRepository, CreateOutcome, RepoFuture};

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the database at `url` and applies pending migrations.
    ///
    /// The pool holds a single connection: one invocation runs one operation,
    /// and `sqlite::memory:` databases only exist per connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the file cannot be opened,
    /// or a migration fails.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        debug!(url, "database connection opened");
        run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Get the underlying pool for direct queries
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl CampaignRepository for Database {
    fn find_campaign(&self, id: i64) -> RepoFuture<'_, Option<Campaign>> {
        Box::pin(async move { Ok(self.get_campaign(id).await?) })
    }

    fn find_influencer(&self, id: i64) -> RepoFuture<'_, Option<Influencer>> {
        Box::pin(async move { Ok(self.get_influencer(id).await?) })
    }

    fn list_campaigns(&self, query: &ListQuery) -> RepoFuture<'_, Vec<CampaignSummary>> {
        let query = query.clone();
        Box::pin(async move { Ok(self.list_campaign_summaries(&query).await?) })
    }

    fn find_overlapping(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> RepoFuture<'_, Vec<Campaign>> {
        Box::pin(async move { Ok(self.overlapping_campaigns(start, end).await?) })
    }

    fn insert_campaign(&self, campaign: &NewCampaign) -> RepoFuture<'_, CreateOutcome> {
        let campaign = campaign.clone();
        Box::pin(async move { Ok(self.create_campaign(&campaign).await?) })
    }

    fn delete_campaign(&self, id: i64) -> RepoFuture<'_, bool> {
        Box::pin(async move { Ok(self.remove_campaign(id).await?) })
    }

    fn insert_influencer(&self, influencer: &NewInfluencer) -> RepoFuture<'_, Influencer> {
        let influencer = influencer.clone();
        Box::pin(async move { Ok(self.create_influencer(&influencer).await?) })
    }

    fn list_influencers(&self, limit: u32) -> RepoFuture<'_, Vec<Influencer>> {
        Box::pin(async move { Ok(self.all_influencers(limit).await?) })
    }

    fn is_assigned(&self, campaign_id: i64, influencer_id: i64) -> RepoFuture<'_, bool> {
        Box::pin(async move { Ok(self.link_exists(campaign_id, influencer_id).await?) })
    }

    fn assign(&self, campaign_id: i64, influencer_id: i64) -> RepoFuture<'_, AssignOutcome> {
        Box::pin(async move { Ok(self.link(campaign_id, influencer_id).await?) })
    }

    fn unassign(&self, campaign_id: i64, influencer_id: i64) -> RepoFuture<'_, bool> {
        Box::pin(async move { Ok(self.unlink(campaign_id, influencer_id).await?) })
    }

    fn influencers_of(&self, campaign_id: i64) -> RepoFuture<'_, Vec<Influencer>> {
        Box::pin(async move { Ok(self.influencers_for_campaign(campaign_id).await?) })
    }

    fn campaigns_of(&self, influencer_id: i64) -> RepoFuture<'_, Vec<Campaign>> {
        Box::pin(async move { Ok(self.campaigns_for_influencer(influencer_id).await?) })
    }
}

/// Write transactions take the database write lock up front so a second
/// writer waits on `busy_timeout` instead of failing to upgrade a read lock.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// Opens a fresh migrated in-memory database for tests.
#[cfg(test)]
pub(crate) async fn memory_database() -> Database {
    Database::connect("sqlite::memory:").await.expect("in-memory database should open")
}

/// Opens the file database at `path`, creating and migrating it if needed.
#[cfg(test)]
pub(crate) async fn file_database(path: &std::path::Path) -> Database {
    Database::connect(&format!("sqlite://{}?mode=rwc", path.display()))
        .await
        .expect("file database should open")
}
