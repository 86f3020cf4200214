//! Database migrations
//!
//! Handles schema creation and versioned migrations.

use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::{debug, info, warn};

/// Current database schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        ",
    )
    .execute(pool)
    .await?;

    let current_version = current_version(pool).await?;
    debug!(current_version, target_version = SCHEMA_VERSION, "checking database migrations");

    for version in (current_version + 1)..=SCHEMA_VERSION {
        run_migration(pool, version).await?;
    }

    Ok(())
}

async fn current_version(pool: &SqlitePool) -> Result<i32, sqlx::Error> {
    let row = sqlx::query("SELECT MAX(version) AS version FROM _migrations")
        .fetch_optional(pool)
        .await?;

    Ok(row.and_then(|row| row.try_get::<i32, _>("version").ok()).unwrap_or(0))
}

/// Applies one migration and records it, all inside one transaction.
async fn run_migration(pool: &SqlitePool, version: i32) -> Result<(), sqlx::Error> {
    let (name, sql) = match version {
        1 => ("campaigns_and_influencers", MIGRATION_V1),
        _ => {
            warn!(version, "unknown migration version");
            return Ok(());
        }
    };

    info!(version, name, "applying migration");

    let mut tx = pool.begin().await?;
    for statement in sql.split(';').filter(|s| !s.trim().is_empty()) {
        sqlx::query(statement.trim()).execute(&mut *tx).await?;
    }
    sqlx::query("INSERT INTO _migrations (version, name) VALUES (?, ?)")
        .bind(version)
        .bind(name)
        .execute(&mut *tx)
        .await?;
    tx.commit().await
}

/// Migration v1: campaigns, influencers, and the join table between them
const MIGRATION_V1: &str = r"
CREATE TABLE IF NOT EXISTS campaign (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 255),
    description TEXT,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    CHECK (end_date > start_date)
);

CREATE INDEX IF NOT EXISTS idx_campaign_dates ON campaign(start_date, end_date);

CREATE TABLE IF NOT EXISTS influencer (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    followers_count INTEGER NOT NULL CHECK (followers_count >= 0)
);

-- Composite key keeps membership set-like
CREATE TABLE IF NOT EXISTS campaign_influencer (
    campaign_id INTEGER NOT NULL,
    influencer_id INTEGER NOT NULL,
    PRIMARY KEY (campaign_id, influencer_id),
    FOREIGN KEY (campaign_id) REFERENCES campaign(id) ON DELETE CASCADE,
    FOREIGN KEY (influencer_id) REFERENCES influencer(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_campaign_influencer_campaign ON campaign_influencer(campaign_id);
CREATE INDEX IF NOT EXISTS idx_campaign_influencer_influencer ON campaign_influencer(influencer_id);
";
