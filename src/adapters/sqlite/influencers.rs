//! Influencer database operations

use sqlx::FromRow;
use tracing::info;

use super::Database;
use crate::model::{Influencer, NewInfluencer};

/// Column list selected for every influencer read.
pub(super) const INFLUENCER_COLUMNS: &str = "i.id, i.name, i.email, i.followers_count";

#[derive(Debug, FromRow)]
pub(super) struct InfluencerRow {
    id: i64,
    name: String,
    email: String,
    followers_count: i64,
}

impl TryFrom<InfluencerRow> for Influencer {
    type Error = sqlx::Error;

    fn try_from(row: InfluencerRow) -> Result<Self, Self::Error> {
        let followers_count =
            u32::try_from(row.followers_count).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Self { id: row.id, name: row.name, email: row.email, followers_count })
    }
}

pub(super) fn into_influencers(rows: Vec<InfluencerRow>) -> Result<Vec<Influencer>, sqlx::Error> {
    rows.into_iter().map(Influencer::try_from).collect()
}

impl Database {
    pub(super) async fn get_influencer(&self, id: i64) -> Result<Option<Influencer>, sqlx::Error> {
        let row = sqlx::query_as::<_, InfluencerRow>(&format!(
            "SELECT {INFLUENCER_COLUMNS} FROM influencer i WHERE i.id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(Influencer::try_from).transpose()
    }

    pub(super) async fn create_influencer(
        &self,
        influencer: &NewInfluencer,
    ) -> Result<Influencer, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO influencer (name, email, followers_count) VALUES (?, ?, ?)")
                .bind(&influencer.name)
                .bind(&influencer.email)
                .bind(i64::from(influencer.followers_count))
                .execute(self.pool())
                .await?;

        let id = result.last_insert_rowid();
        info!(influencer_id = id, name = %influencer.name, "influencer persisted");

        Ok(Influencer {
            id,
            name: influencer.name.clone(),
            email: influencer.email.clone(),
            followers_count: influencer.followers_count,
        })
    }

    pub(super) async fn all_influencers(&self, limit: u32) -> Result<Vec<Influencer>, sqlx::Error> {
        let rows = sqlx::query_as::<_, InfluencerRow>(&format!(
            "SELECT {INFLUENCER_COLUMNS} FROM influencer i ORDER BY i.id LIMIT ?"
        ))
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await?;

        into_influencers(rows)
    }
}
