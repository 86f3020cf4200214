//! Campaign–influencer link operations
//!
//! The `campaign_influencer` table is the only record of membership. Both
//! directions of the relation are read from it.

use tracing::{debug, info, warn};

use super::campaigns::{into_campaigns, CampaignRow, CAMPAIGN_COLUMNS};
use super::influencers::{into_influencers, InfluencerRow, INFLUENCER_COLUMNS};
use super::{Database, BEGIN_WRITE};
use crate::model::{Campaign, Influencer};
use crate::ports::repository::AssignOutcome;

const LINK_EXISTS: &str =
    "SELECT COUNT(*) FROM campaign_influencer WHERE campaign_id = ? AND influencer_id = ?";

impl Database {
    pub(super) async fn link_exists(
        &self,
        campaign_id: i64,
        influencer_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(LINK_EXISTS)
            .bind(campaign_id)
            .bind(influencer_id)
            .fetch_one(self.pool())
            .await?;
        Ok(count > 0)
    }

    /// Check-then-insert inside one write-locked transaction.
    ///
    /// A concurrent caller waits for the lock and then sees the committed
    /// row. Dropping the transaction on any error path rolls it back. A
    /// unique violation on the composite key is still reported as already
    /// assigned.
    pub(super) async fn link(
        &self,
        campaign_id: i64,
        influencer_id: i64,
    ) -> Result<AssignOutcome, sqlx::Error> {
        let mut tx = self.pool().begin_with(BEGIN_WRITE).await?;

        let count: i64 = sqlx::query_scalar(LINK_EXISTS)
            .bind(campaign_id)
            .bind(influencer_id)
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            tx.rollback().await?;
            debug!(campaign_id, influencer_id, "link already present");
            return Ok(AssignOutcome::AlreadyAssigned);
        }

        let inserted =
            sqlx::query("INSERT INTO campaign_influencer (campaign_id, influencer_id) VALUES (?, ?)")
                .bind(campaign_id)
                .bind(influencer_id)
                .execute(&mut *tx)
                .await;

        match inserted {
            Ok(_) => {
                tx.commit().await?;
                info!(campaign_id, influencer_id, "influencer assigned");
                Ok(AssignOutcome::Assigned)
            }
            Err(err) if err.as_database_error().is_some_and(|e| e.is_unique_violation()) => {
                tx.rollback().await?;
                debug!(campaign_id, influencer_id, "link inserted concurrently");
                Ok(AssignOutcome::AlreadyAssigned)
            }
            Err(err) => {
                warn!(campaign_id, influencer_id, error = %err, "assignment rolled back");
                if let Err(rollback) = tx.rollback().await {
                    warn!(campaign_id, influencer_id, error = %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }

    pub(super) async fn unlink(
        &self,
        campaign_id: i64,
        influencer_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM campaign_influencer WHERE campaign_id = ? AND influencer_id = ?",
        )
        .bind(campaign_id)
        .bind(influencer_id)
        .execute(self.pool())
        .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            info!(campaign_id, influencer_id, "influencer unassigned");
        }
        Ok(removed)
    }

    pub(super) async fn influencers_for_campaign(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<Influencer>, sqlx::Error> {
        let rows = sqlx::query_as::<_, InfluencerRow>(&format!(
            "SELECT {INFLUENCER_COLUMNS} FROM influencer i \
             JOIN campaign_influencer ci ON ci.influencer_id = i.id \
             WHERE ci.campaign_id = ? ORDER BY i.id"
        ))
        .bind(campaign_id)
        .fetch_all(self.pool())
        .await?;

        into_influencers(rows)
    }

    pub(super) async fn campaigns_for_influencer(
        &self,
        influencer_id: i64,
    ) -> Result<Vec<Campaign>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CampaignRow>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaign c \
             JOIN campaign_influencer ci ON ci.campaign_id = c.id \
             WHERE ci.influencer_id = ? ORDER BY c.start_date, c.id"
        ))
        .bind(influencer_id)
        .fetch_all(self.pool())
        .await?;

        into_campaigns(rows)
    }
}
