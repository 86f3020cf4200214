//! Repository whose writes and listings fail, for exercising error paths.

use chrono::NaiveDateTime;

use crate::adapters::sqlite::Database;
use crate::error::PortError;
use crate::model::{
    Campaign, CampaignSummary, Influencer, ListQuery, NewCampaign, NewInfluencer,
};
use crate::ports::repository::{AssignOutcome, CampaignRepository, CreateOutcome, RepoFuture};

/// Delegates point lookups to a real store and fails every write and listing
/// with a disk error, leaving the store untouched.
pub(crate) struct FailingRepository {
    inner: Database,
}

impl FailingRepository {
    pub(crate) fn new(inner: Database) -> Self {
        Self { inner }
    }
}

fn disk_error<'a, T: Send + 'a>(operation: &str) -> RepoFuture<'a, T> {
    let err: PortError = format!("disk I/O error during {operation}").into();
    Box::pin(std::future::ready(Err(err)))
}

impl CampaignRepository for FailingRepository {
    fn find_campaign(&self, id: i64) -> RepoFuture<'_, Option<Campaign>> {
        self.inner.find_campaign(id)
    }

    fn find_influencer(&self, id: i64) -> RepoFuture<'_, Option<Influencer>> {
        self.inner.find_influencer(id)
    }

    fn list_campaigns(&self, _query: &ListQuery) -> RepoFuture<'_, Vec<CampaignSummary>> {
        disk_error("list_campaigns")
    }

    fn find_overlapping(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> RepoFuture<'_, Vec<Campaign>> {
        self.inner.find_overlapping(start, end)
    }

    fn insert_campaign(&self, _campaign: &NewCampaign) -> RepoFuture<'_, CreateOutcome> {
        disk_error("insert_campaign")
    }

    fn delete_campaign(&self, _id: i64) -> RepoFuture<'_, bool> {
        disk_error("delete_campaign")
    }

    fn insert_influencer(&self, _influencer: &NewInfluencer) -> RepoFuture<'_, Influencer> {
        disk_error("insert_influencer")
    }

    fn list_influencers(&self, _limit: u32) -> RepoFuture<'_, Vec<Influencer>> {
        disk_error("list_influencers")
    }

    fn is_assigned(&self, campaign_id: i64, influencer_id: i64) -> RepoFuture<'_, bool> {
        self.inner.is_assigned(campaign_id, influencer_id)
    }

    fn assign(&self, _campaign_id: i64, _influencer_id: i64) -> RepoFuture<'_, AssignOutcome> {
        disk_error("assign")
    }

    fn unassign(&self, _campaign_id: i64, _influencer_id: i64) -> RepoFuture<'_, bool> {
        disk_error("unassign")
    }

    fn influencers_of(&self, campaign_id: i64) -> RepoFuture<'_, Vec<Influencer>> {
        self.inner.influencers_of(campaign_id)
    }

    fn campaigns_of(&self, influencer_id: i64) -> RepoFuture<'_, Vec<Campaign>> {
        self.inner.campaigns_of(influencer_id)
    }
}
