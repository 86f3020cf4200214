//! Campaign repository port backed by the relational store.

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDateTime;

use crate::error::PortError;
use crate::model::{
    Campaign, CampaignSummary, Influencer, ListQuery, NewCampaign, NewInfluencer,
};

/// Boxed future type alias used by [`CampaignRepository`] to keep the trait dyn-compatible.
pub type RepoFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, PortError>> + Send + 'a>>;

/// Result of linking an influencer to a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// A new link row was written.
    Assigned,
    /// The pair was already linked; nothing changed.
    AlreadyAssigned,
}

/// Result of persisting a new campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The campaign was written and received an id.
    Created(Campaign),
    /// Another campaign claimed an overlapping range first; nothing was written.
    Overlapping,
}

/// Query and mutation interface over campaigns, influencers, and their links.
///
/// The join table is the single source of truth for the relation; both
/// directions are derived queries ([`influencers_of`](Self::influencers_of)
/// and [`campaigns_of`](Self::campaigns_of)).
pub trait CampaignRepository: Send + Sync {
    /// Looks up a campaign by id.
    fn find_campaign(&self, id: i64) -> RepoFuture<'_, Option<Campaign>>;

    /// Looks up an influencer by id.
    fn find_influencer(&self, id: i64) -> RepoFuture<'_, Option<Influencer>>;

    /// Lists campaigns with their influencer counts, ordered and limited per `query`.
    fn list_campaigns(&self, query: &ListQuery) -> RepoFuture<'_, Vec<CampaignSummary>>;

    /// Campaigns whose inclusive range intersects `[start, end]`.
    ///
    /// A campaign overlaps when `existing.start <= end AND existing.end >= start`,
    /// so ranges touching at an endpoint count.
    fn find_overlapping(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> RepoFuture<'_, Vec<Campaign>>;

    /// Persists a validated campaign unless its range overlaps a stored one.
    ///
    /// The overlap re-check and the insert share one write-locked
    /// transaction, so concurrent writers cannot both claim a range.
    fn insert_campaign(&self, campaign: &NewCampaign) -> RepoFuture<'_, CreateOutcome>;

    /// Deletes a campaign; its link rows cascade. Returns whether a row existed.
    fn delete_campaign(&self, id: i64) -> RepoFuture<'_, bool>;

    /// Persists a validated influencer and returns it with its assigned id.
    fn insert_influencer(&self, influencer: &NewInfluencer) -> RepoFuture<'_, Influencer>;

    /// Lists influencers ordered by id, at most `limit` rows.
    fn list_influencers(&self, limit: u32) -> RepoFuture<'_, Vec<Influencer>>;

    /// Whether the pair is currently linked.
    fn is_assigned(&self, campaign_id: i64, influencer_id: i64) -> RepoFuture<'_, bool>;

    /// Links the pair inside a single transaction.
    ///
    /// The membership check and the insert share a write-locked
    /// transaction; any failure rolls the whole transaction back.
    fn assign(&self, campaign_id: i64, influencer_id: i64) -> RepoFuture<'_, AssignOutcome>;

    /// Removes the link. Returns whether a link existed.
    fn unassign(&self, campaign_id: i64, influencer_id: i64) -> RepoFuture<'_, bool>;

    /// Influencers linked to a campaign, ordered by id.
    fn influencers_of(&self, campaign_id: i64) -> RepoFuture<'_, Vec<Influencer>>;

    /// Campaigns an influencer is linked to, ordered by start date.
    fn campaigns_of(&self, influencer_id: i64) -> RepoFuture<'_, Vec<Campaign>>;
}
