//! `campaignctl unassign-influencer` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::validate::parse_id;

/// Execute the `unassign-influencer` command.
///
/// Removing a link that does not exist is reported and succeeds.
///
/// # Errors
///
/// Returns an error for malformed ids, unknown entities, or a failed delete.
pub async fn run(
    ctx: &ServiceContext,
    campaign_id: &str,
    influencer_id: &str,
    out: &mut dyn Write,
) -> AppResult<()> {
    let campaign_id = parse_id(campaign_id, "Campaign")?;
    let influencer_id = parse_id(influencer_id, "Influencer")?;

    let campaign = ctx
        .repo
        .find_campaign(campaign_id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load campaign: {e}")))?
        .ok_or(AppError::NotFound { entity: "Campaign", id: campaign_id })?;
    let influencer = ctx
        .repo
        .find_influencer(influencer_id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load influencer: {e}")))?
        .ok_or(AppError::NotFound { entity: "Influencer", id: influencer_id })?;

    let removed = ctx.repo.unassign(campaign.id, influencer.id).await.map_err(|e| {
        AppError::TransactionFailure(format!("Failed to remove influencer from campaign: {e}"))
    })?;

    if removed {
        writeln!(
            out,
            "Influencer \"{}\" has been removed from campaign \"{}\".",
            influencer.name, campaign.name
        )?;
    } else {
        writeln!(
            out,
            "Influencer \"{}\" is not assigned to campaign \"{}\".",
            influencer.name, campaign.name
        )?;
    }
    Ok(())
}
