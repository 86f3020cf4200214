//! `campaignctl assign-influencer` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::AppResult;
use crate::validate::parse_id;
use crate::workflow::{assign_influencer, AssignRequest, AssignmentResult};

/// Execute the `assign-influencer` command.
///
/// Succeeds when the link is written, when it already existed, and when
/// the operator declines the confirmation.
///
/// # Errors
///
/// Returns an error for malformed ids, unknown entities, or a failed
/// linking transaction.
pub async fn run(
    ctx: &ServiceContext,
    campaign_id: &str,
    influencer_id: &str,
    force: bool,
    out: &mut dyn Write,
) -> AppResult<()> {
    let request = AssignRequest {
        campaign_id: parse_id(campaign_id, "Campaign")?,
        influencer_id: parse_id(influencer_id, "Influencer")?,
        force,
    };

    match assign_influencer(ctx, request, out).await? {
        AssignmentResult::Assigned { campaign, influencer } => writeln!(
            out,
            "Influencer \"{}\" has been successfully assigned to campaign \"{}\".",
            influencer.name, campaign.name
        )?,
        AssignmentResult::AlreadyAssigned { campaign, influencer } => writeln!(
            out,
            "Influencer \"{}\" is already assigned to campaign \"{}\".",
            influencer.name, campaign.name
        )?,
        AssignmentResult::Cancelled => writeln!(out, "Assignment cancelled.")?,
    }
    Ok(())
}
