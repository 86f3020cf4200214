//! Assignment of an influencer to a campaign.
//!
//! Each (campaign, influencer) pair is either unassigned or assigned.
//! Assigning an assigned pair is a successful no-op, and the only mutation
//! happens inside one store transaction.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::model::{Campaign, Influencer};
use crate::ports::repository::AssignOutcome;
use crate::render::write_table;

/// Question asked before linking unless `force` is set.
pub const CONFIRM_QUESTION: &str = "Do you want to proceed with this assignment?";

/// Parameters of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignRequest {
    /// Campaign id, already validated as positive.
    pub campaign_id: i64,
    /// Influencer id, already validated as positive.
    pub influencer_id: i64,
    /// Skip the confirmation prompt.
    pub force: bool,
}

/// How an assignment ended. Every variant is a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentResult {
    /// The link was written.
    Assigned {
        /// The campaign.
        campaign: Campaign,
        /// The influencer.
        influencer: Influencer,
    },
    /// The pair was linked before; nothing changed.
    AlreadyAssigned {
        /// The campaign.
        campaign: Campaign,
        /// The influencer.
        influencer: Influencer,
    },
    /// The operator declined the confirmation; nothing changed.
    Cancelled,
}

/// Resolves both ids, short-circuits on existing membership, asks for
/// confirmation, then links the pair transactionally.
///
/// The confirmation preview table is written to `writer`.
///
/// # Errors
///
/// - [`AppError::NotFound`] if either id does not resolve.
/// - [`AppError::QueryFailure`] if a lookup fails.
/// - [`AppError::TransactionFailure`] if the linking transaction fails; it
///   has been rolled back.
pub async fn assign_influencer(
    ctx: &ServiceContext,
    request: AssignRequest,
    writer: &mut dyn Write,
) -> AppResult<AssignmentResult> {
    let campaign = ctx
        .repo
        .find_campaign(request.campaign_id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load campaign: {e}")))?
        .ok_or(AppError::NotFound { entity: "Campaign", id: request.campaign_id })?;
    let influencer = ctx
        .repo
        .find_influencer(request.influencer_id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load influencer: {e}")))?
        .ok_or(AppError::NotFound { entity: "Influencer", id: request.influencer_id })?;

    let assigned = ctx
        .repo
        .is_assigned(campaign.id, influencer.id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to check assignment: {e}")))?;
    if assigned {
        return Ok(AssignmentResult::AlreadyAssigned { campaign, influencer });
    }

    if !request.force && !confirm(ctx, &campaign, &influencer, writer)? {
        return Ok(AssignmentResult::Cancelled);
    }

    let outcome = ctx.repo.assign(campaign.id, influencer.id).await.map_err(|e| {
        AppError::TransactionFailure(format!("Failed to assign influencer to campaign: {e}"))
    })?;

    Ok(match outcome {
        AssignOutcome::Assigned => AssignmentResult::Assigned { campaign, influencer },
        AssignOutcome::AlreadyAssigned => {
            AssignmentResult::AlreadyAssigned { campaign, influencer }
        }
    })
}

fn confirm(
    ctx: &ServiceContext,
    campaign: &Campaign,
    influencer: &Influencer,
    writer: &mut dyn Write,
) -> AppResult<bool> {
    write_table(
        writer,
        &["Property", "Value"],
        &[
            vec!["Campaign ID".into(), campaign.id.to_string()],
            vec!["Campaign Name".into(), campaign.name.clone()],
            vec!["Influencer ID".into(), influencer.id.to_string()],
            vec!["Influencer Name".into(), influencer.name.clone()],
        ],
    )?;
    writer.flush()?;

    ctx.prompter
        .confirm(CONFIRM_QUESTION, true)
        .map_err(|e| AppError::Prompt(e.to_string()))
}
