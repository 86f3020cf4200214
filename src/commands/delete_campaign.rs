//! `campaignctl delete-campaign` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::validate::parse_id;

/// Execute the `delete-campaign` command.
///
/// Asks for confirmation unless `force` is set; assignments cascade.
///
/// # Errors
///
/// Returns an error for a malformed or unknown id, or a failed delete.
pub async fn run(ctx: &ServiceContext, id: &str, force: bool, out: &mut dyn Write) -> AppResult<()> {
    let id = parse_id(id, "Campaign")?;
    let campaign = ctx
        .repo
        .find_campaign(id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load campaign: {e}")))?
        .ok_or(AppError::NotFound { entity: "Campaign", id })?;

    if !force {
        let question = format!("Delete campaign \"{}\" and all its assignments?", campaign.name);
        let confirmed = ctx
            .prompter
            .confirm(&question, false)
            .map_err(|e| AppError::Prompt(e.to_string()))?;
        if !confirmed {
            writeln!(out, "Deletion cancelled.")?;
            return Ok(());
        }
    }

    ctx.repo
        .delete_campaign(campaign.id)
        .await
        .map_err(|e| AppError::TransactionFailure(format!("Failed to delete campaign: {e}")))?;

    writeln!(out, "Campaign \"{}\" deleted.", campaign.name)?;
    Ok(())
}
