//! Command dispatch and handlers.

pub mod assign_influencer;
pub mod create_campaign;
pub mod create_influencer;
pub mod delete_campaign;
pub mod list_campaigns;
pub mod list_influencers;
pub mod show_campaign;
pub mod show_influencer;
pub mod unassign_influencer;

use std::io::{self, Write};

use crate::cli::Command;
use crate::config::AppConfig;
use crate::context::ServiceContext;
use crate::error::AppResult;
use crate::workflow::CampaignInput;

/// Dispatch a parsed command to its handler against the live context.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the handler fails.
pub async fn dispatch(command: &Command, config: &AppConfig) -> AppResult<()> {
    let ctx = ServiceContext::live(config).await?;
    let mut out = io::stdout();
    dispatch_with_context(command, &ctx, &mut out).await?;
    out.flush()?;
    Ok(())
}

/// Dispatch a command with the given service context, writing output to `out`.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub async fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> AppResult<()> {
    match command {
        Command::CreateCampaign { name, description, start, end } => {
            let input = CampaignInput {
                name: name.clone(),
                description: description.clone(),
                start: start.clone(),
                end: end.clone(),
            };
            create_campaign::run(ctx, input, out).await
        }
        Command::ListCampaigns { sort, order, limit, status, json } => {
            list_campaigns::run(ctx, *sort, *order, *limit, *status, *json, out).await
        }
        Command::ShowCampaign { id } => show_campaign::run(ctx, id, out).await,
        Command::DeleteCampaign { id, force } => delete_campaign::run(ctx, id, *force, out).await,
        Command::AssignInfluencer { campaign_id, influencer_id, force } => {
            assign_influencer::run(ctx, campaign_id, influencer_id, *force, out).await
        }
        Command::UnassignInfluencer { campaign_id, influencer_id } => {
            unassign_influencer::run(ctx, campaign_id, influencer_id, out).await
        }
        Command::CreateInfluencer { name, email, followers } => {
            create_influencer::run(ctx, name, email, *followers, out).await
        }
        Command::ListInfluencers { limit } => list_influencers::run(ctx, *limit, out).await,
        Command::ShowInfluencer { id } => show_influencer::run(ctx, id, out).await,
    }
}
