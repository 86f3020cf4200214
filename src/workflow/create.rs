//! Campaign creation: gather fields, validate, check overlap, persist.

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::model::{parse_timestamp, Campaign, NewCampaign};
use crate::ports::repository::CreateOutcome;
use crate::validate::{check_overlap, validate_campaign, OVERLAP_MESSAGE};

/// Field values supplied on the command line; missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct CampaignInput {
    /// Campaign name.
    pub name: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Start timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub start: Option<String>,
    /// End timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub end: Option<String>,
}

/// Creates a campaign after every rule has passed.
///
/// # Errors
///
/// - [`AppError::InvalidArgument`] for a missing or malformed timestamp.
/// - [`AppError::Validation`] listing every violated field rule.
/// - [`AppError::Conflict`] when the range overlaps a stored campaign,
///   including one written concurrently after the first check.
/// - [`AppError::TransactionFailure`] when the insert fails.
pub async fn create_campaign(ctx: &ServiceContext, input: CampaignInput) -> AppResult<Campaign> {
    let draft = collect(ctx, input)?;

    validate_campaign(&draft)?;
    check_overlap(ctx.repo.as_ref(), draft.start_date, draft.end_date).await?;

    let outcome = ctx
        .repo
        .insert_campaign(&draft)
        .await
        .map_err(|e| AppError::TransactionFailure(format!("Failed to save campaign: {e}")))?;

    match outcome {
        CreateOutcome::Created(campaign) => Ok(campaign),
        CreateOutcome::Overlapping => Err(AppError::Conflict(OVERLAP_MESSAGE.to_string())),
    }
}

fn collect(ctx: &ServiceContext, input: CampaignInput) -> AppResult<NewCampaign> {
    let name = match input.name {
        Some(name) => name,
        None => ask(ctx, "Campaign Name")?.unwrap_or_default(),
    };
    let description = match input.description {
        Some(description) => Some(description),
        None => ask(ctx, "Campaign Description (optional)")?,
    }
    .filter(|d| !d.trim().is_empty());

    let start_date = date_field(ctx, input.start, "Start date")?;
    let end_date = date_field(ctx, input.end, "End date")?;

    Ok(NewCampaign { name, description, start_date, end_date })
}

fn ask(ctx: &ServiceContext, question: &str) -> AppResult<Option<String>> {
    ctx.prompter.ask(question).map_err(|e| AppError::Prompt(e.to_string()))
}

fn date_field(
    ctx: &ServiceContext,
    given: Option<String>,
    label: &str,
) -> AppResult<chrono::NaiveDateTime> {
    let raw = match given {
        Some(raw) => Some(raw),
        None => ask(ctx, &format!("{label} (YYYY-MM-DD HH:MM:SS)"))?,
    };
    let raw = raw
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::InvalidArgument(format!("{label} cannot be empty.")))?;

    parse_timestamp(&raw).map_err(|_| {
        AppError::InvalidArgument(format!(
            "Invalid date format for {label}. Use 'YYYY-MM-DD HH:MM:SS'"
        ))
    })
}
