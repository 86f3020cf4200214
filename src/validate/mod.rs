//! Field validation and the date-overlap business rule.
//!
//! Field checks are pure and collect every violation before reporting.
//! The overlap rule needs the repository and runs only after the fields
//! pass, so nothing is written when any rule fails.

use chrono::NaiveDateTime;

use crate::error::{AppError, AppResult};
use crate::model::{NewCampaign, NewInfluencer};
use crate::ports::repository::CampaignRepository;

/// Shortest accepted campaign name, in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Longest accepted campaign name, in characters.
pub const NAME_MAX_CHARS: usize = 255;

/// Message reported when a new campaign overlaps an existing one.
pub const OVERLAP_MESSAGE: &str = "There is already a campaign overlapping with those dates.";

fn name_violation(name: &str) -> Option<String> {
    let len = name.chars().count();
    if name.trim().is_empty() {
        Some("The name cannot be blank.".to_string())
    } else if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        Some(format!(
            "The name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters long."
        ))
    } else {
        None
    }
}

fn date_order_violation(start: NaiveDateTime, end: NaiveDateTime) -> Option<String> {
    (end <= start).then(|| "End date must be after start date".to_string())
}

fn fail(entity: &'static str, violations: Vec<String>) -> AppResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation { entity, violations })
    }
}

/// Runs every field rule on a draft campaign and reports all failures together.
///
/// Names must be non-blank and 3 to 255 characters long; the end must be
/// strictly after the start.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing each violated rule.
pub fn validate_campaign(campaign: &NewCampaign) -> AppResult<()> {
    let violations = [
        name_violation(&campaign.name),
        date_order_violation(campaign.start_date, campaign.end_date),
    ]
    .into_iter()
    .flatten()
    .collect();
    fail("Campaign", violations)
}

/// Runs every field rule on a draft influencer.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing each violated rule.
pub fn validate_influencer(influencer: &NewInfluencer) -> AppResult<()> {
    let mut violations = Vec::new();
    if influencer.name.trim().is_empty() {
        violations.push("The influencer name cannot be blank.".to_string());
    }
    let email_ok = influencer
        .email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.contains('@'));
    if !email_ok {
        violations.push(format!("The email \"{}\" is not a valid email address.", influencer.email));
    }
    fail("Influencer", violations)
}

/// Fails when any stored campaign intersects `[start, end]` (inclusive).
///
/// # Errors
///
/// Returns [`AppError::Conflict`] on overlap, or [`AppError::QueryFailure`]
/// if the lookup itself fails.
pub async fn check_overlap(
    repo: &dyn CampaignRepository,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<()> {
    let overlapping = repo
        .find_overlapping(start, end)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to check campaign dates: {e}")))?;

    if overlapping.is_empty() {
        Ok(())
    } else {
        Err(AppError::Conflict(OVERLAP_MESSAGE.to_string()))
    }
}

/// Parses a user-supplied id, accepting only positive integers.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] naming `entity` and the raw input.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidArgument(format!(
            "{entity} ID must be a positive integer. Got: {raw}"
        ))),
    }
}
