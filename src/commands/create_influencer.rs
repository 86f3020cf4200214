//! `campaignctl create-influencer` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::model::NewInfluencer;
use crate::validate::validate_influencer;

/// Execute the `create-influencer` command.
///
/// # Errors
///
/// Returns an error if a field rule fails or the insert fails.
pub async fn run(
    ctx: &ServiceContext,
    name: &str,
    email: &str,
    followers: u32,
    out: &mut dyn Write,
) -> AppResult<()> {
    let draft = NewInfluencer {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        followers_count: followers,
    };
    validate_influencer(&draft)?;

    let influencer = ctx
        .repo
        .insert_influencer(&draft)
        .await
        .map_err(|e| AppError::TransactionFailure(format!("Failed to save influencer: {e}")))?;

    writeln!(
        out,
        "Influencer \"{}\" created successfully with ID: {}",
        influencer.name, influencer.id
    )?;
    Ok(())
}
