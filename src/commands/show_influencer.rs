//! `campaignctl show-influencer` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::model::format_timestamp;
use crate::render::write_table;
use crate::validate::parse_id;

/// Execute the `show-influencer` command.
///
/// # Errors
///
/// Returns an error for a malformed or unknown id, or a failed query.
pub async fn run(ctx: &ServiceContext, id: &str, out: &mut dyn Write) -> AppResult<()> {
    let id = parse_id(id, "Influencer")?;
    let influencer = ctx
        .repo
        .find_influencer(id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load influencer: {e}")))?
        .ok_or(AppError::NotFound { entity: "Influencer", id })?;
    let campaigns = ctx
        .repo
        .campaigns_of(influencer.id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load campaigns: {e}")))?;

    write_table(
        out,
        &["Field", "Value"],
        &[
            vec!["ID".into(), influencer.id.to_string()],
            vec!["Name".into(), influencer.name.clone()],
            vec!["Email".into(), influencer.email.clone()],
            vec!["Followers".into(), influencer.followers_count.to_string()],
        ],
    )?;

    writeln!(out)?;
    if campaigns.is_empty() {
        writeln!(out, "Not assigned to any campaign.")?;
    } else {
        let rows: Vec<Vec<String>> = campaigns
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.name.clone(),
                    format_timestamp(&c.start_date),
                    format_timestamp(&c.end_date),
                ]
            })
            .collect();
        write_table(out, &["ID", "Campaign", "Start Date", "End Date"], &rows)?;
    }
    Ok(())
}
