//! `campaignctl list-campaigns` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::model::{format_timestamp, CampaignStatus, ListQuery, SortField, SortOrder};
use crate::render::write_table;

/// Execute the `list-campaigns` command.
///
/// Displays id, name, description, start, end, and influencer count for
/// each campaign, or a notice when nothing matches.
///
/// # Errors
///
/// Returns [`AppError::QueryFailure`] if the listing query fails.
pub async fn run(
    ctx: &ServiceContext,
    sort: SortField,
    order: SortOrder,
    limit: u32,
    status: Option<CampaignStatus>,
    json: bool,
    out: &mut dyn Write,
) -> AppResult<()> {
    let query = ListQuery { sort, order, limit, status, now: ctx.clock.now() };
    let summaries = ctx
        .repo
        .list_campaigns(&query)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Error listing campaigns: {e}")))?;

    if json {
        let body = serde_json::to_string_pretty(&summaries)
            .map_err(|e| AppError::QueryFailure(format!("Error listing campaigns: {e}")))?;
        writeln!(out, "{body}")?;
        return Ok(());
    }

    if summaries.is_empty() {
        writeln!(out, "No campaigns found.")?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.campaign.id.to_string(),
                s.campaign.name.clone(),
                s.campaign.description.clone().unwrap_or_else(|| "N/A".into()),
                format_timestamp(&s.campaign.start_date),
                format_timestamp(&s.campaign.end_date),
                s.influencer_count.to_string(),
            ]
        })
        .collect();

    write_table(
        out,
        &["ID", "Name", "Description", "Start Date", "End Date", "Influencers"],
        &rows,
    )?;
    writeln!(out, "\n{} campaign(s) listed.", rows.len())?;
    Ok(())
}
