//! `campaignctl create-campaign` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::AppResult;
use crate::model::format_timestamp;
use crate::render::write_table;
use crate::workflow::{create_campaign, CampaignInput};

/// Execute the `create-campaign` command.
///
/// Prints the assigned id and echoes every stored field.
///
/// # Errors
///
/// Returns an error if input is malformed, a rule fails, or the insert fails.
pub async fn run(ctx: &ServiceContext, input: CampaignInput, out: &mut dyn Write) -> AppResult<()> {
    let campaign = create_campaign(ctx, input).await?;

    writeln!(
        out,
        "Campaign \"{}\" created successfully with ID: {}\n",
        campaign.name, campaign.id
    )?;
    write_table(
        out,
        &["Field", "Value"],
        &[
            vec!["ID".into(), campaign.id.to_string()],
            vec!["Name".into(), campaign.name.clone()],
            vec!["Description".into(), campaign.description.clone().unwrap_or_else(|| "N/A".into())],
            vec!["Start Date".into(), format_timestamp(&campaign.start_date)],
            vec!["End Date".into(), format_timestamp(&campaign.end_date)],
        ],
    )?;
    Ok(())
}
