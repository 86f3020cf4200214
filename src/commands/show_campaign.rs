//! `campaignctl show-campaign` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::model::{format_timestamp, CampaignStatus};
use crate::render::write_table;
use crate::validate::parse_id;

/// Execute the `show-campaign` command.
///
/// # Errors
///
/// Returns an error for a malformed or unknown id, or a failed query.
pub async fn run(ctx: &ServiceContext, id: &str, out: &mut dyn Write) -> AppResult<()> {
    let id = parse_id(id, "Campaign")?;
    let campaign = ctx
        .repo
        .find_campaign(id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load campaign: {e}")))?
        .ok_or(AppError::NotFound { entity: "Campaign", id })?;
    let influencers = ctx
        .repo
        .influencers_of(campaign.id)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Failed to load influencers: {e}")))?;

    let status = CampaignStatus::of(&campaign, ctx.clock.now());
    write_table(
        out,
        &["Field", "Value"],
        &[
            vec!["ID".into(), campaign.id.to_string()],
            vec!["Name".into(), campaign.name.clone()],
            vec!["Description".into(), campaign.description.clone().unwrap_or_else(|| "N/A".into())],
            vec!["Start Date".into(), format_timestamp(&campaign.start_date)],
            vec!["End Date".into(), format_timestamp(&campaign.end_date)],
            vec!["Status".into(), status.to_string()],
        ],
    )?;

    writeln!(out)?;
    if influencers.is_empty() {
        writeln!(out, "No influencers assigned.")?;
    } else {
        let rows: Vec<Vec<String>> = influencers
            .iter()
            .map(|i| vec![i.id.to_string(), i.name.clone(), i.email.clone()])
            .collect();
        write_table(out, &["ID", "Influencer", "Email"], &rows)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use crate::model::{parse_timestamp, NewCampaign, NewInfluencer};

    #[tokio::test]
    async fn lists_assigned_influencers_and_status() {
        let ctx = test_context("").await;
        ctx.repo
            .insert_campaign(&NewCampaign {
                name: "Summer Promo".into(),
                description: Some("Beach".into()),
                start_date: parse_timestamp("2021-06-01 00:00:00").unwrap(),
                end_date: parse_timestamp("2021-07-10 00:00:00").unwrap(),
            })
            .await
            .unwrap();
        ctx.repo
            .insert_influencer(&NewInfluencer {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                followers_count: 10,
            })
            .await
            .unwrap();
        ctx.repo.assign(1, 1).await.unwrap();
        let mut out: Vec<u8> = Vec::new();

        run(&ctx, "1", &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Beach"));
        assert!(text.contains("active"));
        assert!(text.contains("ana@example.com"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let ctx = test_context("").await;
        let mut out: Vec<u8> = Vec::new();
        let err = run(&ctx, "9", &mut out).await.unwrap_err();
        assert_eq!(err.to_string(), "Campaign with ID 9 not found.");
    }
}
