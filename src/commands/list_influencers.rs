//! `campaignctl list-influencers` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::render::write_table;

/// Execute the `list-influencers` command.
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn run(ctx: &ServiceContext, limit: u32, out: &mut dyn Write) -> AppResult<()> {
    let influencers = ctx
        .repo
        .list_influencers(limit)
        .await
        .map_err(|e| AppError::QueryFailure(format!("Error listing influencers: {e}")))?;

    if influencers.is_empty() {
        writeln!(out, "No influencers found.")?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = influencers
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.name.clone(),
                i.email.clone(),
                i.followers_count.to_string(),
            ]
        })
        .collect();
    write_table(out, &["ID", "Name", "Email", "Followers"], &rows)?;
    writeln!(out, "\n{} influencer(s) listed.", influencers.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use crate::model::NewInfluencer;

    #[tokio::test]
    async fn empty_store_prints_notice() {
        let ctx = test_context("").await;
        let mut out: Vec<u8> = Vec::new();
        run(&ctx, 10, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No influencers found.\n");
    }

    #[tokio::test]
    async fn respects_limit() {
        let ctx = test_context("").await;
        for name in ["Ana", "Bo", "Cy"] {
            ctx.repo
                .insert_influencer(&NewInfluencer {
                    name: name.into(),
                    email: format!("{}@example.com", name.to_lowercase()),
                    followers_count: 5,
                })
                .await
                .unwrap();
        }
        let mut out: Vec<u8> = Vec::new();

        run(&ctx, 2, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ana@example.com"));
        assert!(!text.contains("Cy"));
        assert!(text.contains("2 influencer(s) listed."));
    }
}
