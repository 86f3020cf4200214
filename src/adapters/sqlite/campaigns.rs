//! Campaign database operations

use chrono::NaiveDateTime;
use sqlx::{FromRow, QueryBuilder, Sqlite};
use tracing::{debug, info};

use super::{Database, BEGIN_WRITE};
use crate::model::{
    format_timestamp, parse_timestamp, Campaign, CampaignStatus, CampaignSummary, ListQuery,
    NewCampaign,
};
use crate::ports::repository::CreateOutcome;

/// Inclusive intersection with the range bound as `(end, start)`.
const OVERLAP_FILTER: &str = "c.start_date <= ? AND c.end_date >= ?";

/// Column list selected for every campaign read.
pub(super) const CAMPAIGN_COLUMNS: &str = "c.id, c.name, c.description, c.start_date, c.end_date";

/// Campaign row as stored; timestamps are `YYYY-MM-DD HH:MM:SS` text.
#[derive(Debug, FromRow)]
pub(super) struct CampaignRow {
    id: i64,
    name: String,
    description: Option<String>,
    start_date: String,
    end_date: String,
}

impl TryFrom<CampaignRow> for Campaign {
    type Error = sqlx::Error;

    fn try_from(row: CampaignRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            start_date: decode_timestamp(&row.start_date)?,
            end_date: decode_timestamp(&row.end_date)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct CampaignSummaryRow {
    #[sqlx(flatten)]
    campaign: CampaignRow,
    influencer_count: i64,
}

pub(super) fn decode_timestamp(raw: &str) -> Result<NaiveDateTime, sqlx::Error> {
    parse_timestamp(raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

pub(super) fn into_campaigns(rows: Vec<CampaignRow>) -> Result<Vec<Campaign>, sqlx::Error> {
    rows.into_iter().map(Campaign::try_from).collect()
}

impl Database {
    pub(super) async fn get_campaign(&self, id: i64) -> Result<Option<Campaign>, sqlx::Error> {
        let row = sqlx::query_as::<_, CampaignRow>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaign c WHERE c.id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(Campaign::try_from).transpose()
    }

    /// Overlap re-check and insert under the write lock.
    ///
    /// Any error before the commit drops the transaction, which rolls it back.
    pub(super) async fn create_campaign(
        &self,
        campaign: &NewCampaign,
    ) -> Result<CreateOutcome, sqlx::Error> {
        let start = format_timestamp(&campaign.start_date);
        let end = format_timestamp(&campaign.end_date);
        let mut tx = self.pool().begin_with(BEGIN_WRITE).await?;

        let clashes: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM campaign c WHERE {OVERLAP_FILTER}"
        ))
        .bind(&end)
        .bind(&start)
        .fetch_one(&mut *tx)
        .await?;
        if clashes > 0 {
            tx.rollback().await?;
            debug!(name = %campaign.name, clashes, "campaign range taken");
            return Ok(CreateOutcome::Overlapping);
        }

        let result = sqlx::query(
            "INSERT INTO campaign (name, description, start_date, end_date) VALUES (?, ?, ?, ?)",
        )
        .bind(&campaign.name)
        .bind(&campaign.description)
        .bind(&start)
        .bind(&end)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        let id = result.last_insert_rowid();
        info!(campaign_id = id, name = %campaign.name, "campaign persisted");

        Ok(CreateOutcome::Created(Campaign {
            id,
            name: campaign.name.clone(),
            description: campaign.description.clone(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
        }))
    }

    pub(super) async fn remove_campaign(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaign WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(campaign_id = id, "campaign deleted");
        }
        Ok(deleted)
    }

    pub(super) async fn overlapping_campaigns(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Campaign>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CampaignRow>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaign c \
             WHERE {OVERLAP_FILTER} ORDER BY c.start_date, c.id"
        ))
        .bind(format_timestamp(&end))
        .bind(format_timestamp(&start))
        .fetch_all(self.pool())
        .await?;

        debug!(overlapping = rows.len(), "overlap check");
        into_campaigns(rows)
    }

    pub(super) async fn list_campaign_summaries(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<CampaignSummary>, sqlx::Error> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {CAMPAIGN_COLUMNS}, COUNT(ci.influencer_id) AS influencer_count \
             FROM campaign c LEFT JOIN campaign_influencer ci ON ci.campaign_id = c.id"
        ));

        let now = format_timestamp(&query.now);
        match query.status {
            Some(CampaignStatus::Active) => {
                qb.push(" WHERE c.start_date <= ")
                    .push_bind(now.clone())
                    .push(" AND c.end_date >= ")
                    .push_bind(now);
            }
            Some(CampaignStatus::Past) => {
                qb.push(" WHERE c.end_date < ").push_bind(now);
            }
            Some(CampaignStatus::Upcoming) => {
                qb.push(" WHERE c.start_date > ").push_bind(now);
            }
            None => {}
        }

        qb.push(" GROUP BY c.id ORDER BY c.")
            .push(query.sort.column())
            .push(" ")
            .push(query.order.keyword())
            .push(", c.id ASC LIMIT ")
            .push_bind(i64::from(query.limit));

        debug!(sql = qb.sql(), "listing campaigns");
        let rows = qb.build_query_as::<CampaignSummaryRow>().fetch_all(self.pool()).await?;

        rows.into_iter()
            .map(|row| {
                Ok(CampaignSummary {
                    campaign: Campaign::try_from(row.campaign)?,
                    influencer_count: row.influencer_count,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{file_database, memory_database};
    use super::*;
    use crate::model::{SortField, SortOrder};

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn new_campaign(name: &str, start: &str, end: &str) -> NewCampaign {
        NewCampaign {
            name: name.to_string(),
            description: None,
            start_date: ts(start),
            end_date: ts(end),
        }
    }

    fn query(sort: SortField, order: SortOrder, limit: u32) -> ListQuery {
        ListQuery { sort, order, limit, status: None, now: ts("2021-07-01 00:00:00") }
    }

    async fn seeded() -> Database {
        let db = memory_database().await;
        for (name, start, end) in [
            ("Summer Promo", "2021-06-01 00:00:00", "2021-06-10 00:00:00"),
            ("Autumn Launch", "2021-09-01 00:00:00", "2021-09-30 00:00:00"),
            ("July Flash", "2021-06-25 00:00:00", "2021-07-05 00:00:00"),
        ] {
            db.create_campaign(&new_campaign(name, start, end)).await.unwrap();
        }
        db
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let db = memory_database().await;
        let mut campaign = new_campaign("Summer Promo", "2021-06-01 00:00:00", "2021-06-10 00:00:00");
        campaign.description = Some("Beach gear".into());

        let CreateOutcome::Created(created) = db.create_campaign(&campaign).await.unwrap() else {
            panic!("fresh store should accept the campaign");
        };
        assert_eq!(created.id, 1);

        let loaded = db.get_campaign(1).await.unwrap().unwrap();
        assert_eq!(loaded, created);
        assert!(loaded.end_date > loaded.start_date);
    }

    #[tokio::test]
    async fn get_missing_campaign_is_none() {
        let db = memory_database().await;
        assert!(db.get_campaign(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn overlap_is_inclusive_at_both_ends() {
        let db = seeded().await;

        let touching_end =
            db.overlapping_campaigns(ts("2021-06-10 00:00:00"), ts("2021-06-12 00:00:00")).await.unwrap();
        assert_eq!(touching_end.len(), 1);
        assert_eq!(touching_end[0].name, "Summer Promo");

        let touching_start =
            db.overlapping_campaigns(ts("2021-05-20 00:00:00"), ts("2021-06-01 00:00:00")).await.unwrap();
        assert_eq!(touching_start.len(), 1);

        let clear =
            db.overlapping_campaigns(ts("2021-06-11 00:00:00"), ts("2021-06-24 23:59:59")).await.unwrap();
        assert!(clear.is_empty());
    }

    #[tokio::test]
    async fn create_refuses_overlapping_range() {
        let db = seeded().await;

        let outcome = db
            .create_campaign(&new_campaign("Clash", "2021-06-10 00:00:00", "2021-06-12 00:00:00"))
            .await
            .unwrap();

        assert_eq!(outcome, CreateOutcome::Overlapping);
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM campaign").fetch_one(db.pool()).await.unwrap();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn concurrent_overlapping_creates_keep_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaigns.db");
        let first = file_database(&path).await;
        let second = file_database(&path).await;

        let a = new_campaign("Summer Promo", "2021-06-01 00:00:00", "2021-06-10 00:00:00");
        let b = new_campaign("Clash Promo", "2021-06-05 00:00:00", "2021-06-15 00:00:00");
        let (a, b) = tokio::join!(first.create_campaign(&a), second.create_campaign(&b));
        let outcomes = [a.unwrap(), b.unwrap()];

        let created = outcomes.iter().filter(|o| matches!(o, CreateOutcome::Created(_))).count();
        assert_eq!(created, 1);
        assert!(outcomes.contains(&CreateOutcome::Overlapping));
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM campaign").fetch_one(first.pool()).await.unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn overlap_finds_enclosing_and_enclosed_ranges() {
        let db = seeded().await;
        let hits =
            db.overlapping_campaigns(ts("2021-01-01 00:00:00"), ts("2021-12-31 00:00:00")).await.unwrap();
        assert_eq!(hits.len(), 3);

        let inside =
            db.overlapping_campaigns(ts("2021-09-10 00:00:00"), ts("2021-09-11 00:00:00")).await.unwrap();
        assert_eq!(inside[0].name, "Autumn Launch");
    }

    #[tokio::test]
    async fn list_sorts_by_name_ascending() {
        let db = seeded().await;
        let rows = db
            .list_campaign_summaries(&query(SortField::Name, SortOrder::Asc, 10))
            .await
            .unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.campaign.name.as_str()).collect();
        assert_eq!(names, vec!["Autumn Launch", "July Flash", "Summer Promo"]);
    }

    #[tokio::test]
    async fn list_respects_limit_and_descending_order() {
        let db = seeded().await;
        let rows = db
            .list_campaign_summaries(&query(SortField::StartDate, SortOrder::Desc, 2))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].campaign.name, "Autumn Launch");
        assert_eq!(rows[1].campaign.name, "July Flash");
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let db = seeded().await;
        let mut q = query(SortField::Id, SortOrder::Asc, 10);

        q.status = Some(CampaignStatus::Active);
        let active = db.list_campaign_summaries(&q).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].campaign.name, "July Flash");

        q.status = Some(CampaignStatus::Past);
        let past = db.list_campaign_summaries(&q).await.unwrap();
        assert_eq!(past[0].campaign.name, "Summer Promo");

        q.status = Some(CampaignStatus::Upcoming);
        let upcoming = db.list_campaign_summaries(&q).await.unwrap();
        assert_eq!(upcoming[0].campaign.name, "Autumn Launch");
    }

    #[tokio::test]
    async fn list_counts_zero_influencers() {
        let db = seeded().await;
        let rows =
            db.list_campaign_summaries(&query(SortField::Id, SortOrder::Asc, 10)).await.unwrap();
        assert!(rows.iter().all(|r| r.influencer_count == 0));
    }

    #[tokio::test]
    async fn remove_reports_whether_row_existed() {
        let db = seeded().await;
        assert!(db.remove_campaign(1).await.unwrap());
        assert!(!db.remove_campaign(1).await.unwrap());
        assert!(db.get_campaign(1).await.unwrap().is_none());
    }
}
