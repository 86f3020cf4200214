//! Plain data records for campaigns, influencers, and listing queries.
//!
//! The campaign–influencer relation is not held in memory on either side.
//! It lives only in the store's join table and is read through the
//! repository in either direction.

use std::fmt;

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Serialize, Serializer};

/// Timestamp format accepted on input and used for storage and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// # Errors
///
/// Returns the underlying chrono parse error when the input does not match.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_FORMAT)
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(DATE_FORMAT).to_string()
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_timestamp(ts))
}

/// A persisted campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Campaign {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name, 3 to 255 characters.
    pub name: String,
    /// Optional free text.
    pub description: Option<String>,
    /// First moment of the campaign.
    #[serde(serialize_with = "serialize_timestamp")]
    pub start_date: NaiveDateTime,
    /// Last moment of the campaign; always after `start_date`.
    #[serde(serialize_with = "serialize_timestamp")]
    pub end_date: NaiveDateTime,
}

/// A campaign that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaign {
    /// Display name.
    pub name: String,
    /// Optional free text.
    pub description: Option<String>,
    /// First moment of the campaign.
    pub start_date: NaiveDateTime,
    /// Last moment of the campaign.
    pub end_date: NaiveDateTime,
}

/// A persisted influencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Influencer {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Audience size, never negative.
    pub followers_count: u32,
}

/// An influencer that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInfluencer {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Audience size.
    pub followers_count: u32,
}

/// A listing row: a campaign with the number of influencers assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    /// The campaign itself.
    #[serde(flatten)]
    pub campaign: Campaign,
    /// How many influencers are linked to the campaign.
    pub influencer_count: i64,
}

/// Where a campaign sits relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CampaignStatus {
    /// Started and not yet ended.
    Active,
    /// Already ended.
    Past,
    /// Not yet started.
    Upcoming,
}

impl CampaignStatus {
    /// Classifies a campaign against `now` using inclusive bounds.
    #[must_use]
    pub fn of(campaign: &Campaign, now: NaiveDateTime) -> Self {
        if campaign.end_date < now {
            Self::Past
        } else if campaign.start_date > now {
            Self::Upcoming
        } else {
            Self::Active
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Past => "past",
            Self::Upcoming => "upcoming",
        })
    }
}

/// Column a campaign listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    /// Store-assigned id.
    #[default]
    Id,
    /// Campaign name, byte-wise lexicographic.
    Name,
    /// Start timestamp.
    #[value(aliases = ["start_date", "startDate"])]
    StartDate,
    /// End timestamp.
    #[value(aliases = ["end_date", "endDate"])]
    EndDate,
}

impl SortField {
    /// The `campaign` table column backing this field.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
        }
    }
}

/// Direction of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Parameters of a campaign listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Ordering column.
    pub sort: SortField,
    /// Ordering direction.
    pub order: SortOrder,
    /// Maximum number of rows, at least 1.
    pub limit: u32,
    /// Optional status filter, evaluated against `now`.
    pub status: Option<CampaignStatus>,
    /// Reference time for the status filter.
    pub now: NaiveDateTime,
}
