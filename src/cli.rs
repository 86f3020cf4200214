//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::model::{CampaignStatus, SortField, SortOrder};

/// Top-level CLI parser for `campaignctl`.
#[derive(Debug, Parser)]
#[command(name = "campaignctl", version, about = "Manage campaigns and their influencers")]
pub struct Cli {
    /// SQLite database URL; overrides `DATABASE_URL`.
    #[arg(long, global = true, value_name = "URL")]
    pub database_url: Option<String>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new campaign; missing fields are prompted for.
    CreateCampaign {
        /// Campaign name (3 to 255 characters).
        #[arg(long)]
        name: Option<String>,
        /// Optional description.
        #[arg(long)]
        description: Option<String>,
        /// Start, as `YYYY-MM-DD HH:MM:SS`.
        #[arg(long, value_name = "TIMESTAMP")]
        start: Option<String>,
        /// End, as `YYYY-MM-DD HH:MM:SS`; must be after the start.
        #[arg(long, value_name = "TIMESTAMP")]
        end: Option<String>,
    },

    /// List campaigns with their influencer counts.
    #[command(visible_aliases = ["campaigns", "ls-campaigns"])]
    ListCampaigns {
        /// Field to sort by.
        #[arg(short, long, value_enum, default_value_t = SortField::Id)]
        sort: SortField,
        /// Sort direction.
        #[arg(short, long, value_enum, default_value_t = SortOrder::Asc)]
        order: SortOrder,
        /// Maximum number of campaigns to display.
        #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
        /// Only campaigns in this state right now.
        #[arg(long, value_enum)]
        status: Option<CampaignStatus>,
        /// Print rows as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Show one campaign and the influencers assigned to it.
    #[command(allow_negative_numbers = true)]
    ShowCampaign {
        /// Campaign id.
        id: String,
    },

    /// Delete a campaign; its assignments are removed with it.
    #[command(allow_negative_numbers = true)]
    DeleteCampaign {
        /// Campaign id.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },

    /// Assign an influencer to a campaign.
    #[command(allow_negative_numbers = true)]
    AssignInfluencer {
        /// Campaign id.
        campaign_id: String,
        /// Influencer id.
        influencer_id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },

    /// Remove an influencer from a campaign.
    #[command(allow_negative_numbers = true)]
    UnassignInfluencer {
        /// Campaign id.
        campaign_id: String,
        /// Influencer id.
        influencer_id: String,
    },

    /// Register a new influencer.
    CreateInfluencer {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Contact email address.
        #[arg(long)]
        email: String,
        /// Audience size.
        #[arg(long, default_value_t = 0)]
        followers: u32,
    },

    /// List influencers.
    ListInfluencers {
        /// Maximum number of influencers to display.
        #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
    },

    /// Show one influencer and the campaigns it is assigned to.
    #[command(allow_negative_numbers = true)]
    ShowInfluencer {
        /// Influencer id.
        id: String,
    },
}
