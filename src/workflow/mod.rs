//! Multi-step operations that combine validation, prompting, and the store.

pub mod assign;
pub mod create;

pub use assign::{assign_influencer, AssignRequest, AssignmentResult};
pub use create::{create_campaign, CampaignInput};
