//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the campaign workflows and an
//! external system (the relational store, the terminal, the clock).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod prompt;
pub mod repository;

pub use clock::Clock;
pub use prompt::Prompter;
pub use repository::{AssignOutcome, CampaignRepository, CreateOutcome, RepoFuture};
