//! Core library entry for the `campaignctl` CLI.
//!
//! Campaigns are date-bounded marketing efforts that never overlap each
//! other; influencers are linked to campaigns many-to-many through the
//! store's join table.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod model;
pub mod ports;
pub mod render;
pub mod validate;
pub mod workflow;

use clap::Parser;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Run the CLI with the provided arguments.
///
/// Help and version requests print to stdout and succeed.
///
/// # Errors
///
/// Returns [`AppError::Usage`] when argument parsing fails, or the error of
/// the executed command.
pub fn run<I, T>(args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(());
        }
        Err(err) => return Err(AppError::Usage(err.to_string())),
    };

    let config = AppConfig::load(cli.database_url.as_deref(), cli.verbose)?;
    logging::init(&config.log_filter);
    tracing::debug!(database_url = %config.database_url, "configuration resolved");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::dispatch(&cli.command, &config))
}
