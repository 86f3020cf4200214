//! Error type shared by every command.

use thiserror::Error;

/// Boxed error returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure a command can end with.
///
/// All variants map to exit code 1 at the binary boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed user input such as a non-numeric id or bad timestamp.
    #[error("{0}")]
    InvalidArgument(String),

    /// A campaign or influencer id did not resolve.
    #[error("{entity} with ID {id} not found.")]
    NotFound {
        /// Entity kind, e.g. `"Campaign"`.
        entity: &'static str,
        /// The id that was looked up.
        id: i64,
    },

    /// One or more field-level constraint violations.
    #[error("{entity} validation failed")]
    Validation {
        /// Entity kind being validated.
        entity: &'static str,
        /// Every violated constraint, in check order.
        violations: Vec<String>,
    },

    /// The new campaign's dates overlap an existing campaign.
    #[error("{0}")]
    Conflict(String),

    /// The store failed inside a transaction; the transaction was rolled back.
    #[error("{0}")]
    TransactionFailure(String),

    /// A read query failed.
    #[error("{0}")]
    QueryFailure(String),

    /// The store could not be opened or migrated.
    #[error("failed to open store: {0}")]
    Store(String),

    /// Configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(String),

    /// Interactive input could not be read.
    #[error("failed to read input: {0}")]
    Prompt(String),

    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Individual violation messages carried by a validation failure.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Validation { violations, .. } => violations,
            _ => &[],
        }
    }
}

/// Result alias used by commands and workflows.
pub type AppResult<T> = Result<T, AppError>;
