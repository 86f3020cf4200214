//! Prompter port for interactive input.

use crate::error::PortError;

/// Asks the operator for missing values and confirmations.
///
/// Abstracting the terminal lets the creation and assignment workflows run
/// against scripted input in tests.
pub trait Prompter: Send + Sync {
    /// Shows `question` and returns the trimmed answer.
    ///
    /// Returns `Ok(None)` when the answer is empty or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    fn ask(&self, question: &str) -> Result<Option<String>, PortError>;

    /// Asks a yes/no question; an empty answer selects `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    fn confirm(&self, question: &str, default: bool) -> Result<bool, PortError>;
}
