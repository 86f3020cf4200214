//! Clock port for obtaining the current time.

use chrono::NaiveDateTime;

/// Provides the current wall-clock time.
///
/// Campaign timestamps carry no zone, so the clock reports local naive time.
/// Status filters (`active`, `past`, `upcoming`) are evaluated against it.
pub trait Clock: Send + Sync {
    /// Returns the current local time.
    fn now(&self) -> NaiveDateTime;
}
