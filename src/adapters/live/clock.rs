//! Live clock using the system's local time.

use chrono::{Local, NaiveDateTime};

use crate::ports::clock::Clock;

/// Live clock that returns the real current local time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant.
#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
