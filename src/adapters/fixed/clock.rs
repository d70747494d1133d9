//! Clock pinned to a single instant.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `at`.
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Parses an RFC 3339 timestamp such as `2025-01-15T12:00:00Z`.
    ///
    /// # Errors
    ///
    /// Returns an error string when `raw` is not valid RFC 3339.
    pub fn parse(raw: &str) -> Result<Self, String> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|at| Self::new(at.with_timezone(&Utc)))
            .map_err(|e| format!("Invalid timestamp {raw:?} (expected RFC 3339): {e}"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
