//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the instant every synthesized offset is anchored to.
///
/// Substituting a fixed clock makes whole tracking runs reproducible.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
