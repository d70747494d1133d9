//! Service context bundling the port trait objects.

use chrono::{DateTime, Utc};

use crate::adapters::fixed::FixedClock;
use crate::adapters::live::clock::LiveClock;
use crate::ports::clock::Clock;

/// Bundles the ports a command needs.
///
/// Constructors wire up different adapter implementations (live, fixed).
pub struct ServiceContext {
    /// Clock anchoring every synthesized timestamp.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Context reading the host clock.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock) }
    }

    /// Context whose clock is frozen at `at`.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self { clock: Box::new(FixedClock::new(at)) }
    }

    /// Pinned context when `at` is given, live otherwise.
    #[must_use]
    pub fn pinned_or_live(at: Option<DateTime<Utc>>) -> Self {
        at.map_or_else(Self::live, Self::fixed)
    }
}
