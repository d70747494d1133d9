//! Deterministic shipment synthesizer.
//!
//! Maps a tracking number to a reproducible mock carrier response. The
//! identifier's [`rolling_hash`] is the only source of variation; `now`
//! anchors every relative offset. Same identifier, same instant, same
//! locale: same record.

pub mod catalog;
pub mod hash;
mod history;

use chrono::{DateTime, Duration, Utc};
use tracing::trace;

pub use catalog::Catalog;
pub use hash::rolling_hash;

use crate::locale::Locale;
use crate::shipment::{ShipmentState, ShipmentStatus};
use history::Timeline;

/// Builds synthetic shipment records in a fixed locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Synthesizer {
    locale: Locale,
}

impl Synthesizer {
    /// Synthesizer producing texts in `locale`.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Derives the full status record for `identifier` as seen at `now`.
    ///
    /// Total over every string. Empty identifiers are filtered out by the
    /// parser before they get here, but would still produce a record.
    #[must_use]
    pub fn synthesize(self, identifier: &str, now: DateTime<Utc>) -> ShipmentStatus {
        let catalog = Catalog::new(self.locale);
        let hash = rolling_hash(identifier);
        let h = u64::from(hash);

        let status = ShipmentState::from_hash(hash);
        let origin = catalog.city(h * 3);
        let destination = catalog.city(h * 7);

        let last_update = now + Duration::days(last_update_offset_days(hash));
        let estimated_delivery = (status != ShipmentState::Delivered)
            .then(|| now + Duration::days(i64::from(hash % 5) + 1));

        let history = Timeline { hash, state: status, origin, destination, now }.build(catalog);

        trace!(identifier, hash, status = %status, events = history.len(), "shipment_synthesized");

        ShipmentStatus {
            tracking_number: identifier.to_string(),
            status,
            description: catalog.state_description(status).to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            last_update,
            estimated_delivery,
            history,
        }
    }
}

/// Day shift applied to `now` for the last-update stamp.
///
/// The raw offset `hash % 10 - 5` spans -5..=4. Negative values are used
/// as-is; anything else collapses to -1.
fn last_update_offset_days(hash: u32) -> i64 {
    let raw = i64::from(hash % 10) - 5;
    if raw < 0 {
        raw
    } else {
        -1
    }
}

/// Synthesizes a record with the default (English) texts.
#[must_use]
pub fn synthesize(identifier: &str, now: DateTime<Utc>) -> ShipmentStatus {
    Synthesizer::default().synthesize(identifier, now)
}
