//! Batch orchestration.
//!
//! Each identifier is synthesized independently and results keep input
//! order. A single simulated carrier delay is applied per batch, never per
//! identifier. That wait is the only suspension point and may be cancelled;
//! nothing is left to undo when it is.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::DEFAULT_LATENCY;
use crate::error::TrackError;
use crate::shipment::ShipmentStatus;
use crate::synth::Synthesizer;

/// Answers tracking requests from the mock carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracker {
    latency: Duration,
    synthesizer: Synthesizer,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl Tracker {
    /// Tracker with the given simulated latency and English texts.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_synthesizer(latency, Synthesizer::default())
    }

    /// Tracker using a specific synthesizer.
    #[must_use]
    pub fn with_synthesizer(latency: Duration, synthesizer: Synthesizer) -> Self {
        Self { latency, synthesizer }
    }

    /// Simulated latency applied per batch.
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Maps every identifier to its record without waiting.
    #[must_use]
    pub fn track_now<S: AsRef<str>>(&self, ids: &[S], now: DateTime<Utc>) -> Vec<ShipmentStatus> {
        let results: Vec<ShipmentStatus> =
            ids.iter().map(|id| self.synthesizer.synthesize(id.as_ref(), now)).collect();
        info!(count = results.len(), at = %now, "batch_tracked");
        results
    }

    /// Waits out the simulated latency once, then answers the batch.
    pub async fn track<S: AsRef<str>>(&self, ids: &[S], now: DateTime<Utc>) -> Vec<ShipmentStatus> {
        debug!(count = ids.len(), latency_ms = self.latency.as_millis(), "batch_waiting");
        tokio::time::sleep(self.latency).await;
        self.track_now(ids, now)
    }

    /// Like [`Tracker::track`], but gives up as soon as `cancel` turns true.
    ///
    /// A sender dropped without signalling never cancels.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Cancelled`] if cancellation wins the race.
    pub async fn track_until_cancelled<S: AsRef<str>>(
        &self,
        ids: &[S],
        now: DateTime<Utc>,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<Vec<ShipmentStatus>, TrackError> {
        if *cancel.borrow_and_update() {
            return Err(TrackError::Cancelled);
        }

        tokio::select! {
            results = self.track(ids, now) => Ok(results),
            () = cancelled(&mut cancel) => {
                debug!(count = ids.len(), "batch_cancelled");
                Err(TrackError::Cancelled)
            }
        }
    }
}

async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    if cancel.wait_for(|flag| *flag).await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Tracks `ids` at `now` after a single `latency` wait, in input order.
pub async fn track_shipments<S: AsRef<str>>(
    ids: &[S],
    now: DateTime<Utc>,
    latency: Duration,
) -> Vec<ShipmentStatus> {
    Tracker::new(latency).track(ids, now).await
}
