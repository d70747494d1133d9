//! Consolidated status record for one tracking number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::ShipmentEvent;
use super::state::ShipmentState;

/// Everything known about a single tracked parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentStatus {
    /// Identifier the user asked about.
    pub tracking_number: String,
    /// Current top-level state.
    pub status: ShipmentState,
    /// Human-readable summary of the state.
    pub description: String,
    /// City the parcel left from.
    pub origin: String,
    /// City the parcel is headed to.
    pub destination: String,
    /// Time of the latest status change.
    pub last_update: DateTime<Utc>,
    /// Expected delivery time. `None` once delivered.
    pub estimated_delivery: Option<DateTime<Utc>>,
    /// Milestones in construction order.
    pub history: Vec<ShipmentEvent>,
}
