//! History milestones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of milestone in a shipment's history.
///
/// Finer than [`super::ShipmentState`]: both transit kinds carry the
/// "In Transit" label but differ in location and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Shipment data received.
    Created,
    /// Courier collected the parcel.
    PickedUp,
    /// Processed at the sorting center.
    SortingCenter,
    /// On its way via the regional center.
    RegionalCenter,
    /// Left the depot with a courier.
    OutForDelivery,
    /// Handed over.
    Delivered,
    /// Address could not be reached.
    Exception,
}

impl EventKind {
    /// Label stored in [`ShipmentEvent::status`].
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::PickedUp => "Picked Up",
            Self::SortingCenter | Self::RegionalCenter => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Exception => "Exception",
        }
    }
}

/// One entry of a shipment's history timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentEvent {
    /// When it happened.
    pub date: DateTime<Utc>,
    /// Where it happened.
    pub location: String,
    /// Milestone label ("Created", "Picked Up", ...).
    pub status: String,
    /// Human-readable explanation.
    pub description: String,
}
