//! Coarse top-level shipment state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a parcel currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentState {
    /// Handed over to the recipient.
    Delivered,
    /// Moving through the carrier network.
    #[serde(rename = "In Transit")]
    InTransit,
    /// Registered but not yet moving.
    Pending,
    /// Delivery hit a problem.
    Exception,
}

impl ShipmentState {
    /// All states in bucket order. `ALL[hash % 4]` picks a record's state.
    pub const ALL: [Self; 4] = [Self::Delivered, Self::InTransit, Self::Pending, Self::Exception];

    /// Picks the state for a hash bucket.
    #[must_use]
    pub fn from_hash(hash: u32) -> Self {
        Self::ALL[(hash % 4) as usize]
    }

    /// Wire label, as carried in the record's `status` field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::InTransit => "In Transit",
            Self::Pending => "Pending",
            Self::Exception => "Exception",
        }
    }
}

impl fmt::Display for ShipmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
