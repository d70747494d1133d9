//! Shipment record types.
//!
//! Two status vocabularies live here on purpose: [`ShipmentState`] is the
//! coarse top-level state of a parcel, [`EventKind`] labels individual
//! milestones in its history ("Created", "Picked Up", ...).

mod event;
mod record;
mod state;

pub use event::{EventKind, ShipmentEvent};
pub use record::ShipmentStatus;
pub use state::ShipmentState;
