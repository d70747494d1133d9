//! History timeline construction.

use chrono::{DateTime, Duration, Utc};

use super::catalog::Catalog;
use crate::shipment::{EventKind, ShipmentEvent, ShipmentState};

/// Inputs the timeline is built from, all derived from one hash.
pub(crate) struct Timeline<'a> {
    pub hash: u32,
    pub state: ShipmentState,
    pub origin: &'a str,
    pub destination: &'a str,
    pub now: DateTime<Utc>,
}

impl Timeline<'_> {
    /// Builds the milestones in construction order.
    ///
    /// Created and Picked Up always appear. Transit milestones are skipped
    /// for pending parcels; out-for-delivery only exists for delivered and
    /// in-transit parcels.
    pub fn build(&self, catalog: Catalog) -> Vec<ShipmentEvent> {
        let h = i64::from(self.hash);
        let event = |kind: EventKind, date: DateTime<Utc>, location: &str| ShipmentEvent {
            date,
            location: location.to_string(),
            status: kind.label().to_string(),
            description: catalog.event_description(kind).to_string(),
        };

        let mut events = Vec::with_capacity(5);

        let created = self.now - Duration::days(h % 10 + 1);
        events.push(event(EventKind::Created, created, self.origin));

        let picked_up = created + Duration::hours(4 + h % 8);
        events.push(event(EventKind::PickedUp, picked_up, self.origin));

        if self.state != ShipmentState::Pending {
            let sorted = picked_up + Duration::hours(12 + h % 24);
            events.push(event(EventKind::SortingCenter, sorted, catalog.sorting_center()));

            if h % 4 > 1 {
                let regional = sorted + Duration::hours(8 + h % 10);
                events.push(event(EventKind::RegionalCenter, regional, catalog.regional_center()));
            }
        }

        if matches!(self.state, ShipmentState::Delivered | ShipmentState::InTransit) {
            let out_for_delivery = self.now - Duration::hours(4 + h % 6);
            events.push(event(EventKind::OutForDelivery, out_for_delivery, self.destination));

            if self.state == ShipmentState::Delivered {
                let delivered = out_for_delivery + Duration::hours(2 + h % 4);
                events.push(event(EventKind::Delivered, delivered, self.destination));
            }
        }

        if self.state == ShipmentState::Exception {
            events.push(event(EventKind::Exception, self.now - Duration::hours(12), self.destination));
        }

        events
    }
}
