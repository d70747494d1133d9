//! Canonical fixture: `SMSA123` tracked at 2025-01-15T12:00:00Z.
//!
//! hash("SMSA123") = 1363523830, so every derived value below follows from
//! 1363523830 % {4, 5, 8, 10} = {2, 0, 6, 0} and (hash * 3|7) % 10 = 0.

use chrono::{DateTime, TimeZone, Utc};

use parcel_track::synth::{rolling_hash, Synthesizer};
use parcel_track::{parse, synthesize, ParseError, ShipmentState, Tracker};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

#[test]
fn smsa123_hash_and_buckets() {
    let hash = rolling_hash("SMSA123");
    assert_eq!(hash, 1_363_523_830);
    assert_eq!(hash % 4, 2);
    assert_eq!((u64::from(hash) * 3) % 10, 0);
    assert_eq!((u64::from(hash) * 7) % 10, 0);
}

#[test]
fn smsa123_record() {
    let record = synthesize("SMSA123", now());

    assert_eq!(record.tracking_number, "SMSA123");
    assert_eq!(record.status, ShipmentState::Pending);
    assert_eq!(record.description, "Shipment processed for delivery");
    assert_eq!(record.origin, "Riyadh");
    assert_eq!(record.destination, "Riyadh");
    // hash % 10 - 5 = -5 days
    assert_eq!(record.last_update, Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap());
    // hash % 5 + 1 = 1 day
    assert_eq!(
        record.estimated_delivery,
        Some(Utc.with_ymd_and_hms(2025, 1, 16, 12, 0, 0).unwrap())
    );

    assert_eq!(record.history.len(), 2);
    let created = &record.history[0];
    assert_eq!(created.status, "Created");
    assert_eq!(created.location, "Riyadh");
    assert_eq!(created.description, "Shipment information received");
    assert_eq!(created.date, Utc.with_ymd_and_hms(2025, 1, 14, 12, 0, 0).unwrap());

    let picked_up = &record.history[1];
    assert_eq!(picked_up.status, "Picked Up");
    assert_eq!(picked_up.location, "Riyadh");
    assert_eq!(picked_up.description, "Shipment picked up by courier");
    // 4 + hash % 8 = 10 hours after creation
    assert_eq!(picked_up.date, Utc.with_ymd_and_hms(2025, 1, 14, 22, 0, 0).unwrap());
}

#[test]
fn smsa123_json_is_stable() {
    let first = serde_json::to_string(&synthesize("SMSA123", now())).unwrap();
    let second = serde_json::to_string(&synthesize("SMSA123", now())).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        concat!(
            r#"{"trackingNumber":"SMSA123","status":"Pending","#,
            r#""description":"Shipment processed for delivery","#,
            r#""origin":"Riyadh","destination":"Riyadh","#,
            r#""lastUpdate":"2025-01-10T12:00:00Z","estimatedDelivery":"2025-01-16T12:00:00Z","#,
            r#""history":["#,
            r#"{"date":"2025-01-14T12:00:00Z","location":"Riyadh","status":"Created","#,
            r#""description":"Shipment information received"},"#,
            r#"{"date":"2025-01-14T22:00:00Z","location":"Riyadh","status":"Picked Up","#,
            r#""description":"Shipment picked up by courier"}]}"#,
        )
    );
}

#[test]
fn smsa123_arabic_record() {
    let record = Synthesizer::new(parcel_track::locale::Locale::Ar).synthesize("SMSA123", now());
    assert_eq!(record.origin, "الرياض");
    assert_eq!(record.description, "تمت معالجة الشحنة للتسليم");
    assert_eq!(record.history[0].description, "تم استلام معلومات الشحنة");
    assert_eq!(record.history[0].status, "Created");
}

#[test]
fn parse_then_track_end_to_end() {
    assert_eq!(parse(",,\n,"), Err(ParseError::EmptyInput));

    let ids = parse("SMSA123\nA, A").unwrap();
    let results = Tracker::new(std::time::Duration::ZERO).track_now(&ids, now());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], synthesize("SMSA123", now()));
    assert_eq!(results[1], results[2]);
    assert_eq!(results[1].tracking_number, "A");
}
