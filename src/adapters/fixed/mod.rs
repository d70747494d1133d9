//! Adapters that answer with pinned values, for reproducible runs.

pub mod clock;

pub use clock::FixedClock;
