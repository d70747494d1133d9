//! Port traits defining external boundaries.
//!
//! The tracking core consumes exactly one thing from its surroundings: the
//! current time. Implementations live in `src/adapters/`.

pub mod clock;

pub use clock::Clock;
