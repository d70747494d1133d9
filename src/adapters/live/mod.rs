//! Live adapters backed by the host system.

pub mod clock;
