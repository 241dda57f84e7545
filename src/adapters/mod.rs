//! Adapters implementing the ports.

pub mod ttl_cache;

pub use ttl_cache::{ManualClock, TtlCache};
