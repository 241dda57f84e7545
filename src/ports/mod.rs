//! Ports (trait boundaries) for collaborators of the two engines.
//!
//! The rule engine and the search are pure functions; these traits cover what
//! sits around them: who picks the moves in a game, and how a caller caches
//! lookups against slow external services.

pub mod cache;
pub mod move_selector;

pub use cache::{Cache, Clock, SystemClock};
pub use move_selector::MoveSelector;
