//! Type-safe wrappers for Sleeper fantasy football identifiers.

pub mod ids;
pub mod time;

pub use ids::{PlayerId, RosterId};
pub use time::Week;
