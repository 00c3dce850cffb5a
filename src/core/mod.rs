//! Core utilities for the Quantum Gauntlet CLI
//!
//! - `cache`: location and file I/O of the local matchup cache

pub mod cache;

// Re-export commonly used items for convenience
pub use cache::{matchups_path, read_if_exists, resolve_data_dir, write_string};
