//! Command implementations for the Quantum Gauntlet CLI

pub mod common;
pub mod project;
pub mod tournament;
pub mod watch;
