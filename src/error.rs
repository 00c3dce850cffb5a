//! Error types for the Quantum Gauntlet projection CLI
//!
//! The projection engine itself never fails; these errors come from the
//! layers around it (loading matchup files, parsing arguments, validating
//! tuning parameters before they reach the engine).

use thiserror::Error;


pub type Result<T> = std::result::Result<T, GauntletError>;

#[derive(Error, Debug)]
pub enum GauntletError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse integer: {0}")]
    InvalidInteger(#[from] std::num::ParseIntError),

    #[error("Data directory not provided, {env_var} not set, and no cache directory available")]
    MissingDataDir { env_var: String },

    #[error("Invalid week: {week} (weeks start at 1)")]
    InvalidWeek { week: u16 },

    #[error("Invalid projection parameters: {reason}")]
    InvalidParams { reason: String },

    #[error("Invalid game state: {state}")]
    InvalidGameState { state: String },

    #[error("No matchup data found for week {week}")]
    NoData { week: u16 },

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("Data error: {message}")]
    Data { message: String },
}

impl From<anyhow::Error> for GauntletError {
    fn from(err: anyhow::Error) -> Self {
        GauntletError::Data {
            // Alternate formatting keeps the context chain
            message: format!("{:#}", err),
        }
    }
}
