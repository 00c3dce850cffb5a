//! Quantum Gauntlet projection library
//!
//! Projects fantasy-football roster scores for a playoff week from cached
//! Sleeper matchup data, blending a recency-weighted forecast with live
//! points according to each starter's game state.
//!
//! ## Features
//!
//! - **Roster Projection**: Per-starter breakdown with the rationale behind each chosen value
//! - **Tournament Projection**: Sum of several rosters, optionally computed in parallel
//! - **Configurable Forecast**: Weights, lookback window, zero handling and floor
//! - **Snapshot Publication**: Immutable projection snapshots for live refresh loops
//!
//! ## Quick Start
//!
//! ```rust
//! use quantum_gauntlet::{
//!     compute_roster_projection, sleeper::types::{MatchupsByWeek, WeeklyMatchupRecord},
//!     GameState, PlayerId, ProjectionParams, RosterId, Week,
//! };
//!
//! let mut history = MatchupsByWeek::new();
//! history.insert(
//!     Week::new(1),
//!     vec![WeeklyMatchupRecord::new(RosterId::new(1), vec!["A".into()]).with_points("A", 10.0)],
//! );
//! let current =
//!     vec![WeeklyMatchupRecord::new(RosterId::new(1), vec!["A".into()]).with_points("A", 0.0)];
//!
//! let projection = compute_roster_projection(
//!     RosterId::new(1),
//!     Week::new(2),
//!     &history,
//!     &current,
//!     &|_: &PlayerId| GameState::NotStarted,
//!     &ProjectionParams::default(),
//! );
//! assert_eq!(projection.projected_total, 10.0);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at the matchup cache to avoid passing it in every command:
//! ```bash
//! export GAUNTLET_DATA_DIR=~/.cache/quantum-gauntlet
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod projection;
pub mod sleeper;
pub mod snapshot;

// Re-export commonly used types
pub use cli::types::{PlayerId, RosterId, Week};
pub use config::ProjectionParams;
pub use error::{GauntletError, Result};
pub use projection::{
    compute_roster_projection, compute_tournament_projection, compute_tournament_projection_par,
    GameState, GameStateProvider, PlayerProjection, Rationale, RosterProjection,
    TournamentProjection,
};

pub const DATA_DIR_ENV_VAR: &str = "GAUNTLET_DATA_DIR";
