//! Projection engine
//!
//! Estimates each starter's contribution to an in-progress or upcoming week
//! by blending a recency-weighted forecast with live points according to the
//! player's game state:
//!
//! - **Forecast**: weighted average of the player's last few weeks (most
//!   recent first), skipping weeks with no data and, by default, zeros.
//! - **Not started**: use the forecast.
//! - **In progress**: use the forecast until live points reach it.
//! - **Finished**: use live points.
//!
//! Everything here is pure: no I/O, no shared state, nothing retained after
//! a call returns. Independent calls can run in parallel.

pub mod game_state;
pub mod history;
pub mod roster;
pub mod tournament;
pub mod weighted;


use serde::{Serialize, Serializer};
use std::fmt;

use crate::cli::types::{PlayerId, RosterId};

pub use game_state::{GameState, GameStateProvider, LivePointsHeuristic, WithOverrides};
pub use roster::{compute_roster_projection, select_points};
pub use tournament::{compute_tournament_projection, compute_tournament_projection_par};

/// Round to 2 decimal places for reporting. Exact ties go to the even
/// cent, so `1.125` reports as `1.12`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Which branch of the selection rule produced a player's chosen points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rationale {
    NotStartedForecast,
    InProgressForecast,
    InProgressLive,
    FinishedLive,
}

impl Rationale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rationale::NotStartedForecast => "not_started -> forecast",
            Rationale::InProgressForecast => "in_progress & live < forecast -> forecast",
            Rationale::InProgressLive => "in_progress & live >= forecast -> live",
            Rationale::FinishedLive => "finished -> final live",
        }
    }
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rationale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-starter result. Point values are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProjection {
    pub player_id: PlayerId,
    pub live_points: f64,
    pub forecast_points: f64,
    pub game_state: GameState,
    pub chosen_points: f64,
    pub rationale: Rationale,
}

/// Per-roster result, starters in lineup order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterProjection {
    pub roster_id: RosterId,
    pub starters_breakdown: Vec<PlayerProjection>,
    pub projected_total: f64,
}

/// Several rosters projected for the same week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentProjection {
    /// Sum of each roster's rounded total, rounded again
    pub total: f64,
    pub rosters: Vec<RosterProjection>,
}
