//! Player game states and the providers that supply them.
//!
//! The engine has no schedule knowledge; whoever calls it decides how a
//! player's state is determined.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::{
    cli::types::PlayerId, error::GauntletError, sleeper::types::WeeklyMatchupRecord, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    NotStarted,
    InProgress,
    Finished,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::NotStarted => "NOT_STARTED",
            GameState::InProgress => "IN_PROGRESS",
            GameState::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = GauntletError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "NOT_STARTED" => Ok(GameState::NotStarted),
            "IN_PROGRESS" => Ok(GameState::InProgress),
            "FINISHED" => Ok(GameState::Finished),
            _ => Err(GauntletError::InvalidGameState {
                state: s.to_string(),
            }),
        }
    }
}

/// Accepts the same spellings as [`FromStr`], so hand-written state files
/// may use `finished` or `in-progress`.
impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Answers "what state is this player's game in right now?".
pub trait GameStateProvider {
    fn game_state(&self, player_id: &PlayerId) -> GameState;
}

impl<F> GameStateProvider for F
where
    F: Fn(&PlayerId) -> GameState,
{
    fn game_state(&self, player_id: &PlayerId) -> GameState {
        self(player_id)
    }
}

/// Infers state from current-week points alone: anything above zero means
/// the game is under way, everything else reads as not started.
///
/// There is no game clock behind this, so it never reports `Finished`, and a
/// player who has started but not yet scored reads as `NotStarted`.
#[derive(Debug, Clone, Default)]
pub struct LivePointsHeuristic {
    live_points: HashMap<PlayerId, f64>,
}

impl LivePointsHeuristic {
    /// Build from every record of the current week.
    ///
    /// A starter reads their points from the record that starts them, the
    /// same value the projection reports as live. Players who start nowhere
    /// keep the first value seen in any record.
    pub fn from_records(records: &[WeeklyMatchupRecord]) -> Self {
        let mut live_points = HashMap::new();
        for record in records {
            for player_id in &record.starters {
                let points = record.points_for(player_id).unwrap_or(0.0);
                live_points.entry(player_id.clone()).or_insert(points);
            }
        }
        for record in records {
            for (player_id, points) in &record.players_points {
                live_points.entry(player_id.clone()).or_insert(*points);
            }
        }
        Self { live_points }
    }
}

impl GameStateProvider for LivePointsHeuristic {
    fn game_state(&self, player_id: &PlayerId) -> GameState {
        match self.live_points.get(player_id) {
            Some(points) if *points > 0.0 => GameState::InProgress,
            _ => GameState::NotStarted,
        }
    }
}

/// Explicit per-player states take precedence; everyone else is answered by
/// the fallback provider.
#[derive(Debug, Clone)]
pub struct WithOverrides<P> {
    overrides: HashMap<PlayerId, GameState>,
    fallback: P,
}

impl<P> WithOverrides<P> {
    pub fn new(overrides: HashMap<PlayerId, GameState>, fallback: P) -> Self {
        Self {
            overrides,
            fallback,
        }
    }
}

impl<P: GameStateProvider> GameStateProvider for WithOverrides<P> {
    fn game_state(&self, player_id: &PlayerId) -> GameState {
        self.overrides
            .get(player_id)
            .copied()
            .unwrap_or_else(|| self.fallback.game_state(player_id))
    }
}
