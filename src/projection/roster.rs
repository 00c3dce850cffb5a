//! Single-roster projection.

use tracing::{debug, trace};

use super::{
    game_state::{GameState, GameStateProvider},
    history::recent_points,
    round2,
    weighted::weighted_average,
    PlayerProjection, Rationale, RosterProjection,
};
use crate::{
    cli::types::{RosterId, Week},
    config::ProjectionParams,
    sleeper::types::{find_roster_record, MatchupsByWeek, WeeklyMatchupRecord},
};

/// Apply the game-state selection rule to one player.
///
/// In progress keeps the forecast until live points reach it; a tie reports
/// the live branch.
pub fn select_points(state: GameState, live: f64, forecast: f64) -> (f64, Rationale) {
    match state {
        GameState::NotStarted => (forecast, Rationale::NotStartedForecast),
        GameState::InProgress if live < forecast => (forecast, Rationale::InProgressForecast),
        GameState::InProgress => (live, Rationale::InProgressLive),
        GameState::Finished => (live, Rationale::FinishedLive),
    }
}

/// Project a roster's score for `week` from its current-week starters.
///
/// Preconditions (not re-checked here): `week >= 1` and `params` passed
/// [`ProjectionParams::validate`]. A roster with no record in
/// `current_week` has no starters and projects to 0.
pub fn compute_roster_projection<G>(
    roster_id: RosterId,
    week: Week,
    history: &MatchupsByWeek,
    current_week: &[WeeklyMatchupRecord],
    game_state_of: &G,
    params: &ProjectionParams,
) -> RosterProjection
where
    G: GameStateProvider + ?Sized,
{
    let Some(record) = find_roster_record(current_week, roster_id) else {
        debug!(roster_id = %roster_id, week = %week, "Roster has no current-week record");
        return RosterProjection {
            roster_id,
            starters_breakdown: Vec::new(),
            projected_total: 0.0,
        };
    };

    debug!(
        roster_id = %roster_id,
        week = %week,
        starters = record.starters.len(),
        "Computing roster projection"
    );

    let mut starters_breakdown = Vec::with_capacity(record.starters.len());
    let mut running_total = 0.0;

    for player_id in &record.starters {
        let recent = recent_points(
            player_id,
            roster_id,
            week,
            history,
            params.lookback_weeks,
            params.exclude_zero_points,
        );
        let forecast = weighted_average(&recent, &params.weights).unwrap_or(params.default_floor);

        let live = record.points_for(player_id).unwrap_or(0.0);
        let game_state = game_state_of.game_state(player_id);
        let (chosen, rationale) = select_points(game_state, live, forecast);

        trace!(
            player_id = %player_id,
            history = ?recent,
            forecast,
            live,
            state = %game_state,
            chosen,
            "Selected player points"
        );

        starters_breakdown.push(PlayerProjection {
            player_id: player_id.clone(),
            live_points: round2(live),
            forecast_points: round2(forecast),
            game_state,
            chosen_points: round2(chosen),
            rationale,
        });
        running_total += chosen;
    }

    RosterProjection {
        roster_id,
        starters_breakdown,
        projected_total: round2(running_total),
    }
}
