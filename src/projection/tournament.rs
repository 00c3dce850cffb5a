//! Fan-out over several rosters.

use rayon::prelude::*;
use tracing::debug;

use super::{
    game_state::GameStateProvider, roster::compute_roster_projection, round2,
    TournamentProjection,
};
use crate::{
    cli::types::{RosterId, Week},
    config::ProjectionParams,
    sleeper::types::{MatchupsByWeek, WeeklyMatchupRecord},
};

/// Project every roster in `roster_ids`, in order, and sum their totals.
pub fn compute_tournament_projection<G>(
    roster_ids: &[RosterId],
    week: Week,
    history: &MatchupsByWeek,
    current_week: &[WeeklyMatchupRecord],
    game_state_of: &G,
    params: &ProjectionParams,
) -> TournamentProjection
where
    G: GameStateProvider + ?Sized,
{
    let rosters = roster_ids
        .iter()
        .map(|&roster_id| {
            compute_roster_projection(roster_id, week, history, current_week, game_state_of, params)
        })
        .collect();

    TournamentProjection::from_rosters(rosters)
}

/// Same result as [`compute_tournament_projection`], with each roster
/// computed on the rayon pool. Output order still follows `roster_ids`.
pub fn compute_tournament_projection_par<G>(
    roster_ids: &[RosterId],
    week: Week,
    history: &MatchupsByWeek,
    current_week: &[WeeklyMatchupRecord],
    game_state_of: &G,
    params: &ProjectionParams,
) -> TournamentProjection
where
    G: GameStateProvider + Sync + ?Sized,
{
    debug!(rosters = roster_ids.len(), week = %week, "Projecting rosters in parallel");

    let rosters = roster_ids
        .par_iter()
        .map(|&roster_id| {
            compute_roster_projection(roster_id, week, history, current_week, game_state_of, params)
        })
        .collect();

    TournamentProjection::from_rosters(rosters)
}

impl TournamentProjection {
    fn from_rosters(rosters: Vec<super::RosterProjection>) -> Self {
        let total = round2(rosters.iter().map(|r| r.projected_total).sum());
        Self { total, rosters }
    }
}
