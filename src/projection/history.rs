//! Recent-points extraction for a single player.

use crate::{
    cli::types::{PlayerId, RosterId, Week},
    sleeper::types::{find_roster_record, MatchupsByWeek, WeeklyMatchupRecord},
};

/// Collect a player's points from the weeks before `week`, most recent first.
///
/// Walks back `lookback` weeks (stopping before week 1). Weeks with no data
/// for the player, and recorded zeros when `exclude_zero` is set, contribute
/// nothing; they do not leave a hole in the result.
pub fn recent_points(
    player_id: &PlayerId,
    roster_id: RosterId,
    week: Week,
    history: &MatchupsByWeek,
    lookback: u16,
    exclude_zero: bool,
) -> Vec<f64> {
    let mut recent = Vec::with_capacity(lookback as usize);

    for back in 1..=lookback {
        let Some(prior_week) = week.weeks_before(back) else {
            break;
        };
        let Some(records) = history.get(&prior_week) else {
            continue;
        };
        let Some(points) = points_in_week(player_id, roster_id, records) else {
            continue;
        };
        if exclude_zero && points == 0.0 {
            continue;
        }
        recent.push(points);
    }

    recent
}

/// Two-tier lookup: the roster's own record first, then any record of the
/// week that lists the player (covers trades and waiver moves).
pub fn points_in_week(
    player_id: &PlayerId,
    roster_id: RosterId,
    records: &[WeeklyMatchupRecord],
) -> Option<f64> {
    find_roster_record(records, roster_id)
        .and_then(|record| record.points_for(player_id))
        .or_else(|| records.iter().find_map(|record| record.points_for(player_id)))
}
