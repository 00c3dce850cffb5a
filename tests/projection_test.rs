//! End-to-end projection scenarios through the public API

use quantum_gauntlet::{
    compute_roster_projection, compute_tournament_projection, compute_tournament_projection_par,
    sleeper::types::{MatchupsByWeek, WeeklyMatchupRecord},
    GameState, PlayerId, ProjectionParams, Rationale, RosterId, Week,
};
use std::collections::HashMap;

fn record(roster_id: u32, starters: &[&str], points: &[(&str, f64)]) -> WeeklyMatchupRecord {
    let mut rec = WeeklyMatchupRecord::new(
        RosterId::new(roster_id),
        starters.iter().map(|s| PlayerId::new(*s)).collect(),
    );
    for (player, pts) in points {
        rec = rec.with_points(*player, *pts);
    }
    rec
}

/// One roster, one starter, with the given points in weeks 1..=n.
fn single_player_history(roster_id: u32, player: &str, points: &[f64]) -> MatchupsByWeek {
    points
        .iter()
        .enumerate()
        .map(|(i, pts)| {
            (
                Week::new(i as u16 + 1),
                vec![record(roster_id, &[player], &[(player, *pts)])],
            )
        })
        .collect()
}

fn not_started(_: &PlayerId) -> GameState {
    GameState::NotStarted
}

#[test]
fn test_recency_weighted_forecast() {
    let history = single_player_history(1, "A", &[10.0, 20.0, 30.0]);
    let current = vec![record(1, &["A"], &[])];

    let rp = compute_roster_projection(
        RosterId::new(1),
        Week::new(4),
        &history,
        &current,
        &not_started,
        &ProjectionParams::default(),
    );

    assert_eq!(rp.starters_breakdown[0].forecast_points, 25.0);
    assert_eq!(rp.projected_total, 25.0);
}

#[test]
fn test_zero_week_skipped_and_weights_renormalized() {
    let history = single_player_history(1, "A", &[0.0, 10.0, 40.0]);
    let current = vec![record(1, &["A"], &[])];

    let rp = compute_roster_projection(
        RosterId::new(1),
        Week::new(4),
        &history,
        &current,
        &not_started,
        &ProjectionParams::default(),
    );

    assert_eq!(rp.projected_total, 30.0);
}

#[test]
fn test_finished_player_reports_live_points() {
    let history = single_player_history(1, "A", &[0.0, 0.0, 0.0]);
    let current = vec![record(1, &["A"], &[("A", 12.3)])];

    let rp = compute_roster_projection(
        RosterId::new(1),
        Week::new(4),
        &history,
        &current,
        &|_: &PlayerId| GameState::Finished,
        &ProjectionParams::default(),
    );

    let p = &rp.starters_breakdown[0];
    assert_eq!(p.forecast_points, 0.0);
    assert_eq!(p.chosen_points, 12.3);
    assert_eq!(p.rationale, Rationale::FinishedLive);
    assert_eq!(rp.projected_total, 12.3);
}

#[test]
fn test_tournament_sums_roster_totals() {
    // Roster 1 forecasts 16.67, roster 2 forecasts 13.33
    let mut history = MatchupsByWeek::new();
    history.insert(
        Week::new(1),
        vec![record(1, &["A"], &[("A", 10.0)]), record(2, &["B"], &[("B", 20.0)])],
    );
    history.insert(
        Week::new(2),
        vec![record(1, &["A"], &[("A", 20.0)]), record(2, &["B"], &[("B", 10.0)])],
    );
    let current = vec![record(1, &["A"], &[]), record(2, &["B"], &[])];
    let rosters = [RosterId::new(1), RosterId::new(2)];
    let params = ProjectionParams::default();

    let tp = compute_tournament_projection(
        &rosters,
        Week::new(3),
        &history,
        &current,
        &not_started,
        &params,
    );

    assert_eq!(tp.rosters[0].projected_total, 16.67);
    assert_eq!(tp.rosters[1].projected_total, 13.33);
    assert!((tp.total - 30.0).abs() < 1e-9);

    let par = compute_tournament_projection_par(
        &rosters,
        Week::new(3),
        &history,
        &current,
        &not_started,
        &params,
    );
    assert_eq!(tp, par);
}

#[test]
fn test_in_progress_player_switches_to_live_once_ahead() {
    let history = single_player_history(1, "A", &[10.0, 10.0, 10.0]);
    let states: HashMap<PlayerId, GameState> = [(PlayerId::new("A"), GameState::InProgress)].into();
    let state_of = |p: &PlayerId| states.get(p).copied().unwrap_or(GameState::NotStarted);

    let behind = vec![record(1, &["A"], &[("A", 4.0)])];
    let rp = compute_roster_projection(
        RosterId::new(1),
        Week::new(4),
        &history,
        &behind,
        &state_of,
        &ProjectionParams::default(),
    );
    assert_eq!(rp.starters_breakdown[0].rationale, Rationale::InProgressForecast);
    assert_eq!(rp.projected_total, 10.0);

    let ahead = vec![record(1, &["A"], &[("A", 17.5)])];
    let rp = compute_roster_projection(
        RosterId::new(1),
        Week::new(4),
        &history,
        &ahead,
        &state_of,
        &ProjectionParams::default(),
    );
    assert_eq!(rp.starters_breakdown[0].rationale, Rationale::InProgressLive);
    assert_eq!(rp.projected_total, 17.5);
}

#[test]
fn test_breakdown_json_shape() {
    let history = single_player_history(1, "A", &[10.0]);
    let current = vec![record(1, &["A"], &[])];

    let rp = compute_roster_projection(
        RosterId::new(1),
        Week::new(2),
        &history,
        &current,
        &not_started,
        &ProjectionParams::default(),
    );
    let json = serde_json::to_value(&rp).unwrap();

    assert_eq!(json["roster_id"], 1);
    assert_eq!(json["projected_total"], 10.0);
    let player = &json["starters_breakdown"][0];
    assert_eq!(player["player_id"], "A");
    assert_eq!(player["game_state"], "NOT_STARTED");
    assert_eq!(player["rationale"], "not_started -> forecast");
}
