//! Integration tests for command handlers against raw Sleeper JSON

use quantum_gauntlet::{
    cli::ProjectionArgs,
    commands::{project::run_project, tournament::run_tournament},
    core::resolve_data_dir,
    GameState, GauntletError, Rationale, RosterId, Week, DATA_DIR_ENV_VAR,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Matchups as Sleeper returns them, including `null` points maps and
/// fields the projection never reads.
const WEEK_15: &str = r#"[
    {
        "roster_id": 1,
        "matchup_id": 1,
        "points": 48.2,
        "starters": ["4034", "6794"],
        "players": ["4034", "6794", "2133"],
        "players_points": { "4034": 30.2, "6794": 18.0, "2133": 6.5 },
        "custom_points": null
    },
    {
        "roster_id": 2,
        "matchup_id": 1,
        "points": 20.0,
        "starters": ["4881"],
        "players_points": { "4881": 20.0 }
    }
]"#;

const WEEK_16: &str = r#"[
    {
        "roster_id": 1,
        "matchup_id": 1,
        "points": 0.0,
        "starters": ["4034", "6794"],
        "players_points": null
    },
    {
        "roster_id": 2,
        "matchup_id": 1,
        "points": 25.0,
        "starters": ["4881"],
        "players_points": { "4881": 25.0 }
    }
]"#;

fn seed(dir: &Path) {
    fs::write(dir.join("matchups_15.json"), WEEK_15).unwrap();
    fs::write(dir.join("matchups_16.json"), WEEK_16).unwrap();
}

fn args(dir: Option<&Path>, week: u16) -> ProjectionArgs {
    ProjectionArgs {
        week: Week::new(week),
        data_dir: dir.map(Path::to_path_buf),
        params: None,
        weights: None,
        lookback: None,
        include_zero: false,
        floor: None,
        states: None,
    }
}

#[test]
fn test_project_from_raw_sleeper_files() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let (_, rp) = run_project(RosterId::new(1), args(Some(dir.path()), 16)).unwrap();

    // Null points map means nothing live yet; forecasts come from week 15 only
    assert_eq!(rp.starters_breakdown.len(), 2);
    assert!(rp
        .starters_breakdown
        .iter()
        .all(|p| p.game_state == GameState::NotStarted && p.live_points == 0.0));
    assert_eq!(rp.starters_breakdown[0].forecast_points, 30.2);
    assert_eq!(rp.starters_breakdown[1].forecast_points, 18.0);
    assert_eq!(rp.projected_total, 48.2);
}

#[test]
fn test_tournament_from_raw_sleeper_files() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let (inputs, tp) = run_tournament(vec![], args(Some(dir.path()), 16), true).unwrap();

    assert_eq!(inputs.week, Week::new(16));
    assert_eq!(tp.rosters.len(), 2);
    // Roster 2 is already past its forecast, so live points win
    let roster2 = &tp.rosters[1].starters_breakdown[0];
    assert_eq!(roster2.rationale, Rationale::InProgressLive);
    assert_eq!(tp.rosters[1].projected_total, 25.0);
    assert!((tp.total - 73.2).abs() < 1e-9);
}

#[test]
fn test_missing_week_is_reported() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let err = run_project(RosterId::new(1), args(Some(dir.path()), 17)).unwrap_err();
    assert!(matches!(err, GauntletError::NoData { week: 17 }));
    assert_eq!(err.to_string(), "No matchup data found for week 17");
}

#[test]
fn test_corrupt_cache_file_is_a_data_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("matchups_3.json"), "{ not json").unwrap();

    let err = run_project(RosterId::new(1), args(Some(dir.path()), 3)).unwrap_err();
    match err {
        GauntletError::Data { message } => assert!(message.contains("matchups_3.json")),
        other => panic!("Expected Data error, got {:?}", other),
    }
}

#[test]
fn test_data_dir_from_env() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    std::env::set_var(DATA_DIR_ENV_VAR, dir.path());
    let resolved = resolve_data_dir(None);
    let projected = run_project(RosterId::new(2), args(None, 16));
    std::env::remove_var(DATA_DIR_ENV_VAR);

    assert_eq!(resolved.unwrap(), dir.path());
    assert_eq!(projected.unwrap().1.projected_total, 25.0);
}
