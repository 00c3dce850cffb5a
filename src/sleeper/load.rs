//! Read cached Sleeper matchup responses from the data directory.
//!
//! An external fetcher saves `/league/{id}/matchups/{week}` responses as
//! `matchups_{week}.json`. A week that was never saved is simply absent.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Week},
    core::{matchups_path, read_if_exists, write_string},
    projection::GameState,
};

use super::types::{MatchupsByWeek, WeeklyMatchupRecord};


/// Load one week's matchups. `Ok(None)` when no file exists for that week.
pub fn load_week(data_dir: &Path, week: Week) -> Result<Option<Vec<WeeklyMatchupRecord>>> {
    let path = matchups_path(data_dir, week);
    let Some(contents) =
        read_if_exists(&path).with_context(|| format!("Failed to read {}", path.display()))?
    else {
        debug!(week = %week, path = %path.display(), "No cached matchups for week");
        return Ok(None);
    };

    let records: Vec<WeeklyMatchupRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(week = %week, records = records.len(), "Loaded cached matchups");
    Ok(Some(records))
}

/// Load the `lookback` weeks before `week` (never below week 1), skipping
/// weeks with no cached file.
pub fn load_history(data_dir: &Path, week: Week, lookback: u16) -> Result<MatchupsByWeek> {
    let mut history = MatchupsByWeek::new();
    for back in 1..=lookback {
        let Some(prior_week) = week.weeks_before(back) else {
            break;
        };
        if let Some(records) = load_week(data_dir, prior_week)? {
            history.insert(prior_week, records);
        }
    }
    Ok(history)
}

/// Save one week's matchups in the same layout `load_week` reads.
pub fn write_week(data_dir: &Path, week: Week, records: &[WeeklyMatchupRecord]) -> Result<()> {
    let path = matchups_path(data_dir, week);
    let json = serde_json::to_string_pretty(records)?;
    write_string(&path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load explicit per-player game states from a JSON object such as
/// `{"4034": "FINISHED", "DEN": "IN_PROGRESS"}`.
pub fn load_game_states(path: &Path) -> Result<HashMap<PlayerId, GameState>> {
    let contents = read_if_exists(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .with_context(|| format!("Game state file not found: {}", path.display()))?;

    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
