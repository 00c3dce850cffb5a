use crate::cli::types::{PlayerId, RosterId, Week};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};


/// Sleeper sends `null` for empty lineups and unscored weeks; read those as empty.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One roster's matchup entry for one week, as returned by
/// `/league/{league_id}/matchups/{week}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeeklyMatchupRecord {
    pub roster_id: RosterId,
    /// Starting lineup in slot order
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<PlayerId>,
    /// Points per player. Sparse: a missing player means no data, which is
    /// not the same thing as a recorded zero.
    #[serde(default, deserialize_with = "de_null_default")]
    pub players_points: HashMap<PlayerId, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchup_id: Option<u32>,
    /// Team total as reported by Sleeper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

impl WeeklyMatchupRecord {
    pub fn new(roster_id: RosterId, starters: Vec<PlayerId>) -> Self {
        Self {
            roster_id,
            starters,
            players_points: HashMap::new(),
            matchup_id: None,
            points: None,
        }
    }

    /// Builder-style helper for recording a player's points.
    pub fn with_points(mut self, player_id: impl Into<PlayerId>, points: f64) -> Self {
        self.players_points.insert(player_id.into(), points);
        self
    }

    pub fn points_for(&self, player_id: &PlayerId) -> Option<f64> {
        self.players_points.get(player_id).copied()
    }
}

/// Matchup records keyed by week. Weeks that were never fetched are absent.
pub type MatchupsByWeek = BTreeMap<Week, Vec<WeeklyMatchupRecord>>;

/// First record in `records` belonging to `roster_id`.
pub fn find_roster_record(
    records: &[WeeklyMatchupRecord],
    roster_id: RosterId,
) -> Option<&WeeklyMatchupRecord> {
    records.iter().find(|r| r.roster_id == roster_id)
}

/// Distinct roster IDs present in a week's records, ascending.
pub fn roster_ids(records: &[WeeklyMatchupRecord]) -> Vec<RosterId> {
    let mut ids: Vec<RosterId> = records.iter().map(|r| r.roster_id).collect();
    ids.sort();
    ids.dedup();
    ids
}
