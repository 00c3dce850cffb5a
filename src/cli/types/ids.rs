//! ID types for Sleeper rosters and players.

use crate::error::{GauntletError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper roster IDs.
///
/// Roster IDs are small per-league integers (1..=12 in a twelve team
/// league). Wrapping them keeps them from being mixed up with weeks or
/// point totals.
///
/// # Examples
///
/// ```rust
/// use quantum_gauntlet::RosterId;
///
/// let roster_id = RosterId::new(7);
/// assert_eq!(roster_id.as_u32(), 7);
/// assert_eq!(roster_id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RosterId(pub u32);

impl RosterId {
    /// Create a new RosterId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RosterId {
    type Err = GauntletError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Player IDs.
///
/// Sleeper player IDs are strings: numeric for individual players
/// (`"4034"`) and team codes for defenses (`"DEN"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_roster_id_from_str() {
        assert_eq!("7".parse::<RosterId>().unwrap(), RosterId::new(7));
        assert_eq!(" 12 ".parse::<RosterId>().unwrap(), RosterId::new(12));
        assert!("seven".parse::<RosterId>().is_err());
        assert!("-1".parse::<RosterId>().is_err());
    }

    #[test]
    fn test_roster_id_ordering() {
        let mut ids = vec![RosterId::new(3), RosterId::new(1), RosterId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![RosterId::new(1), RosterId::new(2), RosterId::new(3)]);
    }

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        let json = serde_json::to_value(PlayerId::new("4034")).unwrap();
        assert_eq!(json, serde_json::json!("4034"));

        let back: PlayerId = serde_json::from_value(serde_json::json!("DEN")).unwrap();
        assert_eq!(back.as_str(), "DEN");
    }

    #[test]
    fn test_player_id_map_lookup_by_str() {
        let mut points: HashMap<PlayerId, f64> = HashMap::new();
        points.insert(PlayerId::new("4034"), 21.5);

        assert_eq!(points.get("4034"), Some(&21.5));
        assert_eq!(points.get("9999"), None);
    }
}
