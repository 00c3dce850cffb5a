//! Week numbers within a fantasy season.

use crate::error::{GauntletError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Week numbers
///
/// Week 0 is representable so that callers can pass it through unchanged,
/// but it never has prior weeks and is rejected by the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The week `back` weeks before this one, or `None` once that would fall
    /// below week 1.
    pub fn weeks_before(&self, back: u16) -> Option<Week> {
        match self.0.checked_sub(back) {
            Some(w) if w >= 1 => Some(Week(w)),
            _ => None,
        }
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = GauntletError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
