//! Tuning parameters for the projection engine.
//!
//! The engine trusts these values. Anything read from the command line or a
//! params file goes through [`ProjectionParams::validate`] first.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{core::read_if_exists, error::GauntletError, Result};

pub const DEFAULT_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];
pub const DEFAULT_LOOKBACK_WEEKS: u16 = 3;

/// Knobs for the recency-weighted forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    /// Most recent week first. Only as many as there are usable weeks are
    /// applied, renormalized to sum to 1.
    pub weights: Vec<f64>,
    /// How many prior weeks to examine per player
    pub lookback_weeks: u16,
    /// Treat a recorded 0.0 as a bye / did-not-play and skip it
    pub exclude_zero_points: bool,
    /// Forecast for a player with no usable history
    pub default_floor: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS.to_vec(),
            lookback_weeks: DEFAULT_LOOKBACK_WEEKS,
            exclude_zero_points: true,
            default_floor: 0.0,
        }
    }
}

impl ProjectionParams {
    /// Load params from a JSON file. Fields missing from the file keep their
    /// defaults; a missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = read_if_exists(path)?.ok_or_else(|| GauntletError::InvalidParams {
            reason: format!("params file not found: {}", path.display()),
        })?;
        let params: ProjectionParams = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Reject inputs the numeric core does not guard against.
    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(invalid("weights must not be empty"));
        }
        if let Some(w) = self.weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(invalid(format!(
                "weights must be finite and non-negative, got {}",
                w
            )));
        }
        if !self.default_floor.is_finite() {
            return Err(invalid("default floor must be a finite number"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> GauntletError {
    GauntletError::InvalidParams {
        reason: reason.into(),
    }
}
