//! Common utilities and helper functions shared across commands.
//!
//! Everything that turns raw CLI input into trusted engine input lives here,
//! so the projection engine never sees an unvalidated week or parameter set.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::ProjectionArgs,
    config::ProjectionParams,
    core::resolve_data_dir,
    error::GauntletError,
    projection::{GameState, LivePointsHeuristic, RosterProjection, WithOverrides},
    sleeper::{
        load::{load_game_states, load_history, load_week},
        types::{MatchupsByWeek, WeeklyMatchupRecord},
    },
    PlayerId, Result, Week,
};

/// Validated inputs for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionInputs {
    pub data_dir: PathBuf,
    pub week: Week,
    pub params: ProjectionParams,
    pub state_overrides: HashMap<PlayerId, GameState>,
}

impl ProjectionInputs {
    pub fn from_args(args: ProjectionArgs) -> Result<Self> {
        validate_week(args.week)?;
        let data_dir = resolve_data_dir(args.data_dir)?;

        let mut params = match &args.params {
            Some(path) => ProjectionParams::from_file(path)?,
            None => ProjectionParams::default(),
        };
        if let Some(weights) = args.weights {
            params.weights = weights;
        }
        if let Some(lookback) = args.lookback {
            params.lookback_weeks = lookback;
        }
        if args.include_zero {
            params.exclude_zero_points = false;
        }
        if let Some(floor) = args.floor {
            params.default_floor = floor;
        }
        params.validate()?;

        let state_overrides = match &args.states {
            Some(path) => load_game_states(path)?,
            None => HashMap::new(),
        };

        Ok(Self {
            data_dir,
            week: args.week,
            params,
            state_overrides,
        })
    }

    /// Heuristic game states for this week, with the explicit overrides on top.
    pub fn game_states(
        &self,
        current: &[WeeklyMatchupRecord],
    ) -> WithOverrides<LivePointsHeuristic> {
        WithOverrides::new(
            self.state_overrides.clone(),
            LivePointsHeuristic::from_records(current),
        )
    }
}

pub fn validate_week(week: Week) -> Result<()> {
    if week.as_u16() == 0 {
        return Err(GauntletError::InvalidWeek {
            week: week.as_u16(),
        });
    }
    Ok(())
}

/// Current week's records plus the history window the params ask for.
#[derive(Debug)]
pub struct LoadedMatchups {
    pub current: Vec<WeeklyMatchupRecord>,
    pub history: MatchupsByWeek,
}

pub fn load_matchups(inputs: &ProjectionInputs) -> Result<LoadedMatchups> {
    info!(
        week = %inputs.week,
        data_dir = %inputs.data_dir.display(),
        "Loading cached matchups"
    );
    let current = load_week(&inputs.data_dir, inputs.week)?.ok_or(GauntletError::NoData {
        week: inputs.week.as_u16(),
    })?;
    let history = load_history(&inputs.data_dir, inputs.week, inputs.params.lookback_weeks)?;
    info!(
        rosters = current.len(),
        history_weeks = history.len(),
        "Matchups loaded"
    );

    Ok(LoadedMatchups { current, history })
}

/// Render a roster's breakdown as a fixed-width text table.
pub fn format_roster_table(week: Week, projection: &RosterProjection) -> String {
    let mut out = format!("Roster {} projection for Week {}\n\n", projection.roster_id, week);
    out.push_str(&format!(
        "{:<10} {:<12} {:>8} {:>8} {:>8}  Rationale\n",
        "Player", "State", "Live", "Fcst", "Chosen"
    ));
    out.push_str(&format!(
        "{:<10} {:<12} {:>8} {:>8} {:>8}  ---------\n",
        "------", "-----", "----", "----", "------"
    ));

    for p in &projection.starters_breakdown {
        out.push_str(&format!(
            "{:<10} {:<12} {:>8.2} {:>8.2} {:>8.2}  {}\n",
            p.player_id.as_str(),
            p.game_state.as_str(),
            p.live_points,
            p.forecast_points,
            p.chosen_points,
            p.rationale
        ));
    }

    out.push_str(&format!("\nProjected total: {:.2}", projection.projected_total));
    out
}
