//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{RosterId, Week};

/// Projection inputs shared between commands
#[derive(Debug, Args)]
pub struct ProjectionArgs {
    /// Target week (weeks start at 1).
    #[clap(long, short)]
    pub week: Week,

    /// Directory holding cached `matchups_<week>.json` files (or set `GAUNTLET_DATA_DIR`).
    #[clap(long, short)]
    pub data_dir: Option<PathBuf>,

    /// JSON file with projection parameters; the flags below override it.
    #[clap(long)]
    pub params: Option<PathBuf>,

    /// Forecast weights, most recent week first: `--weights 0.6,0.3,0.1`.
    #[clap(long, value_delimiter = ',')]
    pub weights: Option<Vec<f64>>,

    /// Number of prior weeks to examine per player.
    #[clap(long)]
    pub lookback: Option<u16>,

    /// Count recorded zeros in the forecast instead of treating them as byes.
    #[clap(long)]
    pub include_zero: bool,

    /// Forecast for players with no usable history.
    #[clap(long)]
    pub floor: Option<f64>,

    /// JSON object of explicit game states, e.g. `{"4034": "FINISHED"}`.
    /// Players not listed fall back to the live-points heuristic.
    #[clap(long)]
    pub states: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project one roster's score for a week, with a per-starter breakdown.
    Project {
        /// Sleeper roster ID.
        #[clap(long, short)]
        roster: RosterId,

        #[clap(flatten)]
        args: ProjectionArgs,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Project several rosters and sum their totals.
    ///
    /// With no `--roster`, every roster in the week's matchups is projected.
    Tournament {
        /// Sleeper roster ID (repeatable): `-r 3 -r 7`.
        #[clap(long = "roster", short)]
        rosters: Vec<RosterId>,

        #[clap(flatten)]
        args: ProjectionArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Compute rosters on a thread pool.
        #[clap(long)]
        parallel: bool,
    },

    /// Re-read the matchup cache on an interval and stream each projection
    /// snapshot to stdout as one JSON line.
    Watch {
        /// Sleeper roster ID (repeatable); defaults to every roster.
        #[clap(long = "roster", short)]
        rosters: Vec<RosterId>,

        #[clap(flatten)]
        args: ProjectionArgs,

        /// Seconds between refreshes.
        #[clap(long, default_value_t = 60)]
        interval_secs: u64,

        /// Stop after this many refreshes (runs until interrupted otherwise).
        #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_refreshes: Option<u32>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "quantum-gauntlet",
    about = "Playoff score projections from cached Sleeper matchups"
)]
pub struct Gauntlet {
    #[clap(subcommand)]
    pub command: Commands,
}
