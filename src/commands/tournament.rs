//! Multi-roster projection command implementation

use crate::{
    cli::ProjectionArgs,
    projection::{
        compute_tournament_projection, compute_tournament_projection_par, TournamentProjection,
    },
    sleeper::types::roster_ids,
    Result, RosterId,
};

use super::common::{load_matchups, ProjectionInputs};

/// Load inputs and project each roster (all rosters of the week when
/// `rosters` is empty).
pub fn run_tournament(
    rosters: Vec<RosterId>,
    args: ProjectionArgs,
    parallel: bool,
) -> Result<(ProjectionInputs, TournamentProjection)> {
    let inputs = ProjectionInputs::from_args(args)?;
    let matchups = load_matchups(&inputs)?;
    let states = inputs.game_states(&matchups.current);

    let rosters = if rosters.is_empty() {
        roster_ids(&matchups.current)
    } else {
        rosters
    };

    let projection = if parallel {
        compute_tournament_projection_par(
            &rosters,
            inputs.week,
            &matchups.history,
            &matchups.current,
            &states,
            &inputs.params,
        )
    } else {
        compute_tournament_projection(
            &rosters,
            inputs.week,
            &matchups.history,
            &matchups.current,
            &states,
            &inputs.params,
        )
    };
    Ok((inputs, projection))
}

/// Handle the tournament command
pub fn handle_tournament(
    rosters: Vec<RosterId>,
    args: ProjectionArgs,
    as_json: bool,
    parallel: bool,
) -> Result<()> {
    let (inputs, projection) = run_tournament(rosters, args, parallel)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&projection)?); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("Tournament projection for Week {}", inputs.week);
    println!();
    println!("{:<8} {:>9} {:>9}", "Roster", "Starters", "Projected");
    println!("{:<8} {:>9} {:>9}", "------", "--------", "---------");
    for roster in &projection.rosters {
        println!(
            "{:<8} {:>9} {:>9.2}",
            roster.roster_id,
            roster.starters_breakdown.len(),
            roster.projected_total
        );
    }
    println!();
    println!("Total: {:.2}", projection.total);

    Ok(())
}
