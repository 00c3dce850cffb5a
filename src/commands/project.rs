//! Single-roster projection command implementation

use crate::{
    cli::ProjectionArgs,
    projection::{compute_roster_projection, RosterProjection},
    Result, RosterId,
};

use super::common::{format_roster_table, load_matchups, ProjectionInputs};

/// Load inputs and project one roster.
pub fn run_project(
    roster: RosterId,
    args: ProjectionArgs,
) -> Result<(ProjectionInputs, RosterProjection)> {
    let inputs = ProjectionInputs::from_args(args)?;
    let matchups = load_matchups(&inputs)?;
    let states = inputs.game_states(&matchups.current);

    let projection = compute_roster_projection(
        roster,
        inputs.week,
        &matchups.history,
        &matchups.current,
        &states,
        &inputs.params,
    );
    Ok((inputs, projection))
}

/// Handle the project command
pub fn handle_project(roster: RosterId, args: ProjectionArgs, as_json: bool) -> Result<()> {
    let (inputs, projection) = run_project(roster, args)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&projection)?); // tarpaulin::skip
    } else {
        if projection.starters_breakdown.is_empty() {
            // tarpaulin::skip
            println!("Roster {} has no starters in week {}.", roster, inputs.week);
        }
        println!("{}", format_roster_table(inputs.week, &projection)); // tarpaulin::skip
    }

    Ok(())
}
