//! Watch command: periodic refresh publishing projection snapshots.
//!
//! Each tick re-reads the matchup cache (an external fetcher keeps it
//! current), builds a new immutable snapshot and publishes it on a
//! [`SnapshotHub`]. A subscriber task prints every snapshot it receives as
//! one JSON line, the same way a dashboard push loop would forward it.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    cli::ProjectionArgs,
    snapshot::{build_snapshot, ProjectionSnapshot, SnapshotHub, SnapshotSubscriber},
    Result, RosterId,
};

use super::common::{load_matchups, ProjectionInputs};

/// Load the cache and build one snapshot. Runs on the blocking pool.
fn refresh_once(inputs: &ProjectionInputs, rosters: &[RosterId]) -> Result<ProjectionSnapshot> {
    let matchups = load_matchups(inputs)?;
    let states = inputs.game_states(&matchups.current);
    build_snapshot(
        inputs.week,
        rosters,
        &matchups.history,
        &matchups.current,
        &states,
        &inputs.params,
    )
}

/// Forward every published snapshot to stdout until the hub goes away.
fn spawn_printer(mut subscriber: SnapshotSubscriber) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(snapshot) = subscriber.next().await {
            match serde_json::to_string(snapshot.as_ref()) {
                Ok(line) => println!("{}", line), // tarpaulin::skip
                Err(e) => warn!(error = %e, "Failed to serialize snapshot"),
            }
        }
    })
}

/// Run the refresh loop, publishing to `hub`. Returns after
/// `max_refreshes` ticks (immediately for `Some(0)`), or never when it is
/// `None`.
pub async fn run_refresh_loop(
    hub: &SnapshotHub,
    inputs: Arc<ProjectionInputs>,
    rosters: Arc<Vec<RosterId>>,
    interval: Duration,
    max_refreshes: Option<u32>,
) {
    let mut ticker = tokio::time::interval(interval);
    let mut refreshes = 0u32;

    loop {
        if max_refreshes.is_some_and(|max| refreshes >= max) {
            break;
        }
        ticker.tick().await;

        let task_inputs = Arc::clone(&inputs);
        let task_rosters = Arc::clone(&rosters);
        let result =
            tokio::task::spawn_blocking(move || refresh_once(&task_inputs, &task_rosters)).await;

        match result {
            Ok(Ok(snapshot)) => {
                let published = hub.publish(snapshot);
                info!(
                    sequence = published.sequence,
                    total = published.total,
                    "Snapshot published"
                );
            }
            // The previous snapshot stays current
            Ok(Err(e)) => warn!(error = %e, "Projection refresh failed"),
            Err(e) => warn!(error = %e, "Projection refresh task aborted"),
        }

        refreshes += 1;
    }
}

/// Handle the watch command
pub async fn handle_watch(
    rosters: Vec<RosterId>,
    args: ProjectionArgs,
    interval_secs: u64,
    max_refreshes: Option<u32>,
) -> Result<()> {
    let inputs = Arc::new(ProjectionInputs::from_args(args)?);
    let interval = Duration::from_secs(interval_secs.max(1));

    info!(
        week = %inputs.week,
        interval_secs = interval.as_secs(),
        "Watching matchup cache"
    );

    let hub = SnapshotHub::new();
    let printer = spawn_printer(hub.subscribe());

    run_refresh_loop(&hub, inputs, Arc::new(rosters), interval, max_refreshes).await;

    // Dropping the hub closes the channel; the printer drains and exits
    drop(hub);
    if let Err(e) = printer.await {
        warn!(error = %e, "Snapshot printer task failed");
    }

    Ok(())
}
