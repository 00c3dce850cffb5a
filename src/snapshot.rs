//! Immutable projection snapshots and the channel that publishes them.
//!
//! Each refresh cycle builds a fresh [`ProjectionSnapshot`] and hands it to
//! the [`SnapshotHub`]. Subscribers get notified and read the newest `Arc`;
//! a reader still holding an older snapshot keeps seeing exactly that one.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    cli::types::{RosterId, Week},
    config::ProjectionParams,
    projection::{compute_tournament_projection, GameStateProvider, RosterProjection},
    sleeper::types::{roster_ids, MatchupsByWeek, WeeklyMatchupRecord},
    Result,
};


/// One refresh cycle's results. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSnapshot {
    /// Increases by one per publish on a hub
    pub sequence: u64,
    /// Unix seconds
    pub generated_at: u64,
    pub week: Week,
    pub total: f64,
    pub rosters: Vec<RosterProjection>,
}

/// Latest-value broadcast of projection snapshots.
///
/// Backed by a `watch` channel: publishing replaces the current value and
/// wakes every subscriber; slow subscribers skip straight to the newest
/// snapshot instead of queueing.
#[derive(Debug)]
pub struct SnapshotHub {
    tx: watch::Sender<Option<Arc<ProjectionSnapshot>>>,
    sequence: AtomicU64,
}

impl Default for SnapshotHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHub {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx,
            sequence: AtomicU64::new(0),
        }
    }

    /// Publish a snapshot, stamping it with the next sequence number.
    pub fn publish(&self, mut snapshot: ProjectionSnapshot) -> Arc<ProjectionSnapshot> {
        snapshot.sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let snapshot = Arc::new(snapshot);

        debug!(
            sequence = snapshot.sequence,
            week = %snapshot.week,
            rosters = snapshot.rosters.len(),
            subscribers = self.tx.receiver_count(),
            "Publishing projection snapshot"
        );
        self.tx.send_replace(Some(Arc::clone(&snapshot)));
        snapshot
    }

    /// Most recently published snapshot, if any.
    pub fn latest(&self) -> Option<Arc<ProjectionSnapshot>> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> SnapshotSubscriber {
        SnapshotSubscriber {
            rx: self.tx.subscribe(),
        }
    }
}

/// Receiving end handed to a dashboard push loop or any other listener.
#[derive(Debug, Clone)]
pub struct SnapshotSubscriber {
    rx: watch::Receiver<Option<Arc<ProjectionSnapshot>>>,
}

impl SnapshotSubscriber {
    /// Current snapshot without waiting. A new subscriber sees whatever was
    /// last published, so it can render immediately on connect.
    pub fn current(&self) -> Option<Arc<ProjectionSnapshot>> {
        self.rx.borrow().clone()
    }

    /// Wait for the next publish. Returns `None` once the hub is dropped.
    pub async fn next(&mut self) -> Option<Arc<ProjectionSnapshot>> {
        loop {
            self.rx.changed().await.ok()?;
            let latest = self.rx.borrow_and_update().clone();
            if let Some(snapshot) = latest {
                return Some(snapshot);
            }
        }
    }
}

/// Project `rosters` for `week` and wrap the result in an unpublished
/// snapshot (sequence 0). An empty `rosters` slice means every roster in
/// `current`.
pub fn build_snapshot<G>(
    week: Week,
    rosters: &[RosterId],
    history: &MatchupsByWeek,
    current: &[WeeklyMatchupRecord],
    game_state_of: &G,
    params: &ProjectionParams,
) -> Result<ProjectionSnapshot>
where
    G: GameStateProvider + ?Sized,
{
    let rosters = if rosters.is_empty() {
        roster_ids(current)
    } else {
        rosters.to_vec()
    };

    let projection =
        compute_tournament_projection(&rosters, week, history, current, game_state_of, params);

    info!(
        week = %week,
        rosters = projection.rosters.len(),
        total = projection.total,
        "Projection snapshot built"
    );

    Ok(ProjectionSnapshot {
        sequence: 0,
        generated_at: SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
        week,
        total: projection.total,
        rosters: projection.rosters,
    })
}
