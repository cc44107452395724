use crate::models::{ScoreBreakdown, StrengthSnapshot};
use chrono::Utc;
use roster_core::{RosterId, Week};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Append-only store of weekly strength snapshots, one per (roster, week).
///
/// Re-recording a (roster, week) key overwrites rather than duplicates, so
/// backfills and re-syncs are idempotent. Snapshots are served ordered by
/// ascending week regardless of insertion order.
///
/// This is the engine's only mutable state. Concurrent writers for the same
/// (roster, week) key must be serialized by the host; the tracker does not
/// provide that serialization itself.
#[derive(Debug, Clone, Default)]
pub struct StrengthHistory {
    snapshots: HashMap<RosterId, BTreeMap<Week, StrengthSnapshot>>,
}

impl StrengthHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the snapshot for (roster, week).
    ///
    /// Re-recording a week with unchanged totals leaves the stored snapshot
    /// untouched, timestamp included, so replays are true no-ops.
    pub fn record_snapshot(
        &mut self,
        roster_id: RosterId,
        week: Week,
        starter_total: f64,
        bench_total: f64,
    ) {
        let weeks = self.snapshots.entry(roster_id).or_default();
        if let Some(existing) = weeks.get(&week) {
            if existing.starter_total == starter_total && existing.bench_total == bench_total {
                return;
            }
        }

        let snapshot = StrengthSnapshot {
            roster_id,
            week,
            starter_total,
            bench_total,
            recorded_at: Utc::now(),
        };
        debug!(
            "recording snapshot roster {} week {}: starters {:.2}, bench {:.2}",
            roster_id, week, starter_total, bench_total
        );
        weeks.insert(week, snapshot);
    }

    /// Record the totals of a freshly computed breakdown.
    pub fn record_breakdown(&mut self, roster_id: RosterId, breakdown: &ScoreBreakdown) {
        self.record_snapshot(
            roster_id,
            breakdown.week,
            breakdown.starter_total,
            breakdown.bench_total,
        );
    }

    /// The roster's snapshot series, ordered by ascending week. Empty when
    /// the roster has never been recorded.
    pub fn history(&self, roster_id: RosterId) -> Vec<StrengthSnapshot> {
        self.snapshots
            .get(&roster_id)
            .map(|weeks| weeks.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Most recent snapshot by week number, if any.
    pub fn latest(&self, roster_id: RosterId) -> Option<StrengthSnapshot> {
        self.snapshots
            .get(&roster_id)
            .and_then(|weeks| weeks.values().next_back().cloned())
    }

    /// Number of snapshots recorded for a roster.
    pub fn len(&self, roster_id: RosterId) -> usize {
        self.snapshots.get(&roster_id).map_or(0, |weeks| weeks.len())
    }
}
