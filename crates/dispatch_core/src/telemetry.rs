//! Telemetry: dispatch counters shared by the matcher and the trip lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Lock-free counters. Share one instance through an `Arc` to aggregate across components.
#[derive(Debug, Default)]
pub struct DispatchTelemetry {
    matched: AtomicU64,
    unmatched: AtomicU64,
    commit_conflicts: AtomicU64,
    released: AtomicU64,
}

/// Counter values at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TelemetrySnapshot {
    pub matched: u64,
    pub unmatched: u64,
    /// Commits lost to a concurrent matcher that took the same vehicle.
    pub commit_conflicts: u64,
    pub released: u64,
}

impl DispatchTelemetry {
    pub(crate) fn record_matched(&self) {
        self.matched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_unmatched(&self) {
        self.unmatched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_commit_conflict(&self) {
        self.commit_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_released(&self) {
        self.released.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            matched: self.matched.load(Ordering::Relaxed),
            unmatched: self.unmatched.load(Ordering::Relaxed),
            commit_conflicts: self.commit_conflicts.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
        }
    }
}

impl TelemetrySnapshot {
    /// Vehicles currently out on a trip, as seen by these counters.
    pub fn active_assignments(&self) -> u64 {
        self.matched.saturating_sub(self.released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_events() {
        let telemetry = DispatchTelemetry::default();
        telemetry.record_matched();
        telemetry.record_matched();
        telemetry.record_unmatched();
        telemetry.record_commit_conflict();
        telemetry.record_released();

        let snapshot = telemetry.snapshot();
        assert_eq!(
            snapshot,
            TelemetrySnapshot {
                matched: 2,
                unmatched: 1,
                commit_conflicts: 1,
                released: 1,
            }
        );
        assert_eq!(snapshot.active_assignments(), 1);
    }
}
