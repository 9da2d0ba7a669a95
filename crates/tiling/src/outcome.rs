//! Search outcomes shared by the exhaustive and random searches.

use crate::tiling::Tiling;
use std::time::Duration;
use u_panel_core::ProgressInfo;

/// Progress hook handed down to the searches.
pub type ProgressFn<'a> = &'a (dyn Fn(ProgressInfo) + Send + Sync);

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The whole search space was covered.
    Completed,
    /// The time limit expired.
    TimedOut,
    /// The caller cancelled the search.
    Cancelled,
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best complete tiling found, if any.
    pub best: Option<Tiling>,
    /// Permutations (exhaustive) or trials (random) evaluated.
    pub evaluated: u128,
    /// Size of the permutation space, when known.
    pub possible: Option<u128>,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Why the search stopped.
    pub stop: StopReason,
}

impl SearchOutcome {
    /// Returns true if the search ran to completion.
    pub fn is_complete(&self) -> bool {
        self.stop == StopReason::Completed
    }

    /// Builds a progress snapshot from this outcome.
    pub fn progress(&self, phase: &str) -> ProgressInfo {
        let (area, utilization) = self
            .best
            .as_ref()
            .map_or((None, 0.0), |t| (Some(t.area()), t.utilization()));

        ProgressInfo::new()
            .with_evaluated(self.evaluated, self.possible)
            .with_best(area, utilization)
            .with_elapsed(self.elapsed.as_millis() as u64)
            .with_phase(phase)
            .finished()
    }
}
