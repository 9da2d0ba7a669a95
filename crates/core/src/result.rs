//! Solve result representation.

use crate::placement::{Placement, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a panelization run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    /// Placements for every job copy, in tiling insertion order.
    pub placements: Vec<Placement>,

    /// Bounding-box area of the placed jobs.
    pub area: f64,

    /// Sum of the individual job areas.
    pub used_area: f64,

    /// Utilization ratio (0.0 - 1.0): `used_area / area`.
    pub utilization: f64,

    /// Corner count of the occupied outline (tie-break key).
    pub corners: usize,

    /// Permutations evaluated (exhaustive search).
    pub permutations: Option<u128>,

    /// Size of the permutation space (exhaustive search).
    pub possible_permutations: Option<u128>,

    /// Random trials attempted (random search).
    pub trials: Option<u64>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Strategy used for solving.
    pub strategy: Option<String>,

    /// Whether the search was cancelled by the caller.
    pub cancelled: bool,

    /// Whether the time limit stopped the search.
    pub timed_out: bool,

    /// Whether the exhaustive search covered its whole space.
    pub completed: bool,
}

impl SolveResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of placed job copies.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if at least one job was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Returns true if the search stopped on its own.
    pub fn completed_normally(&self) -> bool {
        !self.cancelled && !self.timed_out
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Returns the maximum x and y over all placements.
    pub fn extents(&self) -> (f64, f64) {
        self.placements.iter().fold((0.0_f64, 0.0_f64), |acc, p| {
            let (x, y) = p.max_corner();
            (acc.0.max(x), acc.1.max(y))
        })
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Returns the fraction of the permutation space that was evaluated.
    pub fn search_coverage(&self) -> Option<f64> {
        match (self.permutations, self.possible_permutations) {
            (Some(done), Some(total)) if total > 0 => Some(done as f64 / total as f64),
            _ => None,
        }
    }
}

/// Summary statistics for a solve result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveSummary {
    /// Total job copies placed.
    pub total_placed: usize,
    /// Bounding-box area.
    pub area: f64,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Outline corner count.
    pub corners: usize,
    /// Permutations or trials evaluated.
    pub evaluated: u128,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&SolveResult> for SolveSummary {
    fn from(result: &SolveResult) -> Self {
        Self {
            total_placed: result.placements.len(),
            area: result.area,
            utilization_percent: result.utilization * 100.0,
            corners: result.corners,
            evaluated: result
                .permutations
                .or(result.trials.map(u128::from))
                .unwrap_or(0),
            time_ms: result.computation_time_ms,
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
