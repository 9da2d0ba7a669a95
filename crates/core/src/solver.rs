//! Solver trait and configuration.

use crate::job::Job;
use crate::panel::Panel;
use crate::result::SolveResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Full branch-and-bound over every ordering and orientation (optimal if
    /// run to completion, only tractable for small job counts).
    Exhaustive,
    /// Parallel random placement with an exhaustive tail.
    #[default]
    Random,
}

impl Strategy {
    /// Returns a short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exhaustive => "Exhaustive",
            Self::Random => "Random",
        }
    }
}

/// Configuration for a panelization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Search strategy.
    pub strategy: Strategy,

    /// Gutter added to the width of every job.
    pub x_spacing: f64,

    /// Gutter added to the height of every job.
    pub y_spacing: f64,

    /// X offset applied to the final placements.
    pub origin_x: f64,

    /// Y offset applied to the final placements.
    pub origin_y: f64,

    /// Number of jobs searched exhaustively after each random placement.
    pub exhaustive_tail: usize,

    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,

    /// Number of worker threads for random search (0 = auto).
    pub threads: usize,

    /// Base seed for the worker random streams (None = entropy).
    pub seed: Option<u64>,

    /// Place larger jobs first in the candidate list.
    pub sort_largest_first: bool,

    /// How often each random worker reports to the coordinator.
    pub sync_period_ms: u64,

    /// How long the coordinator sleeps between channel drains.
    pub poll_interval_ms: u64,

    /// How often exhaustive search logs its progress.
    pub progress_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            x_spacing: 0.0,
            y_spacing: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            exhaustive_tail: 2,
            time_limit_ms: 0,
            threads: 0,
            seed: None,
            sort_largest_first: true,
            sync_period_ms: 3000,
            poll_interval_ms: 250,
            progress_interval_ms: 3000,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the horizontal and vertical spacing between jobs.
    pub fn with_spacing(mut self, x_spacing: f64, y_spacing: f64) -> Self {
        self.x_spacing = x_spacing;
        self.y_spacing = y_spacing;
        self
    }

    /// Sets the origin offset of the final placements.
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Sets the exhaustive tail size for random search.
    pub fn with_exhaustive_tail(mut self, jobs: usize) -> Self {
        self.exhaustive_tail = jobs;
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the worker thread count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables largest-first candidate ordering.
    pub fn with_sort_largest_first(mut self, enabled: bool) -> Self {
        self.sort_largest_first = enabled;
        self
    }

    /// Sets the worker report period in milliseconds.
    pub fn with_sync_period(mut self, ms: u64) -> Self {
        self.sync_period_ms = ms.max(1);
        self
    }

    /// Sets the coordinator poll interval in milliseconds.
    pub fn with_poll_interval(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms.max(1);
        self
    }

    /// Sets the exhaustive progress cadence in milliseconds.
    pub fn with_progress_interval(mut self, ms: u64) -> Self {
        self.progress_interval_ms = ms.max(1);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("x_spacing", self.x_spacing),
            ("y_spacing", self.y_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::ConfigError(format!(
                    "{name} must be a non-negative number (got {value})"
                )));
            }
        }

        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(Error::ConfigError("origin must be finite".into()));
        }

        Ok(())
    }
}

/// Progress callback for long-running searches.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information during a search.
#[derive(Debug, Clone, Default)]
pub struct ProgressInfo {
    /// Permutations (exhaustive) or trials (random) evaluated so far.
    pub evaluated: u128,
    /// Size of the permutation space, if known.
    pub possible: Option<u128>,
    /// Bounding-box area of the best tiling so far.
    pub best_area: Option<f64>,
    /// Utilization of the best tiling so far (0.0 to 1.0).
    pub utilization: f64,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Current phase description.
    pub phase: String,
    /// Whether the search is still running.
    pub running: bool,
}

impl ProgressInfo {
    /// Creates a new progress info with default values.
    pub fn new() -> Self {
        Self {
            running: true,
            ..Default::default()
        }
    }

    /// Sets the evaluated count and the size of the search space.
    pub fn with_evaluated(mut self, evaluated: u128, possible: Option<u128>) -> Self {
        self.evaluated = evaluated;
        self.possible = possible;
        self
    }

    /// Sets the best area and utilization.
    pub fn with_best(mut self, area: Option<f64>, utilization: f64) -> Self {
        self.best_area = area;
        self.utilization = utilization;
        self
    }

    /// Sets the elapsed time.
    pub fn with_elapsed(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Sets the phase description.
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    /// Marks the search as finished.
    pub fn finished(mut self) -> Self {
        self.running = false;
        self
    }

    /// Fraction of the search space covered (0.0 to 1.0), if known.
    pub fn progress_percent(&self) -> Option<f64> {
        match self.possible {
            Some(total) if total > 0 => Some(self.evaluated as f64 / total as f64),
            _ => None,
        }
    }
}

/// Trait for panelization solvers.
pub trait Solver {
    /// Places every copy of every job on the panel.
    fn solve(&self, jobs: &[Job], panel: &Panel) -> Result<SolveResult>;

    /// Solves with a progress callback.
    fn solve_with_progress(
        &self,
        jobs: &[Job],
        panel: &Panel,
        callback: ProgressCallback,
    ) -> Result<SolveResult>;

    /// Cancels an ongoing solve; the best placement found so far is returned.
    fn cancel(&self);
}
