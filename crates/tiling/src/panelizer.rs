//! Panelization solver: validates the job list, runs the configured search
//! and turns the winning tiling into placements.

use crate::candidate::{build_candidates, max_utilization, PlacementCandidate};
use crate::coordinator::SearchCoordinator;
use crate::exhaustive::{permutation_space, search_effort, ExhaustiveSearch};
use crate::outcome::{ProgressFn, SearchOutcome, StopReason};
use crate::tiling::Tiling;
use u_panel_core::solver::{Config, ProgressCallback, Solver, Strategy};
use u_panel_core::{Error, Job, Panel, Placement, Result, SolveResult};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Panel tiling solver.
pub struct Panelizer {
    config: Config,
    cancelled: Arc<AtomicBool>,
}

impl Panelizer {
    /// Creates a new panelizer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates a panelizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates the inputs and builds the ordered candidate list.
    fn prepare(&self, jobs: &[Job], panel: &Panel) -> Result<Vec<PlacementCandidate>> {
        self.config.validate()?;
        panel.validate()?;

        if jobs.is_empty() {
            return Err(Error::InvalidJob("no jobs to place".into()));
        }

        for job in jobs {
            job.validate()?;
            if !panel.accepts(job) {
                return Err(Error::InvalidJob(format!(
                    "job '{}' ({}x{}) does not fit the {}x{} panel in either orientation",
                    job.id(),
                    job.width(),
                    job.height(),
                    panel.width(),
                    panel.height()
                )));
            }
        }

        Ok(build_candidates(jobs, self.config.sort_largest_first))
    }

    fn time_limit(&self) -> Option<Duration> {
        (self.config.time_limit_ms > 0).then(|| Duration::from_millis(self.config.time_limit_ms))
    }

    fn exhaustive(
        &self,
        candidates: &[PlacementCandidate],
        base: Tiling,
        callback: Option<ProgressFn<'_>>,
    ) -> SearchOutcome {
        let possible = permutation_space(candidates.len());
        log::info!(
            "Starting placement using exhaustive search: {} possible permutations ({})",
            possible,
            search_effort(possible)
        );

        let mut search = ExhaustiveSearch::new(candidates, base)
            .with_time_limit(self.time_limit())
            .with_cancel_flag(Arc::clone(&self.cancelled))
            .with_progress_interval(Duration::from_millis(self.config.progress_interval_ms));
        if let Some(callback) = callback {
            search = search.with_callback(callback);
        }

        search.run()
    }

    fn random(
        &self,
        candidates: Vec<PlacementCandidate>,
        base: Tiling,
        callback: Option<ProgressFn<'_>>,
    ) -> Result<SearchOutcome> {
        log::info!("Starting random placement trials");

        SearchCoordinator::new(&self.config, Arc::clone(&self.cancelled)).run(
            candidates.into(),
            base,
            callback,
        )
    }

    fn run(
        &self,
        jobs: &[Job],
        panel: &Panel,
        callback: Option<ProgressFn<'_>>,
    ) -> Result<SolveResult> {
        let start = Instant::now();

        // Reset cancellation flag
        self.cancelled.store(false, Ordering::Relaxed);

        let candidates = self.prepare(jobs, panel)?;
        let (x_spacing, y_spacing) = (self.config.x_spacing, self.config.y_spacing);
        log::info!(
            "Placing {} job copies on a {}x{} panel; estimated maximum possible utilization is {:.1}%",
            candidates.len(),
            panel.width(),
            panel.height(),
            max_utilization(&candidates, x_spacing, y_spacing) * 100.0
        );

        let base = Tiling::new(panel.width(), panel.height(), x_spacing, y_spacing);
        let outcome = match self.config.strategy {
            Strategy::Exhaustive => self.exhaustive(&candidates, base, callback),
            Strategy::Random => self.random(candidates, base, callback)?,
        };

        if let Some(callback) = callback {
            callback(outcome.progress(self.config.strategy.name()));
        }

        self.build_result(jobs, panel, outcome, start)
    }

    /// Converts the winning tiling into placements.
    fn build_result(
        &self,
        jobs: &[Job],
        panel: &Panel,
        outcome: SearchOutcome,
        start: Instant,
    ) -> Result<SolveResult> {
        let Some(best) = outcome.best else {
            log::warn!(
                "No tiling found after {} evaluations ({:?})",
                outcome.evaluated,
                outcome.stop
            );
            return Err(Error::PanelTooSmall {
                width: panel.width(),
                height: panel.height(),
            });
        };

        let mut instances = vec![0usize; jobs.len()];
        let mut placements = Vec::with_capacity(best.placed_count());
        for placed in best.canonicalize(self.config.origin_x, self.config.origin_y) {
            let job = jobs.get(placed.variant.job).ok_or_else(|| {
                Error::Internal(format!("tiling references unknown job {}", placed.variant.job))
            })?;
            let instance = instances[placed.variant.job];
            instances[placed.variant.job] += 1;

            placements.push(
                Placement::new(
                    job.id().clone(),
                    instance,
                    placed.x,
                    placed.y,
                    placed.width,
                    placed.height,
                )
                .with_orientation(placed.variant.orientation),
            );
        }

        let score = best.score();
        let mut result = SolveResult::new().with_strategy(self.config.strategy.name());
        result.placements = placements;
        result.area = score.area;
        result.used_area = best.used_area();
        result.utilization = best.utilization();
        result.corners = score.corners;
        match self.config.strategy {
            Strategy::Exhaustive => {
                result.permutations = Some(outcome.evaluated);
                result.possible_permutations = outcome.possible;
            }
            Strategy::Random => {
                result.trials = Some(u64::try_from(outcome.evaluated).unwrap_or(u64::MAX));
            }
        }
        result.cancelled = outcome.stop == StopReason::Cancelled;
        result.timed_out = outcome.stop == StopReason::TimedOut;
        result.completed = outcome.stop == StopReason::Completed;
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "Placed {} job copies: area {:.2}, utilization {}, {} corners",
            result.placed_count(),
            result.area,
            result.utilization_percent(),
            result.corners
        );

        Ok(result)
    }

    /// Returns a handle that cancels the running search when set.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }
}

impl Solver for Panelizer {
    fn solve(&self, jobs: &[Job], panel: &Panel) -> Result<SolveResult> {
        self.run(jobs, panel, None)
    }

    fn solve_with_progress(
        &self,
        jobs: &[Job],
        panel: &Panel,
        callback: ProgressCallback,
    ) -> Result<SolveResult> {
        self.run(jobs, panel, Some(&*callback))
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
