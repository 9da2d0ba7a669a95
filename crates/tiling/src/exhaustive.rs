//! Exhaustive branch-and-bound search.
//!
//! Every ordering of the candidates is tried, each candidate in both
//! orientations, at every anchor where it fits. A branch dies as soon as a
//! candidate fits nowhere, so the search never enumerates layouts that cannot
//! hold all jobs.
//!
//! # Permutation accounting
//!
//! The search space for `N` candidates is `2^N * N!`. A complete tiling is
//! counted once, on the first-anchor path only, so tilings reached through
//! alternative anchors are not double counted. A pruned branch with `M`
//! candidates left credits the `2^M * M!` arrangements it skipped, and the
//! rotated branch of a square candidate is credited the same way. A search
//! that runs to completion therefore reports exactly `2^N * N!`.

use crate::candidate::{min_dimension, PlacementCandidate};
use crate::outcome::{ProgressFn, SearchOutcome, StopReason};
use crate::tiling::{improves, AnchorPoint, Tiling};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use u_panel_core::{Orientation, ProgressInfo};

/// Number of orderings and orientations of `n` candidates: `2^n * n!`.
///
/// Saturates at `u128::MAX`.
pub fn permutation_space(n: usize) -> u128 {
    (1..=n as u128).fold(1u128, |acc, k| acc.saturating_mul(2 * k))
}

/// Human estimate of how long a search space takes to cover.
pub fn search_effort(possible: u128) -> &'static str {
    match possible {
        p if p < 10_000 => "this'll take no time at all",
        p if p < 100_000 => "surf the web for a few minutes",
        p if p < 1_000_000 => "take a long lunch",
        p if p < 10_000_000 => "come back tomorrow",
        _ => "don't hold your breath",
    }
}

/// Exhaustive search over a set of candidates, starting from a base tiling.
pub struct ExhaustiveSearch<'a> {
    candidates: &'a [PlacementCandidate],
    base: Tiling,
    time_limit: Option<Duration>,
    cancelled: Arc<AtomicBool>,
    progress_interval: Option<Duration>,
    callback: Option<ProgressFn<'a>>,

    start: Instant,
    last_report: Instant,
    permutations: u128,
    possible: u128,
    best: Option<Tiling>,
    stopped: Option<StopReason>,
}

impl<'a> ExhaustiveSearch<'a> {
    /// Creates a search that places `candidates` on top of `base`.
    pub fn new(candidates: &'a [PlacementCandidate], base: Tiling) -> Self {
        let now = Instant::now();
        Self {
            candidates,
            base,
            time_limit: None,
            cancelled: Arc::new(AtomicBool::new(false)),
            progress_interval: None,
            callback: None,
            start: now,
            last_report: now,
            permutations: 0,
            possible: permutation_space(candidates.len()),
            best: None,
            stopped: None,
        }
    }

    /// Stops the search once `limit` has elapsed.
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    /// Stops the search when `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = flag;
        self
    }

    /// Logs progress every `interval`.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Forwards each progress report to `callback`.
    pub fn with_callback(mut self, callback: ProgressFn<'a>) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Size of the search space.
    pub fn possible_permutations(&self) -> u128 {
        self.possible
    }

    /// Runs the search to completion, timeout or cancellation.
    pub fn run(mut self) -> SearchOutcome {
        self.start = Instant::now();
        self.last_report = self.start;

        let remaining: Vec<usize> = (0..self.candidates.len()).collect();
        let base = self.base.clone();
        self.search(&remaining, base, true);

        let stop = self.stopped.unwrap_or(StopReason::Completed);
        log::debug!(
            "Exhaustive search finished ({:?}): {}/{} permutations in {:.2?}",
            stop,
            self.permutations,
            self.possible,
            self.start.elapsed()
        );

        SearchOutcome {
            best: self.best,
            evaluated: self.permutations,
            possible: Some(self.possible),
            elapsed: self.start.elapsed(),
            stop,
        }
    }

    fn search(&mut self, remaining: &[usize], mut tiling: Tiling, first: bool) {
        if remaining.is_empty() {
            if improves(&tiling, self.best.as_ref()) {
                self.best = Some(tiling);
            }
            if first {
                self.permutations = self.permutations.saturating_add(1);
            }
            return;
        }

        let candidates = self.candidates;
        tiling.remove_inlets(min_dimension(remaining.iter().map(|&i| &candidates[i])));

        for (pos, &idx) in remaining.iter().enumerate() {
            let candidate = candidates[idx];
            let rest: Vec<usize> = remaining[..pos]
                .iter()
                .chain(&remaining[pos + 1..])
                .copied()
                .collect();
            let pruned = permutation_space(rest.len());

            self.branch(&tiling, &rest, &candidate, Orientation::Normal, first, pruned);
            if self.stopped.is_some() {
                return;
            }

            if candidate.is_square() {
                if first {
                    self.permutations = self.permutations.saturating_add(pruned);
                }
            } else {
                self.branch(&tiling, &rest, &candidate, Orientation::Rotated, first, pruned);
                if self.stopped.is_some() {
                    return;
                }
            }

            self.poll();
            if self.stopped.is_some() {
                return;
            }
        }
    }

    fn branch(
        &mut self,
        tiling: &Tiling,
        rest: &[usize],
        candidate: &PlacementCandidate,
        orientation: Orientation,
        first: bool,
        pruned: u128,
    ) {
        let (x_spacing, y_spacing) = tiling.spacing();
        let (width, height, variant) = candidate.footprint(orientation, x_spacing, y_spacing);

        let anchors: Vec<AnchorPoint> = tiling.valid_add_points(width, height);
        if anchors.is_empty() {
            if first {
                self.permutations = self.permutations.saturating_add(pruned);
            }
            return;
        }

        for (i, anchor) in anchors.into_iter().enumerate() {
            let mut next = tiling.clone();
            next.add_job(anchor, width, height, variant);
            self.search(rest, next, first && i == 0);
            if self.stopped.is_some() {
                return;
            }
        }
    }

    fn poll(&mut self) {
        if self.cancelled.load(Ordering::Relaxed) {
            self.stopped = Some(StopReason::Cancelled);
            return;
        }

        let now = Instant::now();
        if let Some(limit) = self.time_limit {
            if now.duration_since(self.start) >= limit {
                self.stopped = Some(StopReason::TimedOut);
                return;
            }
        }

        if let Some(interval) = self.progress_interval {
            if now.duration_since(self.last_report) >= interval {
                self.last_report = now;
                self.report();
            }
        }
    }

    fn report(&self) {
        let (area, utilization) = self
            .best
            .as_ref()
            .map_or((None, 0.0), |t| (Some(t.area()), t.utilization()));
        let percent = if self.possible > 0 {
            100.0 * self.permutations as f64 / self.possible as f64
        } else {
            0.0
        };

        match area {
            Some(area) => log::debug!(
                "{:5.2}% complete | {}/{} permutations checked | smallest area {:.1} / best utilization {:.1}%",
                percent,
                self.permutations,
                self.possible,
                area,
                utilization * 100.0
            ),
            None => log::debug!(
                "{:5.2}% complete | {}/{} permutations checked | no complete tiling yet",
                percent,
                self.permutations,
                self.possible
            ),
        }

        if let Some(callback) = self.callback {
            callback(
                ProgressInfo::new()
                    .with_evaluated(self.permutations, Some(self.possible))
                    .with_best(area, utilization)
                    .with_elapsed(self.start.elapsed().as_millis() as u64)
                    .with_phase("Exhaustive search"),
            );
        }
    }
}
