//! Randomized tiling search.
//!
//! Each trial shuffles the candidates, places all but the last few at a
//! random anchor in a random orientation, and hands the remaining tail to an
//! [`ExhaustiveSearch`]. A worker repeats trials until it is told to stop,
//! reporting to its coordinator once per synchronization period.

use crate::candidate::{min_dimension, PlacementCandidate};
use crate::exhaustive::ExhaustiveSearch;
use crate::tiling::{improves, Tiling};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};
use u_panel_core::Orientation;

/// Message sent from a worker to the coordinator.
#[derive(Debug, Clone)]
pub struct WorkerReport {
    /// Index of the reporting worker.
    pub worker: usize,
    /// Trials run since the previous report.
    pub trials: u64,
    /// The worker's best tiling, only when it improved since the previous report.
    pub tiling: Option<Tiling>,
}

/// A single random-search worker.
pub struct RandomSearch {
    candidates: Arc<[PlacementCandidate]>,
    base: Tiling,
    exhaustive_tail: usize,
    rng: StdRng,
    sync_period: Duration,
    cancelled: Arc<AtomicBool>,
    best: Option<Tiling>,
    trials: u64,
}

impl RandomSearch {
    /// Creates a worker over `candidates` starting from `base`.
    pub fn new(
        candidates: Arc<[PlacementCandidate]>,
        base: Tiling,
        exhaustive_tail: usize,
        rng: StdRng,
    ) -> Self {
        Self {
            candidates,
            base,
            exhaustive_tail,
            rng,
            sync_period: Duration::from_secs(3),
            cancelled: Arc::new(AtomicBool::new(false)),
            best: None,
            trials: 0,
        }
    }

    /// Sets the report period, jittered by a few percent so workers do not
    /// all report at once.
    pub fn with_sync_period(mut self, period: Duration) -> Self {
        let jitter = self.rng.gen_range(-0.5..0.5) / 15.0;
        self.sync_period = period.mul_f64(1.0 + jitter);
        self
    }

    /// Stops the worker (and its exhaustive tails) when `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = flag;
        self
    }

    /// Best tiling found so far.
    pub fn best(&self) -> Option<&Tiling> {
        self.best.as_ref()
    }

    /// Trials run so far.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Effective report period after jitter.
    pub fn sync_period(&self) -> Duration {
        self.sync_period
    }

    /// Runs one trial. Returns true if it produced a new best tiling.
    pub fn trial(&mut self) -> bool {
        self.trials += 1;

        let count = self.candidates.len();
        let random_count = count.saturating_sub(self.exhaustive_tail);

        let mut order: Vec<usize> = (0..count).collect();
        order.shuffle(&mut self.rng);

        let mut tiling = self.base.clone();
        let (x_spacing, y_spacing) = tiling.spacing();

        for pos in 0..random_count {
            tiling.remove_inlets(min_dimension(
                order[pos..].iter().map(|&i| &self.candidates[i]),
            ));

            let candidate = self.candidates[order[pos]];
            let orientation = if self.rng.gen_bool(0.5) {
                Orientation::Normal
            } else {
                Orientation::Rotated
            };
            let (width, height, variant) = candidate.footprint(orientation, x_spacing, y_spacing);

            let anchors = tiling.valid_add_points(width, height);
            let Some(&anchor) = anchors.choose(&mut self.rng) else {
                return false;
            };
            tiling.add_job(anchor, width, height, variant);
        }

        let completed = if random_count == count {
            Some(tiling)
        } else {
            let tail: Vec<PlacementCandidate> = order[random_count..]
                .iter()
                .map(|&i| self.candidates[i])
                .collect();
            ExhaustiveSearch::new(&tail, tiling)
                .with_cancel_flag(Arc::clone(&self.cancelled))
                .run()
                .best
        };

        match completed {
            Some(tiling) if improves(&tiling, self.best.as_ref()) => {
                self.best = Some(tiling);
                true
            }
            _ => false,
        }
    }

    /// Runs trials until cancelled, reporting to `tx` once per sync period
    /// and once more on exit.
    ///
    /// Returns early if the coordinator hangs up.
    pub fn run(mut self, worker: usize, tx: &Sender<WorkerReport>) {
        let mut last_sync = Instant::now();
        let mut since_sync = 0u64;
        let mut improved = false;

        log::debug!(
            "Random worker {} started (sync every {:.2?})",
            worker,
            self.sync_period
        );

        while !self.cancelled.load(Ordering::Relaxed) {
            improved |= self.trial();
            since_sync += 1;

            if last_sync.elapsed() >= self.sync_period {
                last_sync = Instant::now();
                let report = WorkerReport {
                    worker,
                    trials: since_sync,
                    tiling: if improved { self.best.clone() } else { None },
                };
                since_sync = 0;
                improved = false;

                if tx.send(report).is_err() {
                    log::debug!("Random worker {} lost its coordinator", worker);
                    return;
                }
            }
        }

        let report = WorkerReport {
            worker,
            trials: since_sync,
            tiling: if improved { self.best.take() } else { None },
        };
        if tx.send(report).is_err() {
            log::debug!("Random worker {} lost its coordinator", worker);
        }

        log::debug!("Random worker {} stopped after {} trials", worker, self.trials);
    }
}
