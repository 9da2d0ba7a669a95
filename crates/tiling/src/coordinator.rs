//! Coordinator for parallel random search.
//!
//! Independent [`RandomSearch`] workers run on a dedicated rayon pool and
//! send [`WorkerReport`]s over a channel. The coordinator wakes up every poll
//! interval, drains the channel, keeps the best tiling it has seen and stops
//! the workers once the caller cancels or the time limit expires.

use crate::candidate::PlacementCandidate;
use crate::outcome::{ProgressFn, SearchOutcome, StopReason};
use crate::random::{RandomSearch, WorkerReport};
use crate::tiling::{improves, Tiling};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use u_panel_core::{Config, Error, ProgressInfo, Result};

/// Runs random-search workers and merges their results.
pub struct SearchCoordinator {
    workers: usize,
    exhaustive_tail: usize,
    time_limit: Option<Duration>,
    sync_period: Duration,
    poll_interval: Duration,
    seed: Option<u64>,
    cancelled: Arc<AtomicBool>,
}

/// Best tiling and trial count accumulated from worker reports.
#[derive(Debug, Default)]
struct Tally {
    best: Option<Tiling>,
    trials: u64,
}

impl Tally {
    /// Merges one report. Returns true if the best tiling improved.
    fn absorb(&mut self, report: WorkerReport) -> bool {
        self.trials += report.trials;
        match report.tiling {
            Some(tiling) if improves(&tiling, self.best.as_ref()) => {
                log::trace!("Worker {} improved the best tiling", report.worker);
                self.best = Some(tiling);
                true
            }
            _ => false,
        }
    }

    /// Drains pending reports without blocking.
    ///
    /// Returns `(improved, disconnected)`.
    fn drain(&mut self, rx: &Receiver<WorkerReport>) -> (bool, bool) {
        let mut improved = false;
        loop {
            match rx.try_recv() {
                Ok(report) => improved |= self.absorb(report),
                Err(TryRecvError::Empty) => return (improved, false),
                Err(TryRecvError::Disconnected) => return (improved, true),
            }
        }
    }
}

impl SearchCoordinator {
    /// Creates a coordinator from the run configuration.
    ///
    /// `cancelled` is the caller's cancellation flag; it is only read.
    pub fn new(config: &Config, cancelled: Arc<AtomicBool>) -> Self {
        let workers = if config.threads > 0 {
            config.threads
        } else {
            thread::available_parallelism().map_or(1, |n| n.get())
        };

        Self {
            workers,
            exhaustive_tail: config.exhaustive_tail,
            time_limit: (config.time_limit_ms > 0)
                .then(|| Duration::from_millis(config.time_limit_ms)),
            sync_period: Duration::from_millis(config.sync_period_ms.max(1)),
            poll_interval: Duration::from_millis(config.poll_interval_ms.max(1)),
            seed: config.seed,
            cancelled,
        }
    }

    /// Number of workers that will be started.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Runs the workers until cancellation or timeout and returns the best
    /// tiling any of them reported.
    pub fn run(
        &self,
        candidates: Arc<[PlacementCandidate]>,
        base: Tiling,
        callback: Option<ProgressFn<'_>>,
    ) -> Result<SearchOutcome> {
        let start = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("u-panel-random-{i}"))
            .build()
            .map_err(|e| Error::Internal(format!("failed to build worker pool: {e}")))?;

        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel::<WorkerReport>();

        for worker in 0..self.workers {
            let rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
                None => StdRng::from_entropy(),
            };
            let search = RandomSearch::new(
                Arc::clone(&candidates),
                base.clone(),
                self.exhaustive_tail,
                rng,
            )
            .with_sync_period(self.sync_period)
            .with_cancel_flag(Arc::clone(&stop));

            let tx = tx.clone();
            pool.spawn(move || search.run(worker, &tx));
        }
        drop(tx);

        log::info!(
            "Random search started with {} workers (exhaustive tail {})",
            self.workers,
            self.exhaustive_tail
        );

        let mut tally = Tally::default();
        let stop_reason = loop {
            thread::sleep(self.poll_interval);

            let (improved, disconnected) = tally.drain(&rx);
            if improved {
                self.report_improvement(&tally, start, callback);
            }

            if self.cancelled.load(Ordering::Relaxed) {
                break StopReason::Cancelled;
            }
            if self.time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                break StopReason::TimedOut;
            }
            if disconnected {
                log::warn!("All random workers exited before the search was stopped");
                break StopReason::Completed;
            }
        };

        stop.store(true, Ordering::Relaxed);

        // Workers finish their current trial and send a final report.
        let mut improved = false;
        for report in rx.iter() {
            improved |= tally.absorb(report);
        }
        if improved {
            self.report_improvement(&tally, start, callback);
        }

        log::info!(
            "Random search stopped ({:?}) after {} trials in {:.1}s",
            stop_reason,
            tally.trials,
            start.elapsed().as_secs_f64()
        );

        Ok(SearchOutcome {
            best: tally.best,
            evaluated: u128::from(tally.trials),
            possible: None,
            elapsed: start.elapsed(),
            stop: stop_reason,
        })
    }

    fn report_improvement(&self, tally: &Tally, start: Instant, callback: Option<ProgressFn<'_>>) {
        let Some(best) = tally.best.as_ref() else {
            return;
        };
        let elapsed = start.elapsed();

        log::info!(
            "Tested {} placements over {:.0}s. Best tiling at {:.2}% usage",
            tally.trials,
            elapsed.as_secs_f64(),
            best.utilization() * 100.0
        );

        if let Some(callback) = callback {
            callback(
                ProgressInfo::new()
                    .with_evaluated(u128::from(tally.trials), None)
                    .with_best(Some(best.area()), best.utilization())
                    .with_elapsed(elapsed.as_millis() as u64)
                    .with_phase("Random search"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::JobVariant;
    use crate::tiling::AnchorPoint;
    use approx::assert_relative_eq;
    use std::sync::Mutex;

    fn candidates(dims: &[(f64, f64)]) -> Arc<[PlacementCandidate]> {
        dims.iter()
            .enumerate()
            .map(|(i, &(w, h))| PlacementCandidate::new(i, w, h))
            .collect()
    }

    fn quick_config() -> Config {
        Config::new()
            .with_threads(2)
            .with_seed(7)
            .with_sync_period(10)
            .with_poll_interval(10)
            .with_time_limit(150)
    }

    fn tiling_of(rects: &[(f64, f64, f64, f64)]) -> Tiling {
        let mut tiling = Tiling::new(4.0, 4.0, 0.0, 0.0);
        for (job, &(x, y, w, h)) in rects.iter().enumerate() {
            tiling.add_job(AnchorPoint::new(x, y), w, h, JobVariant::normal(job));
        }
        tiling
    }

    fn report(worker: usize, trials: u64, tiling: Option<Tiling>) -> WorkerReport {
        WorkerReport {
            worker,
            trials,
            tiling,
        }
    }

    #[test]
    fn test_tally_breaks_area_ties_on_corners() {
        // Both fill a 2x2 bounding box: the L-shape has 6 corners, the square 4.
        let stepped = tiling_of(&[(0.0, 0.0, 2.0, 1.0), (0.0, 1.0, 1.0, 1.0)]);
        let square = tiling_of(&[(0.0, 0.0, 2.0, 1.0), (0.0, 1.0, 2.0, 1.0)]);
        assert_relative_eq!(stepped.area(), square.area());

        let mut tally = Tally::default();
        assert!(tally.absorb(report(0, 5, Some(square))));
        assert!(!tally.absorb(report(1, 3, Some(stepped.clone()))));
        assert_eq!(tally.best.as_ref().map(Tiling::corners), Some(4));

        let mut tally = Tally::default();
        assert!(tally.absorb(report(1, 3, Some(stepped))));
        let square = tiling_of(&[(0.0, 0.0, 2.0, 1.0), (0.0, 1.0, 2.0, 1.0)]);
        assert!(tally.absorb(report(0, 5, Some(square))));
        assert_eq!(tally.best.as_ref().map(Tiling::corners), Some(4));

        assert!(!tally.absorb(report(2, 11, None)));
        assert_eq!(tally.trials, 19);
        assert_eq!(tally.best.as_ref().map(Tiling::corners), Some(4));
    }

    #[test]
    fn test_tally_drain_reports_disconnect() {
        let (tx, rx) = mpsc::channel();
        tx.send(report(0, 2, Some(tiling_of(&[(0.0, 0.0, 1.0, 1.0)]))))
            .expect("send");
        tx.send(report(1, 4, None)).expect("send");

        let mut tally = Tally::default();
        assert_eq!(tally.drain(&rx), (true, false));
        drop(tx);
        assert_eq!(tally.drain(&rx), (false, true));
        assert_eq!(tally.trials, 6);
    }

    #[test]
    fn test_worker_count() {
        let flag = Arc::new(AtomicBool::new(false));
        let coordinator = SearchCoordinator::new(&Config::new().with_threads(3), flag.clone());
        assert_eq!(coordinator.worker_count(), 3);

        let coordinator = SearchCoordinator::new(&Config::new(), flag);
        assert!(coordinator.worker_count() >= 1);
    }

    #[test]
    fn test_times_out_with_best_tiling() {
        let coordinator =
            SearchCoordinator::new(&quick_config(), Arc::new(AtomicBool::new(false)));
        let outcome = coordinator
            .run(
                candidates(&[(2.0, 1.0), (1.0, 1.0), (3.0, 1.0)]),
                Tiling::new(3.0, 3.0, 0.0, 0.0),
                None,
            )
            .expect("search runs");

        assert_eq!(outcome.stop, StopReason::TimedOut);
        assert!(outcome.evaluated > 0);
        assert_eq!(outcome.possible, None);
        let best = outcome.best.expect("a tiling");
        assert_eq!(best.placed_count(), 3);
        assert!(best.area() >= 6.0 - 1e-9);
    }

    #[test]
    fn test_tail_covering_all_jobs_finds_optimum() {
        let config = quick_config().with_exhaustive_tail(3);
        let coordinator = SearchCoordinator::new(&config, Arc::new(AtomicBool::new(false)));
        let outcome = coordinator
            .run(
                candidates(&[(2.0, 1.0), (1.0, 1.0), (3.0, 1.0)]),
                Tiling::new(3.0, 3.0, 0.0, 0.0),
                None,
            )
            .expect("search runs");

        assert_relative_eq!(outcome.best.expect("a tiling").area(), 6.0);
    }

    #[test]
    fn test_unsatisfiable_returns_none() {
        let coordinator =
            SearchCoordinator::new(&quick_config(), Arc::new(AtomicBool::new(false)));
        let outcome = coordinator
            .run(
                candidates(&[(6.0, 6.0), (6.0, 6.0)]),
                Tiling::new(6.0, 6.0, 0.0, 0.0),
                None,
            )
            .expect("search runs");

        assert!(outcome.best.is_none());
        assert!(outcome.evaluated > 0);
    }

    #[test]
    fn test_cancel_flag_stops_search() {
        let flag = Arc::new(AtomicBool::new(true));
        let config = quick_config().with_time_limit(0);
        let coordinator = SearchCoordinator::new(&config, flag);

        let outcome = coordinator
            .run(
                candidates(&[(2.0, 1.0), (1.0, 1.0)]),
                Tiling::new(4.0, 4.0, 0.0, 0.0),
                None,
            )
            .expect("search runs");

        assert_eq!(outcome.stop, StopReason::Cancelled);
    }

    #[test]
    fn test_progress_callback_sees_improvements() {
        let seen = Mutex::new(Vec::new());
        let callback = |info: ProgressInfo| {
            if let Ok(mut seen) = seen.lock() {
                seen.push(info.best_area);
            }
        };

        let coordinator =
            SearchCoordinator::new(&quick_config(), Arc::new(AtomicBool::new(false)));
        coordinator
            .run(
                candidates(&[(2.0, 1.0), (1.0, 1.0)]),
                Tiling::new(4.0, 4.0, 0.0, 0.0),
                Some(&callback),
            )
            .expect("search runs");

        let seen = seen.into_inner().expect("lock");
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|area| area.is_some()));
    }
}
