//! # U-Panel Tiling
//!
//! Rectangle tiling and panel search for the U-Panel panelization engine.
//!
//! ## Features
//!
//! - **Tiling**: anchor-based partial layouts with spacing, inlet pruning,
//!   bounding-box area and outline corner counting
//! - **Exhaustive search**: branch-and-bound over every ordering and
//!   orientation with exact permutation accounting
//! - **Random search**: randomized placement with an exhaustive tail, run by
//!   parallel workers on a rayon pool
//!
//! ## Quick Start
//!
//! ```rust
//! use u_panel_tiling::{Config, Job, Panel, Panelizer, Solver, Strategy};
//!
//! let jobs = vec![
//!     Job::new("ctrl", 2.0, 1.5).with_quantity(2),
//!     Job::new("sensor", 1.0, 1.0),
//! ];
//! let panel = Panel::new(6.0, 4.0);
//!
//! let config = Config::new()
//!     .with_strategy(Strategy::Exhaustive)
//!     .with_spacing(0.1, 0.1);
//! let result = Panelizer::new(config).solve(&jobs, &panel).unwrap();
//!
//! assert_eq!(result.placed_count(), 3);
//! ```

pub mod candidate;
pub mod coordinator;
pub mod exhaustive;
pub mod outcome;
pub mod panelizer;
pub mod random;
pub mod tiling;

/// Tolerance for coordinate comparisons.
pub const EPSILON: f64 = 1e-9;

// Re-exports
pub use candidate::{
    build_candidates, max_utilization, min_dimension, JobVariant, PlacementCandidate,
};
pub use coordinator::SearchCoordinator;
pub use exhaustive::{permutation_space, ExhaustiveSearch};
pub use outcome::{SearchOutcome, StopReason};
pub use panelizer::Panelizer;
pub use random::{RandomSearch, WorkerReport};
pub use tiling::{AnchorPoint, PlacedJob, PlacedRect, Score, Tiling};
pub use u_panel_core::{
    Config, Error, Job, Orientation, Panel, Placement, ProgressInfo, Result, SolveResult,
    Solver, Strategy,
};
