//! # U-Panel
//!
//! Panelization engine: finds a compact arrangement of rectangular board
//! jobs on a single panel.
//!
//! This crate bundles:
//! - **Core types**: jobs, panel, configuration, placements and results
//! - **Tiling and search**: exhaustive and parallel random searches
//!
//! ## Quick Start
//!
//! ```rust
//! use u_panel::{Config, Job, Panel, Panelizer, Solver, Strategy};
//!
//! let jobs = vec![Job::new("main", 3.0, 2.0), Job::new("aux", 1.0, 2.0).with_quantity(2)];
//! let config = Config::new()
//!     .with_strategy(Strategy::Random)
//!     .with_seed(1)
//!     .with_exhaustive_tail(3)
//!     .with_time_limit(200)
//!     .with_poll_interval(20);
//!
//! let result = Panelizer::new(config).solve(&jobs, &Panel::new(6.0, 4.0)).unwrap();
//! assert_eq!(result.placed_count(), 3);
//! assert!(result.timed_out);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and abstractions.
pub use u_panel_core as core;

/// Tiling and search algorithms.
pub use u_panel_tiling as tiling;

// Re-export commonly used types at root level
pub use u_panel_core::{
    Config, Error, Job, Orientation, Panel, Placement, Result, SolveResult, Solver, Strategy,
};
pub use u_panel_tiling::Panelizer;
