//! # U-Panel Core
//!
//! Core types and abstractions for the U-Panel panelization engine.
//!
//! This crate provides the types shared between the tiling/search crate and
//! its callers: jobs, the panel, configuration, placements and results.
//!
//! ## Core Components
//!
//! - **Inputs**: [`Job`], [`Panel`], [`Config`]
//! - **Solver trait**: [`Solver`] - Common interface for panelization searches
//! - **Outputs**: [`Placement`], [`SolveResult`], [`SolveSummary`]
//!
//! ## Search Strategies
//!
//! | Strategy | Speed | Quality | Description |
//! |----------|-------|---------|-------------|
//! | `Exhaustive` | Slow | Optimal | Branch-and-bound over all orderings and orientations |
//! | `Random` | Fast | Good | Parallel random placement with an exhaustive tail |
//!
//! ## Configuration
//!
//! ```rust
//! use u_panel_core::{Config, Strategy};
//!
//! let config = Config::new()
//!     .with_strategy(Strategy::Random)
//!     .with_spacing(0.125, 0.125)
//!     .with_exhaustive_tail(2)
//!     .with_time_limit(30000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod job;
pub mod panel;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use job::{Job, JobId, Orientation};
pub use panel::Panel;
pub use placement::{Placement, PlacementStats};
pub use result::{SolveResult, SolveSummary};
pub use solver::{Config, ProgressCallback, ProgressInfo, Solver, Strategy};
