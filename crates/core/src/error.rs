//! Error types for U-Panel.

use thiserror::Error;

/// Result type alias for U-Panel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while panelizing jobs.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid job provided.
    #[error("Invalid job: {0}")]
    InvalidJob(String),

    /// Invalid panel provided.
    #[error("Invalid panel: {0}")]
    InvalidPanel(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No legal placement of the full job set exists (or none was found
    /// before the search stopped).
    #[error("Panel size {width:.2}x{height:.2} is too small to hold jobs")]
    PanelTooSmall {
        /// Panel width.
        width: f64,
        /// Panel height.
        height: f64,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
