//! Panel (sheet) boundary type.

use crate::job::Job;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangular sheet that all jobs must fit on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Panel {
    width: f64,
    height: f64,
}

impl Panel {
    /// Creates a new panel with the given maximum width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the panel area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the job fits the panel in at least one orientation.
    pub fn accepts(&self, job: &Job) -> bool {
        let (w, h) = (job.width(), job.height());
        (w <= self.width && h <= self.height) || (h <= self.width && w <= self.height)
    }

    /// Validates the panel dimensions.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidPanel("dimensions must be finite".into()));
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidPanel(
                "All dimensions must be positive".into(),
            ));
        }

        Ok(())
    }
}
