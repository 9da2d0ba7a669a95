//! Job types: the rectangular boards placed on a panel.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a job.
pub type JobId = String;

/// Orientation of a placed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// As loaded (width along x).
    #[default]
    Normal,
    /// Rotated by 90 degrees (height along x).
    Rotated,
}

impl Orientation {
    /// Returns the rotation angle in degrees.
    pub fn degrees(&self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Rotated => 90,
        }
    }

    /// Returns true for the rotated variant.
    pub fn is_rotated(&self) -> bool {
        matches!(self, Self::Rotated)
    }
}

/// A rectangular job (board artwork) to be placed on the panel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// Unique identifier.
    id: JobId,

    /// Width in the normal orientation.
    width: f64,

    /// Height in the normal orientation.
    height: f64,

    /// Number of copies to place.
    quantity: usize,
}

impl Job {
    /// Creates a new job with the given ID and dimensions.
    pub fn new(id: impl Into<JobId>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            quantity: 1,
        }
    }

    /// Sets the number of copies to place.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &JobId {
        &self.id
    }

    /// Returns the width (normal orientation).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height (normal orientation).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the number of copies to place.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns the area of one copy.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the larger of the two sides.
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Returns the smaller of the two sides.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Returns true if both orientations have the same footprint.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Returns (width, height) for the given orientation.
    pub fn dimensions_for(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Normal => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }

    /// Validates the job dimensions and quantity.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidJob(format!(
                "job '{}' has non-finite dimensions",
                self.id
            )));
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidJob(format!(
                "job '{}' must have positive dimensions (got {}x{})",
                self.id, self.width, self.height
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidJob(format!(
                "job '{}' has a quantity of zero",
                self.id
            )));
        }

        Ok(())
    }
}
