//! Placement representation for positioned jobs.

use crate::job::{JobId, Orientation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the placement of one job copy on the panel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The ID of the placed job.
    pub job_id: JobId,

    /// Instance index (0-based) when multiple copies exist.
    pub instance: usize,

    /// Absolute x coordinate of the lower-left corner.
    pub x: f64,

    /// Absolute y coordinate of the lower-left corner.
    pub y: f64,

    /// Width as placed (after orientation).
    pub width: f64,

    /// Height as placed (after orientation).
    pub height: f64,

    /// Orientation used.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        job_id: impl Into<JobId>,
        instance: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            instance,
            x,
            y,
            width,
            height,
            orientation: Orientation::Normal,
        }
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns true if the job was rotated by 90 degrees.
    pub fn is_rotated(&self) -> bool {
        self.orientation.is_rotated()
    }

    /// Returns the rotation angle in degrees.
    pub fn rotation_degrees(&self) -> u32 {
        self.orientation.degrees()
    }

    /// Returns the upper-right corner.
    pub fn max_corner(&self) -> (f64, f64) {
        (self.x + self.width, self.y + self.height)
    }

    /// Returns the placed area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of rotated placements.
    pub rotated_count: usize,
    /// Copies placed per job.
    pub job_distribution: std::collections::HashMap<JobId, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.is_rotated() {
                stats.rotated_count += 1;
            }

            *stats.job_distribution.entry(p.job_id.clone()).or_insert(0) += 1;
        }

        stats
    }
}
