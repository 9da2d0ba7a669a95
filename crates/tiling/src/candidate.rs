//! Placement candidates: the expanded, ordered list of job copies to place.
//!
//! Every copy of every job becomes one [`PlacementCandidate`] carrying its
//! unrotated dimensions and two [`JobVariant`] handles, one per orientation.
//! The search layers only ever see candidates; the handles are resolved back
//! to [`Job`]s when the final placements are built.

use std::cmp::Ordering;
use u_panel_core::{Job, Orientation};

/// A job in one specific orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobVariant {
    /// Index of the job in the caller's job list.
    pub job: usize,
    /// Orientation of this variant.
    pub orientation: Orientation,
}

impl JobVariant {
    /// Unrotated variant of a job.
    pub fn normal(job: usize) -> Self {
        Self {
            job,
            orientation: Orientation::Normal,
        }
    }

    /// Variant rotated by 90 degrees.
    pub fn rotated(job: usize) -> Self {
        Self {
            job,
            orientation: Orientation::Rotated,
        }
    }
}

/// One copy of a job waiting to be placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementCandidate {
    /// Unrotated width.
    pub width: f64,
    /// Unrotated height.
    pub height: f64,
    /// Handle placed when the job keeps its orientation.
    pub normal: JobVariant,
    /// Handle placed when the job is rotated.
    pub rotated: JobVariant,
}

impl PlacementCandidate {
    /// Creates a candidate for the job at `job` with the given dimensions.
    pub fn new(job: usize, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            normal: JobVariant::normal(job),
            rotated: JobVariant::rotated(job),
        }
    }

    /// Index of the underlying job.
    pub fn job(&self) -> usize {
        self.normal.job
    }

    /// Returns true if both orientations occupy the same footprint.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Smaller of the two dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Larger of the two dimensions.
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Job area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Inflated footprint and variant for an orientation.
    pub fn footprint(
        &self,
        orientation: Orientation,
        x_spacing: f64,
        y_spacing: f64,
    ) -> (f64, f64, JobVariant) {
        match orientation {
            Orientation::Normal => (self.width + x_spacing, self.height + y_spacing, self.normal),
            Orientation::Rotated => (
                self.height + x_spacing,
                self.width + y_spacing,
                self.rotated,
            ),
        }
    }
}

/// Expands job quantities into one candidate per copy.
///
/// With `largest_first`, jobs are stably sorted by descending maximum
/// dimension before expansion so big jobs are tried first.
pub fn build_candidates(jobs: &[Job], largest_first: bool) -> Vec<PlacementCandidate> {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    if largest_first {
        order.sort_by(|&a, &b| {
            jobs[b]
                .max_dimension()
                .partial_cmp(&jobs[a].max_dimension())
                .unwrap_or(Ordering::Equal)
        });
    }

    order
        .into_iter()
        .flat_map(|idx| {
            let job = &jobs[idx];
            std::iter::repeat(PlacementCandidate::new(idx, job.width(), job.height()))
                .take(job.quantity())
        })
        .collect()
}

/// Smallest dimension over a set of candidates (0 when empty).
pub fn min_dimension<'a, I>(candidates: I) -> f64
where
    I: IntoIterator<Item = &'a PlacementCandidate>,
{
    candidates
        .into_iter()
        .map(PlacementCandidate::min_dimension)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Upper bound on achievable utilization: job area over inflated job area.
pub fn max_utilization(candidates: &[PlacementCandidate], x_spacing: f64, y_spacing: f64) -> f64 {
    let (used, inflated) = candidates.iter().fold((0.0, 0.0), |(used, inflated), c| {
        (
            used + c.area(),
            inflated + (c.width + x_spacing) * (c.height + y_spacing),
        )
    });

    if inflated > 0.0 {
        used / inflated
    } else {
        0.0
    }
}
