//! Partial layouts of rectangles on a panel.
//!
//! A [`Tiling`] tracks the rectangles placed so far and a set of anchor
//! points where the next rectangle may go. Rectangles are inflated by the
//! job spacing before they are handed in, so two neighbouring rectangles can
//! share an edge and still leave the required gutter between the jobs.
//!
//! # Anchors
//!
//! The empty tiling has a single anchor at the origin. Placing a rectangle
//! consumes its anchor and offers two new ones: at its lower-right corner and
//! at its upper-left corner. New anchors are dropped when they fall outside
//! the usable area or inside an existing rectangle, and old anchors are
//! dropped when the new rectangle covers them. Anchors are kept in
//! bottom-left order (by y, then by x).
//!
//! The usable area is the panel grown by one gutter on each axis: the gutter
//! of the right-most and top-most job may hang past the panel edge, the job
//! itself may not.

use crate::candidate::JobVariant;
use crate::EPSILON;
use nalgebra::{Point2, Vector2};
use std::cmp::Ordering;

/// A position where the lower-left corner of a rectangle may be placed.
pub type AnchorPoint = Point2<f64>;

/// A rectangle committed to a tiling.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedRect {
    /// Job and orientation occupying the rectangle.
    pub variant: JobVariant,
    /// Lower-left corner.
    pub position: Point2<f64>,
    /// Inflated dimensions (job plus spacing).
    pub dimensions: Vector2<f64>,
    /// Job dimensions as placed.
    pub job_dimensions: Vector2<f64>,
}

impl PlacedRect {
    /// Returns the upper-right corner of the inflated rectangle.
    pub fn max_corner(&self) -> Point2<f64> {
        self.position + self.dimensions
    }

    /// Returns the upper-right corner of the job itself.
    pub fn job_max_corner(&self) -> Point2<f64> {
        self.position + self.job_dimensions
    }

    /// Checks whether a rectangle at `position` with `dimensions` overlaps this one.
    ///
    /// Shared edges do not count as overlap.
    pub fn overlaps(&self, position: &Point2<f64>, dimensions: &Vector2<f64>) -> bool {
        let self_max = self.max_corner();
        let other_max = position + dimensions;

        let no_overlap_x =
            self.position.x >= other_max.x - EPSILON || position.x >= self_max.x - EPSILON;
        let no_overlap_y =
            self.position.y >= other_max.y - EPSILON || position.y >= self_max.y - EPSILON;

        !(no_overlap_x || no_overlap_y)
    }

    /// Half-open containment: the lower and left edges belong to the
    /// rectangle, the upper and right edges do not.
    pub fn covers(&self, point: &Point2<f64>) -> bool {
        let max = self.max_corner();
        point.x >= self.position.x - EPSILON
            && point.x < max.x - EPSILON
            && point.y >= self.position.y - EPSILON
            && point.y < max.y - EPSILON
    }

    fn contains_strict(&self, x: f64, y: f64) -> bool {
        let max = self.max_corner();
        x > self.position.x && x < max.x && y > self.position.y && y < max.y
    }
}

/// A placed job in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedJob {
    /// Job and orientation.
    pub variant: JobVariant,
    /// Lower-left x.
    pub x: f64,
    /// Lower-left y.
    pub y: f64,
    /// Width as placed.
    pub width: f64,
    /// Height as placed.
    pub height: f64,
}

/// Quality key of a complete tiling: smaller area wins, then fewer corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Bounding-box area of the placed jobs.
    pub area: f64,
    /// Corners of the occupied outline.
    pub corners: usize,
}

impl Score {
    /// Returns true if `self` is strictly better than `other`.
    pub fn is_better_than(&self, other: &Score) -> bool {
        self.area < other.area - EPSILON
            || ((self.area - other.area).abs() <= EPSILON && self.corners < other.corners)
    }
}

/// A partial layout of rectangles on a panel.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tiling {
    /// Panel dimensions.
    panel: Vector2<f64>,
    /// Gutter on each axis.
    spacing: Vector2<f64>,
    /// Usable area: panel plus one gutter per axis.
    limit: Vector2<f64>,
    /// Placed rectangles, in insertion order.
    placed: Vec<PlacedRect>,
    /// Candidate anchors, sorted by (y, x).
    anchors: Vec<AnchorPoint>,
}

impl Tiling {
    /// Creates an empty tiling on a `width` x `height` panel.
    pub fn new(width: f64, height: f64, x_spacing: f64, y_spacing: f64) -> Self {
        let panel = Vector2::new(width, height);
        let spacing = Vector2::new(x_spacing, y_spacing);

        Self {
            panel,
            spacing,
            limit: panel + spacing,
            placed: Vec::new(),
            anchors: vec![Point2::origin()],
        }
    }

    /// Panel width.
    pub fn width(&self) -> f64 {
        self.panel.x
    }

    /// Panel height.
    pub fn height(&self) -> f64 {
        self.panel.y
    }

    /// Gutters as `(x_spacing, y_spacing)`.
    pub fn spacing(&self) -> (f64, f64) {
        (self.spacing.x, self.spacing.y)
    }

    /// Returns the placed rectangles.
    pub fn placed(&self) -> &[PlacedRect] {
        &self.placed
    }

    /// Returns the current anchors in bottom-left order.
    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    /// Returns the number of placed rectangles.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Returns true if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Anchors where a `width` x `height` rectangle fits without leaving the
    /// usable area or overlapping a placed rectangle, in bottom-left order.
    pub fn valid_add_points(&self, width: f64, height: f64) -> Vec<AnchorPoint> {
        let dimensions = Vector2::new(width, height);
        self.anchors
            .iter()
            .filter(|p| self.fits_at(p, &dimensions))
            .copied()
            .collect()
    }

    fn fits_at(&self, point: &AnchorPoint, dimensions: &Vector2<f64>) -> bool {
        if point.x + dimensions.x > self.limit.x + EPSILON
            || point.y + dimensions.y > self.limit.y + EPSILON
        {
            return false;
        }

        !self
            .placed
            .iter()
            .any(|rect| rect.overlaps(point, dimensions))
    }

    /// Commits an inflated rectangle at `anchor`.
    ///
    /// The rectangle must fit at `anchor`, as reported by
    /// [`valid_add_points`](Self::valid_add_points).
    pub fn add_job(&mut self, anchor: AnchorPoint, width: f64, height: f64, variant: JobVariant) {
        debug_assert!(self.fits_at(&anchor, &Vector2::new(width, height)));

        let dimensions = Vector2::new(width, height);
        let rect = PlacedRect {
            variant,
            position: anchor,
            dimensions,
            job_dimensions: dimensions - self.spacing,
        };

        self.anchors.retain(|p| !rect.covers(p));

        let max = rect.max_corner();
        self.placed.push(rect);

        self.insert_anchor(Point2::new(max.x, anchor.y));
        self.insert_anchor(Point2::new(anchor.x, max.y));
    }

    fn insert_anchor(&mut self, point: AnchorPoint) {
        if point.x >= self.limit.x - EPSILON || point.y >= self.limit.y - EPSILON {
            return;
        }

        if self.placed.iter().any(|rect| rect.covers(&point)) {
            return;
        }

        if self
            .anchors
            .iter()
            .any(|p| (p - point).norm() < EPSILON)
        {
            return;
        }

        let idx = self
            .anchors
            .iter()
            .position(|p| bottom_left_order(&point, p) == Ordering::Less)
            .unwrap_or(self.anchors.len());
        self.anchors.insert(idx, point);
    }

    /// Drops anchors whose free space to the right or above is narrower
    /// than `min_dimension` plus the gutter, so no remaining job could
    /// ever be placed there.
    pub fn remove_inlets(&mut self, min_dimension: f64) {
        let min_width = min_dimension + self.spacing.x;
        let min_height = min_dimension + self.spacing.y;
        let placed = &self.placed;
        let limit = self.limit;

        self.anchors.retain(|p| {
            residual_x(placed, limit, p) + EPSILON >= min_width
                && residual_y(placed, limit, p) + EPSILON >= min_height
        });
    }

    /// Bounding-box area of the placed jobs, measured from the origin.
    ///
    /// Gutters are excluded, so adding a job never decreases the area.
    pub fn area(&self) -> f64 {
        let (x, y) = self.extents();
        x * y
    }

    /// Maximum x and y reached by the placed jobs.
    pub fn extents(&self) -> (f64, f64) {
        self.placed.iter().fold((0.0_f64, 0.0_f64), |acc, rect| {
            let max = rect.job_max_corner();
            (acc.0.max(max.x), acc.1.max(max.y))
        })
    }

    /// Sum of the placed job areas.
    pub fn used_area(&self) -> f64 {
        self.placed
            .iter()
            .map(|rect| rect.job_dimensions.x * rect.job_dimensions.y)
            .sum()
    }

    /// Ratio of job area to bounding-box area (0 for an empty tiling).
    pub fn utilization(&self) -> f64 {
        let area = self.area();
        if area > 0.0 {
            self.used_area() / area
        } else {
            0.0
        }
    }

    /// Number of corners of the outline of the inflated rectangles.
    ///
    /// The rectangles are rasterized on their own coordinate grid, holes
    /// that cannot be reached from outside are filled, and every grid vertex
    /// where the outline turns is counted. A vertex touched diagonally by
    /// two filled cells counts twice.
    pub fn corners(&self) -> usize {
        if self.placed.is_empty() {
            return 0;
        }

        let xs = grid_lines(self.placed.iter().flat_map(|r| [r.position.x, r.max_corner().x]));
        let ys = grid_lines(self.placed.iter().flat_map(|r| [r.position.y, r.max_corner().y]));

        // Padded grid: column i spans xs[i - 1]..xs[i], with an empty ring around it.
        let cols = xs.len() + 1;
        let rows = ys.len() + 1;
        let mut filled = vec![false; cols * rows];
        for j in 1..ys.len() {
            let cy = (ys[j - 1] + ys[j]) / 2.0;
            for i in 1..xs.len() {
                let cx = (xs[i - 1] + xs[i]) / 2.0;
                filled[j * cols + i] = self.placed.iter().any(|r| r.contains_strict(cx, cy));
            }
        }

        let mut outside = vec![false; cols * rows];
        let mut stack = vec![0];
        outside[0] = true;
        while let Some(idx) = stack.pop() {
            let (i, j) = (idx % cols, idx / cols);
            let mut neighbours = Vec::with_capacity(4);
            if i > 0 {
                neighbours.push(idx - 1);
            }
            if i + 1 < cols {
                neighbours.push(idx + 1);
            }
            if j > 0 {
                neighbours.push(idx - cols);
            }
            if j + 1 < rows {
                neighbours.push(idx + cols);
            }
            for n in neighbours {
                if !outside[n] && !filled[n] {
                    outside[n] = true;
                    stack.push(n);
                }
            }
        }

        let solid = |i: usize, j: usize| !outside[j * cols + i];
        let mut corners = 0;
        for l in 0..ys.len() {
            for k in 0..xs.len() {
                let bottom_left = solid(k, l);
                let bottom_right = solid(k + 1, l);
                let top_left = solid(k, l + 1);
                let top_right = solid(k + 1, l + 1);
                let count = [bottom_left, bottom_right, top_left, top_right]
                    .iter()
                    .filter(|&&s| s)
                    .count();

                match count {
                    1 | 3 => corners += 1,
                    2 if bottom_left == top_right => corners += 2,
                    _ => {}
                }
            }
        }

        corners
    }

    /// Area and corner count of this tiling.
    pub fn score(&self) -> Score {
        Score {
            area: self.area(),
            corners: self.corners(),
        }
    }

    /// Returns true if this tiling beats `other`.
    ///
    /// Corners are only counted when the areas tie.
    pub fn is_better_than(&self, other: &Tiling) -> bool {
        let (area, other_area) = (self.area(), other.area());
        if area < other_area - EPSILON {
            return true;
        }
        if (area - other_area).abs() > EPSILON {
            return false;
        }
        self.corners() < other.corners()
    }

    /// Placed jobs translated so the layout starts at `(origin_x, origin_y)`,
    /// in insertion order.
    pub fn canonicalize(&self, origin_x: f64, origin_y: f64) -> Vec<PlacedJob> {
        self.placed
            .iter()
            .map(|rect| PlacedJob {
                variant: rect.variant,
                x: rect.position.x + origin_x,
                y: rect.position.y + origin_y,
                width: rect.job_dimensions.x,
                height: rect.job_dimensions.y,
            })
            .collect()
    }
}

/// Returns true if `candidate` should replace `best`.
pub fn improves(candidate: &Tiling, best: Option<&Tiling>) -> bool {
    best.map_or(true, |best| candidate.is_better_than(best))
}

fn bottom_left_order(a: &AnchorPoint, b: &AnchorPoint) -> Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

fn grid_lines(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut lines: Vec<f64> = values.collect();
    lines.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    lines.dedup_by(|a, b| (*a - *b).abs() < EPSILON);
    lines
}

/// Free run to the right of `p` before a rectangle or the usable edge.
fn residual_x(placed: &[PlacedRect], limit: Vector2<f64>, p: &AnchorPoint) -> f64 {
    placed
        .iter()
        .filter(|r| {
            p.y >= r.position.y - EPSILON
                && p.y < r.max_corner().y - EPSILON
                && r.position.x > p.x - EPSILON
        })
        .map(|r| r.position.x)
        .fold(limit.x, f64::min)
        - p.x
}

/// Free run above `p` before a rectangle or the usable edge.
fn residual_y(placed: &[PlacedRect], limit: Vector2<f64>, p: &AnchorPoint) -> f64 {
    placed
        .iter()
        .filter(|r| {
            p.x >= r.position.x - EPSILON
                && p.x < r.max_corner().x - EPSILON
                && r.position.y > p.y - EPSILON
        })
        .map(|r| r.position.y)
        .fold(limit.y, f64::min)
        - p.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn place(tiling: &mut Tiling, w: f64, h: f64, job: usize) -> AnchorPoint {
        let anchor = tiling.valid_add_points(w, h)[0];
        tiling.add_job(anchor, w, h, JobVariant::normal(job));
        anchor
    }

    #[test]
    fn test_empty_tiling() {
        let tiling = Tiling::new(10.0, 8.0, 0.0, 0.0);
        assert!(tiling.is_empty());
        assert!(tiling.placed().is_empty());
        assert_eq!((tiling.width(), tiling.height()), (10.0, 8.0));
        assert_eq!(tiling.anchors().to_vec(), vec![AnchorPoint::origin()]);
        assert_eq!(tiling.area(), 0.0);
        assert_eq!(tiling.used_area(), 0.0);
        assert_eq!(tiling.corners(), 0);
        assert_eq!(tiling.utilization(), 0.0);
    }

    #[test]
    fn test_add_job_generates_anchors() {
        let mut tiling = Tiling::new(10.0, 8.0, 0.0, 0.0);
        let anchor = place(&mut tiling, 3.0, 2.0, 0);

        assert_eq!(anchor, AnchorPoint::origin());
        assert_eq!(tiling.placed().len(), 1);
        assert_eq!(tiling.placed()[0].position, AnchorPoint::origin());
        assert_eq!(tiling.placed()[0].variant, JobVariant::normal(0));
        assert_eq!(
            tiling.anchors().to_vec(),
            vec![AnchorPoint::new(3.0, 0.0), AnchorPoint::new(0.0, 2.0)]
        );
        assert_relative_eq!(tiling.area(), 6.0);
        assert_eq!(tiling.corners(), 4);
    }

    #[test]
    fn test_anchor_at_panel_edge_is_dropped() {
        let mut tiling = Tiling::new(3.0, 8.0, 0.0, 0.0);
        place(&mut tiling, 3.0, 2.0, 0);
        assert_eq!(tiling.anchors().to_vec(), vec![AnchorPoint::new(0.0, 2.0)]);
    }

    #[test]
    fn test_valid_add_points_checks_bounds() {
        let tiling = Tiling::new(2.0, 5.0, 0.0, 0.0);
        assert!(tiling.valid_add_points(5.0, 1.0).is_empty());
        assert_eq!(tiling.valid_add_points(1.0, 5.0).len(), 1);
        assert_eq!(tiling.valid_add_points(2.0, 5.0).len(), 1);
    }

    #[test]
    fn test_valid_add_points_checks_overlap() {
        let mut tiling = Tiling::new(4.0, 4.0, 0.0, 0.0);
        place(&mut tiling, 2.0, 1.0, 0);
        tiling.add_job(AnchorPoint::new(0.0, 1.0), 1.0, 3.0, JobVariant::normal(1));

        // (0,4) lies on the panel edge and is never offered.
        assert_eq!(
            tiling.anchors().to_vec(),
            vec![AnchorPoint::new(2.0, 0.0), AnchorPoint::new(1.0, 1.0)]
        );

        let points = tiling.valid_add_points(2.0, 2.0);
        assert_eq!(points.len(), 2);

        // A 3x1 strip fits at (1,1) but runs past the panel at (2,0).
        let points = tiling.valid_add_points(3.0, 1.0);
        assert_eq!(points, vec![AnchorPoint::new(1.0, 1.0)]);
    }

    #[test]
    fn test_spacing_allows_overhanging_gutter() {
        let mut tiling = Tiling::new(4.0, 1.0, 1.0, 0.0);
        // Two 1.5 wide jobs with a 1.0 gutter: 2.5 + 2.5 = 5.0 = panel + gutter.
        place(&mut tiling, 2.5, 1.0, 0);
        let points = tiling.valid_add_points(2.5, 1.0);
        assert_eq!(points, vec![AnchorPoint::new(2.5, 0.0)]);
        tiling.add_job(points[0], 2.5, 1.0, JobVariant::normal(1));

        assert_relative_eq!(tiling.extents().0, 4.0);
        assert_relative_eq!(tiling.used_area(), 3.0);
        assert_relative_eq!(tiling.area(), 4.0);
    }

    #[test]
    fn test_area_excludes_gutter() {
        let mut tiling = Tiling::new(10.0, 10.0, 0.5, 0.5);
        place(&mut tiling, 2.5, 1.5, 0);
        assert_relative_eq!(tiling.area(), 2.0);
        assert_relative_eq!(tiling.used_area(), 2.0);
        assert_relative_eq!(tiling.utilization(), 1.0);
    }

    #[test]
    fn test_area_never_decreases() {
        let mut tiling = Tiling::new(6.0, 6.0, 0.25, 0.25);
        let sizes = [(2.25, 1.25), (1.25, 1.25), (3.25, 0.75), (1.25, 2.25), (0.75, 0.75)];

        let mut previous = tiling.area();
        for (job, &(w, h)) in sizes.iter().enumerate() {
            let anchor = *tiling.valid_add_points(w, h).last().expect("room left");
            tiling.add_job(anchor, w, h, JobVariant::normal(job));

            let area = tiling.area();
            assert!(area >= previous - EPSILON);
            assert_eq!(tiling.score(), tiling.clone().score());
            previous = area;
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut tiling = Tiling::new(10.0, 10.0, 0.0, 0.0);
        place(&mut tiling, 2.0, 2.0, 0);

        let snapshot = tiling.clone();
        place(&mut tiling, 3.0, 3.0, 1);

        assert_eq!(snapshot.placed_count(), 1);
        assert_eq!(tiling.placed_count(), 2);
        assert_ne!(snapshot.anchors(), tiling.anchors());
    }

    #[test]
    fn test_remove_inlets() {
        let mut tiling = Tiling::new(5.0, 5.0, 0.0, 0.0);
        place(&mut tiling, 4.0, 4.0, 0);
        // (4,0) has one unit to the right, (0,4) one unit above.
        assert_eq!(tiling.anchors().len(), 2);

        tiling.remove_inlets(1.0);
        assert_eq!(tiling.anchors().len(), 2);

        tiling.remove_inlets(1.5);
        assert!(tiling.anchors().is_empty());
    }

    #[test]
    fn test_remove_inlets_respects_blocking_rects() {
        let mut tiling = Tiling::new(10.0, 10.0, 0.0, 0.0);
        place(&mut tiling, 2.0, 1.0, 0);
        // Anchor (2,0) then a tall rect there; (0,1) now sees 2 units before it.
        tiling.add_job(AnchorPoint::new(2.0, 0.0), 1.0, 5.0, JobVariant::normal(1));
        assert!(tiling.anchors().contains(&AnchorPoint::new(0.0, 1.0)));

        tiling.remove_inlets(2.5);
        assert!(!tiling.anchors().contains(&AnchorPoint::new(0.0, 1.0)));
        assert!(tiling.anchors().contains(&AnchorPoint::new(3.0, 0.0)));
    }

    #[test]
    fn test_corners_l_shape() {
        let mut tiling = Tiling::new(10.0, 10.0, 0.0, 0.0);
        place(&mut tiling, 2.0, 1.0, 0);
        tiling.add_job(AnchorPoint::new(0.0, 1.0), 1.0, 1.0, JobVariant::normal(1));
        assert_eq!(tiling.corners(), 6);
    }

    #[test]
    fn test_corners_fill_holes() {
        // A ring of four bars around a 1x1 hole has the outline of a square.
        let mut tiling = Tiling::new(10.0, 10.0, 0.0, 0.0);
        tiling.add_job(AnchorPoint::new(0.0, 0.0), 2.0, 1.0, JobVariant::normal(0));
        tiling.add_job(AnchorPoint::new(2.0, 0.0), 1.0, 2.0, JobVariant::normal(1));
        tiling.add_job(AnchorPoint::new(1.0, 2.0), 2.0, 1.0, JobVariant::normal(2));
        tiling.add_job(AnchorPoint::new(0.0, 1.0), 1.0, 2.0, JobVariant::normal(3));
        assert_eq!(tiling.corners(), 4);
    }

    #[test]
    fn test_corners_diagonal_touch() {
        let mut tiling = Tiling::new(10.0, 10.0, 0.0, 0.0);
        tiling.add_job(AnchorPoint::new(0.0, 0.0), 1.0, 1.0, JobVariant::normal(0));
        tiling.add_job(AnchorPoint::new(1.0, 1.0), 1.0, 1.0, JobVariant::normal(1));
        assert_eq!(tiling.corners(), 8);
    }

    #[test]
    fn test_score_ordering() {
        let small = Score {
            area: 4.0,
            corners: 6,
        };
        let large = Score {
            area: 6.0,
            corners: 4,
        };
        let smooth = Score {
            area: 4.0,
            corners: 4,
        };

        assert!(small.is_better_than(&large));
        assert!(smooth.is_better_than(&small));
        assert!(!small.is_better_than(&small));
    }

    #[test]
    fn test_is_better_than_breaks_ties_on_corners() {
        let mut square = Tiling::new(10.0, 10.0, 0.0, 0.0);
        square.add_job(AnchorPoint::new(0.0, 0.0), 2.0, 2.0, JobVariant::normal(0));

        let mut stepped = Tiling::new(10.0, 10.0, 0.0, 0.0);
        stepped.add_job(AnchorPoint::new(0.0, 0.0), 2.0, 1.0, JobVariant::normal(0));
        stepped.add_job(AnchorPoint::new(0.0, 1.0), 1.0, 1.0, JobVariant::normal(1));

        assert_relative_eq!(square.area(), stepped.area());
        assert!(square.is_better_than(&stepped));
        assert!(!stepped.is_better_than(&square));
        assert!(!square.is_better_than(&square.clone()));
        assert!(improves(&stepped, None));
        assert!(!improves(&stepped, Some(&square)));
    }

    #[test]
    fn test_canonicalize_offsets_and_order() {
        let mut tiling = Tiling::new(10.0, 10.0, 0.5, 0.5);
        place(&mut tiling, 2.5, 1.5, 0);
        place(&mut tiling, 1.5, 1.5, 1);

        let jobs = tiling.canonicalize(1.0, 2.0);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].variant.job, 0);
        assert_eq!((jobs[0].x, jobs[0].y), (1.0, 2.0));
        assert_eq!((jobs[0].width, jobs[0].height), (2.0, 1.0));
        assert_eq!(jobs[1].variant.job, 1);
        assert_eq!((jobs[1].x, jobs[1].y), (3.5, 2.0));
    }
}
