//! Line element.

use super::style::Color;
use super::{ElementBase, ElementKind, ElementPatch, ElementTrait, point_to_polyline_dist};
use crate::error::{ElementError, ElementResult};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// Check a flat `[x0, y0, x1, y1, ...]` list: even length, at least two points,
/// all finite.
pub(crate) fn validate_points(points: &[f64]) -> ElementResult<()> {
    if points.len() < 4 || points.len() % 2 != 0 || points.iter().any(|v| !v.is_finite()) {
        return Err(ElementError::InvalidPoints(points.len()));
    }
    Ok(())
}

/// Pair up a flat coordinate list.
pub(crate) fn pairs(points: &[f64]) -> Vec<Point> {
    points
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect()
}

/// Axis-aligned envelope of a flat coordinate list.
pub(crate) fn envelope(points: &[f64]) -> Rect {
    let mut pts = pairs(points).into_iter();
    let Some(first) = pts.next() else {
        return Rect::ZERO;
    };
    pts.fold(Rect::from_points(first, first), |acc, p| acc.union_pt(p))
}

pub(crate) fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

/// Flat point list for a two-point gesture, relative to the top-left of the
/// envelope, together with that envelope.
pub(crate) fn relative_segment(start: Point, end: Point) -> (Rect, Vec<f64>) {
    let rect = Rect::from_points(start, end);
    let points = vec![
        start.x - rect.x0,
        start.y - rect.y0,
        end.x - rect.x0,
        end.y - rect.y0,
    ];
    (rect, points)
}

/// A polyline. `points` are relative to `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineElement {
    #[serde(flatten)]
    pub base: ElementBase,
    pub points: Vec<f64>,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl LineElement {
    pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

    /// Create a line at `(x, y)` whose box spans the origin and every point.
    pub fn new(x: f64, y: f64, points: Vec<f64>) -> ElementResult<Self> {
        validate_points(&points)?;
        let bounds = envelope(&points).union_pt(Point::ZERO);
        Ok(Self {
            base: ElementBase::new(
                ElementKind::Line.display_name(),
                x,
                y,
                bounds.width(),
                bounds.height(),
            ),
            points,
            stroke: Color::rgb(17, 24, 39),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        })
    }

    /// Create a straight segment between two canvas points.
    pub fn between(start: Point, end: Point) -> Self {
        let (rect, points) = relative_segment(start, end);
        Self {
            base: ElementBase::new(
                ElementKind::Line.display_name(),
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
            ),
            points,
            stroke: Color::rgb(17, 24, 39),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        }
    }

    /// Points in local space.
    pub fn local_points(&self) -> Vec<Point> {
        pairs(&self.points)
    }
}

impl ElementTrait for LineElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn local_path(&self) -> BezPath {
        polyline_path(&self.local_points())
    }

    fn hit_test_local(&self, point: Point, tolerance: f64) -> bool {
        point_to_polyline_dist(point, &self.local_points()) <= tolerance + self.stroke_width / 2.0
    }

    fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(stroke) = patch.stroke {
            self.stroke = stroke;
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = width.max(0.0);
        }
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        scale_points(&mut self.points, sx, sy);
    }
}

pub(crate) fn scale_points(points: &mut [f64], sx: f64, sy: f64) {
    for pair in points.chunks_exact_mut(2) {
        pair[0] *= sx;
        pair[1] *= sy;
    }
}
