//! Arrow element: a line with a pointer head at its last point.

use super::line::{pairs, polyline_path, relative_segment, scale_points, validate_points};
use super::style::Color;
use super::{
    ElementBase, ElementKind, ElementPatch, ElementTrait, hit_test_polygon, point_to_polyline_dist,
};
use crate::error::ElementResult;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowElement {
    #[serde(flatten)]
    pub base: ElementBase,
    pub points: Vec<f64>,
    pub stroke: Color,
    pub stroke_width: f64,
    pub pointer_length: f64,
    pub pointer_width: f64,
}

impl ArrowElement {
    pub const DEFAULT_POINTER: f64 = 12.0;

    pub fn new(x: f64, y: f64, points: Vec<f64>) -> ElementResult<Self> {
        validate_points(&points)?;
        let bounds = super::line::envelope(&points).union_pt(Point::ZERO);
        Ok(Self::with_box(x, y, bounds.width(), bounds.height(), points))
    }

    pub fn between(start: Point, end: Point) -> Self {
        let (rect, points) = relative_segment(start, end);
        Self::with_box(rect.x0, rect.y0, rect.width(), rect.height(), points)
    }

    fn with_box(x: f64, y: f64, width: f64, height: f64, points: Vec<f64>) -> Self {
        Self {
            base: ElementBase::new(ElementKind::Arrow.display_name(), x, y, width, height),
            points,
            stroke: Color::rgb(17, 24, 39),
            stroke_width: super::LineElement::DEFAULT_STROKE_WIDTH,
            pointer_length: Self::DEFAULT_POINTER,
            pointer_width: Self::DEFAULT_POINTER,
        }
    }

    pub fn local_points(&self) -> Vec<Point> {
        pairs(&self.points)
    }

    /// Triangle of the pointer head (tip, left, right) in local space.
    pub fn head(&self) -> Option<[Point; 3]> {
        let pts = self.local_points();
        let (tail, tip) = match pts.as_slice() {
            [.., a, b] => (*a, *b),
            _ => return None,
        };
        let dir = tip - tail;
        let len = dir.hypot();
        if len < f64::EPSILON {
            return None;
        }
        let unit = dir / len;
        let normal = kurbo::Vec2::new(-unit.y, unit.x);
        let back = tip - unit * self.pointer_length;
        let half = self.pointer_width / 2.0;
        Some([tip, back + normal * half, back - normal * half])
    }
}

impl ElementTrait for ArrowElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn local_path(&self) -> BezPath {
        let mut path = polyline_path(&self.local_points());
        if let Some([tip, left, right]) = self.head() {
            path.move_to(left);
            path.line_to(tip);
            path.line_to(right);
            path.close_path();
        }
        path
    }

    fn hit_test_local(&self, point: Point, tolerance: f64) -> bool {
        if point_to_polyline_dist(point, &self.local_points()) <= tolerance + self.stroke_width / 2.0
        {
            return true;
        }
        self.head()
            .is_some_and(|head| hit_test_polygon(point, &head, tolerance))
    }

    fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(stroke) = patch.stroke {
            self.stroke = stroke;
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = width.max(0.0);
        }
        if let Some(length) = patch.pointer_length {
            self.pointer_length = length.max(0.0);
        }
        if let Some(width) = patch.pointer_width {
            self.pointer_width = width.max(0.0);
        }
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        scale_points(&mut self.points, sx, sy);
    }
}
