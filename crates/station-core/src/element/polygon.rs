//! Regular polygon element (triangles are three-sided polygons).

use super::style::{Color, ShapeStyle};
use super::{
    Anchor, ElementBase, ElementKind, ElementPatch, ElementTrait, closed_path, hit_test_polygon,
};
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Smallest number of sides a polygon can have.
pub const MIN_SIDES: u32 = 3;

/// A regular polygon inscribed in the element box, centered on `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonElement {
    #[serde(flatten)]
    pub base: ElementBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    pub sides: u32,
}

impl PolygonElement {
    pub fn new(cx: f64, cy: f64, width: f64, height: f64, sides: u32) -> Self {
        Self {
            base: ElementBase::new(ElementKind::Polygon.display_name(), cx, cy, width, height),
            style: ShapeStyle::filled(Color::rgb(139, 92, 246)),
            sides: sides.max(MIN_SIDES),
        }
    }

    pub fn triangle(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            base: ElementBase::new(ElementKind::Triangle.display_name(), cx, cy, width, height),
            style: ShapeStyle::filled(Color::rgb(245, 158, 11)),
            sides: 3,
        }
    }

    /// Vertices in local space, first vertex pointing up.
    pub fn vertices(&self) -> Vec<Point> {
        let (rx, ry) = (self.base.width / 2.0, self.base.height / 2.0);
        (0..self.sides)
            .map(|i| {
                let angle = -FRAC_PI_2 + TAU * i as f64 / self.sides as f64;
                Point::new(rx * angle.cos(), ry * angle.sin())
            })
            .collect()
    }
}

impl ElementTrait for PolygonElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn anchor(&self) -> Anchor {
        Anchor::Center
    }

    fn local_path(&self) -> BezPath {
        closed_path(&self.vertices())
    }

    fn hit_test_local(&self, point: Point, tolerance: f64) -> bool {
        hit_test_polygon(point, &self.vertices(), tolerance)
    }

    fn apply_patch(&mut self, patch: &ElementPatch) {
        patch.apply_shape_style(&mut self.style);
        if let Some(sides) = patch.sides {
            self.sides = sides.max(MIN_SIDES);
        }
    }
}
