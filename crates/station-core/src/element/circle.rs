//! Circle element.

use super::style::{Color, ShapeStyle};
use super::{Anchor, ElementBase, ElementKind, ElementPatch, ElementTrait};
use kurbo::{BezPath, Circle, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle centered on `(x, y)`. The diameter is the smaller of width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleElement {
    #[serde(flatten)]
    pub base: ElementBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl CircleElement {
    pub fn new(cx: f64, cy: f64, diameter: f64) -> Self {
        Self {
            base: ElementBase::new(ElementKind::Circle.display_name(), cx, cy, diameter, diameter),
            style: ShapeStyle::filled(Color::rgb(16, 185, 129)),
        }
    }

    pub fn radius(&self) -> f64 {
        self.base.width.min(self.base.height) / 2.0
    }
}

impl ElementTrait for CircleElement {
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
        Circle::new(Point::ZERO, self.radius()).to_path(0.1)
    }

    fn hit_test_local(&self, point: Point, tolerance: f64) -> bool {
        point.to_vec2().hypot() <= self.radius() + tolerance
    }

    fn apply_patch(&mut self, patch: &ElementPatch) {
        patch.apply_shape_style(&mut self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_uses_shorter_side() {
        let mut circle = CircleElement::new(0.0, 0.0, 100.0);
        circle.base.height = 40.0;
        assert!((circle.radius() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_corner_misses() {
        let circle = CircleElement::new(0.0, 0.0, 100.0);
        assert!(circle.hit_test_local(Point::new(0.0, 49.0), 0.0));
        // Inside the bounding box but outside the disc.
        assert!(!circle.hit_test_local(Point::new(48.0, 48.0), 0.0));
    }
}
