//! Rectangle element.

use super::style::ShapeStyle;
use super::{ElementBase, ElementKind, ElementPatch, ElementTrait};
use kurbo::{BezPath, RoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectElement {
    #[serde(flatten)]
    pub base: ElementBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    /// Corner radius (0 = sharp corners).
    #[serde(default)]
    pub corner_radius: f64,
}

impl RectElement {
    /// Create a rectangle with its top-left corner at `(x, y)`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            base: ElementBase::new(ElementKind::Rect.display_name(), x, y, width, height),
            style: ShapeStyle::default(),
            corner_radius: 0.0,
        }
    }

    /// Radius actually drawn: never more than half the shorter side.
    pub fn effective_radius(&self) -> f64 {
        self.corner_radius
            .min(self.base.width / 2.0)
            .min(self.base.height / 2.0)
            .max(0.0)
    }
}

impl ElementTrait for RectElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn local_path(&self) -> BezPath {
        let rect = self.local_bounds();
        if self.corner_radius > 0.0 {
            RoundedRect::from_rect(rect, self.effective_radius()).to_path(0.1)
        } else {
            rect.to_path(0.1)
        }
    }

    fn apply_patch(&mut self, patch: &ElementPatch) {
        patch.apply_shape_style(&mut self.style);
        if let Some(radius) = patch.corner_radius {
            self.corner_radius = radius.max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_rect_creation() {
        let rect = RectElement::new(10.0, 20.0, 100.0, 50.0);
        assert!((rect.base.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.base.width - 100.0).abs() < f64::EPSILON);
        assert_eq!(rect.base.name, "Rectangle");
    }

    #[test]
    fn test_effective_radius() {
        let mut rect = RectElement::new(0.0, 0.0, 40.0, 20.0);
        rect.corner_radius = 50.0;
        assert!((rect.effective_radius() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_local() {
        let rect = RectElement::new(0.0, 0.0, 100.0, 100.0);
        assert!(rect.hit_test_local(Point::new(50.0, 50.0), 0.0));
        assert!(!rect.hit_test_local(Point::new(150.0, 50.0), 0.0));
        assert!(rect.hit_test_local(Point::new(105.0, 50.0), 10.0));
    }
}
