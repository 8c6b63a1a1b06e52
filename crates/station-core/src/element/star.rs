//! Star element.

use super::style::{Color, ShapeStyle};
use super::{
    Anchor, ElementBase, ElementKind, ElementPatch, ElementTrait, closed_path, hit_test_polygon,
};
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// A star centered on `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarElement {
    #[serde(flatten)]
    pub base: ElementBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    pub num_points: u32,
    /// Inner radius as a fraction of the outer radius.
    pub inner_radius: f64,
}

impl StarElement {
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            base: ElementBase::new(ElementKind::Star.display_name(), cx, cy, width, height),
            style: ShapeStyle::filled(Color::rgb(234, 179, 8)),
            num_points: 5,
            inner_radius: 0.4,
        }
    }

    /// Alternating outer/inner vertices in local space.
    pub fn vertices(&self) -> Vec<Point> {
        let (rx, ry) = (self.base.width / 2.0, self.base.height / 2.0);
        let count = self.num_points * 2;
        (0..count)
            .map(|i| {
                let angle = -FRAC_PI_2 + PI * i as f64 / self.num_points as f64;
                let scale = if i % 2 == 0 { 1.0 } else { self.inner_radius };
                Point::new(rx * scale * angle.cos(), ry * scale * angle.sin())
            })
            .collect()
    }
}

impl ElementTrait for StarElement {
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
        if let Some(points) = patch.num_points {
            self.num_points = points.max(3);
        }
        if let Some(inner) = patch.inner_radius {
            self.inner_radius = inner.clamp(0.05, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_vertex_count() {
        let star = StarElement::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(star.vertices().len(), 10);
    }

    #[test]
    fn test_patch_clamps_inner_radius() {
        let mut star = StarElement::new(0.0, 0.0, 100.0, 100.0);
        let patch = ElementPatch {
            inner_radius: Some(3.0),
            num_points: Some(1),
            ..ElementPatch::default()
        };
        star.apply_patch(&patch);
        assert!((star.inner_radius - 1.0).abs() < f64::EPSILON);
        assert_eq!(star.num_points, 3);
    }
}
