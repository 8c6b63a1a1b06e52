//! Fill resolution: flat color or gradient geometry for an element.
//!
//! Gradient geometry is computed in the element's local space (origin at its
//! `x`/`y`, rotation not applied), so the backend draws it under the same
//! transform as the outline and the angle stays relative to the element's box.

use kurbo::{Point, Rect, Vec2};
use peniko::{Brush, Color};
use station_core::element::{Element, Gradient, GradientKind};

/// How to fill an element's outline.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Nothing to fill (lines, arrows, images).
    None,
    Solid(Color),
    Linear {
        start: Point,
        end: Point,
        stops: [Color; 2],
    },
    Radial {
        center: Point,
        radius: f64,
        stops: [Color; 2],
    },
}

impl Paint {
    /// Convert to a peniko brush. `None` maps to a transparent solid.
    pub fn to_brush(&self) -> Brush {
        match self {
            Paint::None => Brush::Solid(Color::TRANSPARENT),
            Paint::Solid(color) => Brush::Solid(*color),
            Paint::Linear { start, end, stops } => {
                Brush::Gradient(peniko::Gradient::new_linear(*start, *end).with_stops(*stops))
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => Brush::Gradient(
                peniko::Gradient::new_radial(*center, *radius as f32).with_stops(*stops),
            ),
        }
    }
}

/// Line through the box center along `angle_degrees`, clipped to the box's
/// extent in that direction. 0° runs left to right, 90° top to bottom.
pub fn linear_endpoints(bounds: Rect, angle_degrees: f64) -> (Point, Point) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let half = (bounds.width() / 2.0 * cos).abs() + (bounds.height() / 2.0 * sin).abs();
    let offset = Vec2::new(cos, sin) * half;
    let center = bounds.center();
    (center - offset, center + offset)
}

fn gradient_paint(gradient: &Gradient, bounds: Rect) -> Paint {
    let stops = gradient.color_stops.map(Color::from);
    match gradient.kind {
        GradientKind::Linear => {
            let (start, end) = linear_endpoints(bounds, gradient.angle);
            Paint::Linear { start, end, stops }
        }
        GradientKind::Radial => Paint::Radial {
            center: bounds.center(),
            radius: bounds.width().max(bounds.height()) / 2.0,
            stops,
        },
    }
}

/// Resolve the fill of `element`. An enabled gradient overrides the flat fill.
pub fn resolve_fill(element: &Element) -> Paint {
    let local = element.bounds() - element.position().to_vec2();
    if let Some(gradient) = element.gradient() {
        return gradient_paint(gradient, local);
    }
    match element.fill() {
        Some(color) => Paint::Solid(color.into()),
        None => Paint::None,
    }
}

/// Stroke color and width, if the element draws one.
pub fn resolve_stroke(element: &Element) -> Option<(Color, f64)> {
    let (color, width) = match element {
        Element::Line(line) => (line.stroke, line.stroke_width),
        Element::Arrow(arrow) => (arrow.stroke, arrow.stroke_width),
        other => {
            let style = other.shape_style()?;
            (style.stroke, style.stroke_width)
        }
    };
    (width > 0.0 && color.a > 0).then(|| (color.into(), width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use station_core::element::{Color as ElementColor, ElementPatch};

    #[test]
    fn test_flat_fill() {
        let rect = Element::rect(10.0, 10.0, 100.0, 50.0);
        let fill = rect.fill().unwrap();
        assert_eq!(resolve_fill(&rect), Paint::Solid(fill.into()));
    }

    #[test]
    fn test_linear_gradient_endpoints() {
        let (start, end) = linear_endpoints(Rect::new(0.0, 0.0, 100.0, 50.0), 0.0);
        assert!((start.x - 0.0).abs() < 1e-9 && (start.y - 25.0).abs() < 1e-9);
        assert!((end.x - 100.0).abs() < 1e-9 && (end.y - 25.0).abs() < 1e-9);

        let (start, end) = linear_endpoints(Rect::new(0.0, 0.0, 100.0, 50.0), 90.0);
        assert!((start.x - 50.0).abs() < 1e-9 && start.y.abs() < 1e-9);
        assert!((end.x - 50.0).abs() < 1e-9 && (end.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_gradient_overrides_fill_in_local_space() {
        let mut rect = Element::rect(300.0, 300.0, 100.0, 100.0);
        rect.apply_patch(&ElementPatch::new().with_gradient(Gradient {
            angle: 0.0,
            ..Gradient::default()
        }));
        let Paint::Linear { start, end, .. } = resolve_fill(&rect) else {
            panic!("expected a linear gradient");
        };
        assert!((start.x - 0.0).abs() < 1e-9);
        assert!((end.x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_does_not_move_gradient() {
        let mut rect = Element::rect(0.0, 0.0, 100.0, 40.0);
        rect.apply_patch(&ElementPatch::new().with_gradient(Gradient::default()));
        let before = resolve_fill(&rect);
        rect.apply_patch(&ElementPatch::new().with_rotation(45.0));
        assert_eq!(resolve_fill(&rect), before);
    }

    #[test]
    fn test_stroke_only_when_visible() {
        let rect = Element::rect(0.0, 0.0, 10.0, 10.0);
        assert!(resolve_stroke(&rect).is_none());

        let mut stroked = rect.clone();
        stroked.apply_patch(&ElementPatch::new().with_stroke(ElementColor::black(), 3.0));
        let (_, width) = resolve_stroke(&stroked).unwrap();
        assert!((width - 3.0).abs() < f64::EPSILON);

        let line = Element::line(0.0, 0.0, vec![0.0, 0.0, 10.0, 10.0]).unwrap();
        assert!(resolve_stroke(&line).is_some());
        assert_eq!(resolve_fill(&line), Paint::None);
    }
}
