//! Element definitions for the design canvas.
//!
//! Every drawable primitive is a variant of [`Element`]. The variants share an
//! [`ElementBase`] (identity, box geometry, rotation, opacity and layer flags)
//! and add their own style payload. Geometry helpers work in two spaces:
//! *local* space has its origin at the element's `x`/`y` with rotation not
//! applied, *world* space is canvas coordinates.

mod arrow;
mod circle;
mod image;
mod line;
mod patch;
mod polygon;
mod rect;
mod star;
pub mod style;
mod text;

pub use arrow::ArrowElement;
pub use circle::CircleElement;
pub use image::{ImageElement, ImageFormat};
pub use line::LineElement;
pub use patch::ElementPatch;
pub use polygon::PolygonElement;
pub use rect::RectElement;
pub use star::StarElement;
pub use style::{
    Color, FontStyle, FontWeight, Gradient, GradientKind, Outline, Shadow, ShapeStyle,
    TextAlign, TextDecoration,
};
pub use text::TextElement;

use kurbo::{Affine, BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Smallest width or height an element may have after any transform.
pub const MIN_ELEMENT_SIZE: f64 = 5.0;

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

/// Attributes shared by every element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementBase {
    pub(crate) id: ElementId,
    /// Top-left corner, or center for [`Anchor::Center`] types.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, not normalized.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl ElementBase {
    /// Create a base with a fresh id. Sizes are lifted to [`MIN_ELEMENT_SIZE`].
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: clamp_size(width),
            height: clamp_size(height),
            rotation: 0.0,
            opacity: 1.0,
            name: name.into(),
            visible: true,
            locked: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = clamp_size(width);
        self.height = clamp_size(height);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// Clamp a dimension to the minimum element size. NaN also maps to the minimum.
pub fn clamp_size(value: f64) -> f64 {
    if value.is_nan() {
        MIN_ELEMENT_SIZE
    } else {
        value.max(MIN_ELEMENT_SIZE)
    }
}

/// `new / old`, or 1 when `old` cannot be divided by.
fn scale_ratio(new: f64, old: f64) -> f64 {
    if old > 0.0 && old.is_finite() { new / old } else { 1.0 }
}

/// Which point of the box `x`/`y` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Behaviour implemented by every element payload.
pub trait ElementTrait {
    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    fn anchor(&self) -> Anchor {
        Anchor::TopLeft
    }

    /// Box in local space.
    fn local_bounds(&self) -> Rect {
        let base = self.base();
        match self.anchor() {
            Anchor::TopLeft => Rect::new(0.0, 0.0, base.width, base.height),
            Anchor::Center => Rect::new(
                -base.width / 2.0,
                -base.height / 2.0,
                base.width / 2.0,
                base.height / 2.0,
            ),
        }
    }

    /// Outline in local space.
    fn local_path(&self) -> BezPath;

    /// Check if a local-space point hits this element.
    fn hit_test_local(&self, point: Point, tolerance: f64) -> bool {
        self.local_bounds()
            .inflate(tolerance, tolerance)
            .contains(point)
    }

    /// Apply the type-specific part of a patch. Base fields are handled by
    /// [`Element::apply_patch`].
    fn apply_patch(&mut self, patch: &ElementPatch);

    /// Scale type-specific geometry after the box was resized by `(sx, sy)`.
    fn rescale(&mut self, _sx: f64, _sy: f64) {}
}

/// Discriminant of [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rect,
    Circle,
    Triangle,
    Star,
    Polygon,
    Text,
    Image,
    Line,
    Arrow,
}

impl ElementKind {
    /// Default layer name for new elements of this kind.
    pub fn display_name(self) -> &'static str {
        match self {
            ElementKind::Rect => "Rectangle",
            ElementKind::Circle => "Circle",
            ElementKind::Triangle => "Triangle",
            ElementKind::Star => "Star",
            ElementKind::Polygon => "Polygon",
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Line => "Line",
            ElementKind::Arrow => "Arrow",
        }
    }
}

/// A drawable element, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Rect(RectElement),
    Circle(CircleElement),
    Triangle(PolygonElement),
    Star(StarElement),
    Polygon(PolygonElement),
    Text(TextElement),
    Image(ImageElement),
    Line(LineElement),
    Arrow(ArrowElement),
}

impl Element {
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Element::Rect(RectElement::new(x, y, width, height))
    }

    pub fn circle(cx: f64, cy: f64, diameter: f64) -> Self {
        Element::Circle(CircleElement::new(cx, cy, diameter))
    }

    pub fn triangle(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Element::Triangle(PolygonElement::triangle(cx, cy, width, height))
    }

    pub fn star(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Element::Star(StarElement::new(cx, cy, width, height))
    }

    pub fn polygon(cx: f64, cy: f64, width: f64, height: f64, sides: u32) -> Self {
        Element::Polygon(PolygonElement::new(cx, cy, width, height, sides))
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        Element::Text(TextElement::new(x, y, content))
    }

    /// Build a line from a flat `[x0, y0, x1, y1, ...]` list relative to `(x, y)`.
    pub fn line(x: f64, y: f64, points: Vec<f64>) -> crate::error::ElementResult<Self> {
        LineElement::new(x, y, points).map(Element::Line)
    }

    /// Build an arrow from a flat point list relative to `(x, y)`.
    pub fn arrow(x: f64, y: f64, points: Vec<f64>) -> crate::error::ElementResult<Self> {
        ArrowElement::new(x, y, points).map(Element::Arrow)
    }

    fn inner(&self) -> &dyn ElementTrait {
        match self {
            Element::Rect(e) => e,
            Element::Circle(e) => e,
            Element::Triangle(e) => e,
            Element::Star(e) => e,
            Element::Polygon(e) => e,
            Element::Text(e) => e,
            Element::Image(e) => e,
            Element::Line(e) => e,
            Element::Arrow(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ElementTrait {
        match self {
            Element::Rect(e) => e,
            Element::Circle(e) => e,
            Element::Triangle(e) => e,
            Element::Star(e) => e,
            Element::Polygon(e) => e,
            Element::Text(e) => e,
            Element::Image(e) => e,
            Element::Line(e) => e,
            Element::Arrow(e) => e,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Rect(_) => ElementKind::Rect,
            Element::Circle(_) => ElementKind::Circle,
            Element::Triangle(_) => ElementKind::Triangle,
            Element::Star(_) => ElementKind::Star,
            Element::Polygon(_) => ElementKind::Polygon,
            Element::Text(_) => ElementKind::Text,
            Element::Image(_) => ElementKind::Image,
            Element::Line(_) => ElementKind::Line,
            Element::Arrow(_) => ElementKind::Arrow,
        }
    }

    pub fn id(&self) -> ElementId {
        self.base().id
    }

    pub fn base(&self) -> &ElementBase {
        self.inner().base()
    }

    pub fn base_mut(&mut self) -> &mut ElementBase {
        self.inner_mut().base_mut()
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn is_visible(&self) -> bool {
        self.base().visible
    }

    pub fn is_locked(&self) -> bool {
        self.base().locked
    }

    pub fn anchor(&self) -> Anchor {
        self.inner().anchor()
    }

    pub fn position(&self) -> Point {
        self.base().position()
    }

    /// Axis-aligned bounding box in world space. Rotation is not applied.
    pub fn bounds(&self) -> Rect {
        self.inner().local_bounds() + self.position().to_vec2()
    }

    /// Local-to-world transform: rotation about the element's origin, then
    /// translation to `x`/`y`.
    pub fn transform(&self) -> Affine {
        let base = self.base();
        Affine::translate((base.x, base.y)) * Affine::rotate(base.rotation.to_radians())
    }

    /// World-space outline.
    pub fn to_path(&self) -> BezPath {
        let mut path = self.inner().local_path();
        path.apply_affine(self.transform());
        path
    }

    /// Check if a world-space point hits this element.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let local = self.transform().inverse() * point;
        self.inner().hit_test_local(local, tolerance)
    }

    /// Merge a partial change into this element.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        let old = (self.base().width, self.base().height);
        patch.apply_base(self.base_mut());
        let new = (self.base().width, self.base().height);
        if old != new {
            self.inner_mut().rescale(scale_ratio(new.0, old.0), scale_ratio(new.1, old.1));
        }
        self.inner_mut().apply_patch(patch);
    }

    pub fn translate(&mut self, delta: Vec2) {
        let base = self.base_mut();
        base.x += delta.x;
        base.y += delta.y;
    }

    pub fn set_position(&mut self, point: Point) {
        let base = self.base_mut();
        base.x = point.x;
        base.y = point.y;
    }

    /// Resize and move so the bounding box becomes `rect` (clamped to the
    /// minimum size, keeping `rect`'s top-left corner).
    pub fn set_bounds(&mut self, rect: Rect) {
        let rect = rect.abs();
        let old = (self.base().width, self.base().height);
        let anchor = self.anchor();
        let base = self.base_mut();
        base.set_size(rect.width(), rect.height());
        let (width, height) = (base.width, base.height);
        match anchor {
            Anchor::TopLeft => {
                base.x = rect.x0;
                base.y = rect.y0;
            }
            Anchor::Center => {
                base.x = rect.x0 + width / 2.0;
                base.y = rect.y0 + height / 2.0;
            }
        }
        if old != (width, height) {
            self.inner_mut().rescale(scale_ratio(width, old.0), scale_ratio(height, old.1));
        }
    }

    /// Restore the size, opacity and point-list invariants on an element that
    /// did not come through a constructor, such as a deserialized payload.
    pub fn sanitize(&mut self) -> crate::error::ElementResult<()> {
        match self {
            Element::Line(e) => line::validate_points(&e.points)?,
            Element::Arrow(e) => line::validate_points(&e.points)?,
            _ => {}
        }
        let base = self.base_mut();
        base.set_size(base.width, base.height);
        base.set_opacity(if base.opacity.is_nan() { 1.0 } else { base.opacity });
        Ok(())
    }

    /// Replace the id with a fresh one (for paste and duplicate).
    pub fn regenerate_id(&mut self) {
        self.base_mut().id = Uuid::new_v4();
    }

    /// Fill and stroke of closed shapes.
    pub fn shape_style(&self) -> Option<&ShapeStyle> {
        match self {
            Element::Rect(e) => Some(&e.style),
            Element::Circle(e) => Some(&e.style),
            Element::Triangle(e) | Element::Polygon(e) => Some(&e.style),
            Element::Star(e) => Some(&e.style),
            _ => None,
        }
    }

    /// Flat fill color, if this element type has one.
    pub fn fill(&self) -> Option<Color> {
        match self {
            Element::Text(t) => Some(t.fill),
            _ => self.shape_style().map(|s| s.fill),
        }
    }

    /// Enabled gradient overriding the flat fill, if any.
    pub fn gradient(&self) -> Option<&Gradient> {
        self.shape_style().and_then(|s| s.active_gradient())
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    (point - (a + seg * t)).hypot()
}

/// Minimum distance from a point to a polyline.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Even-odd point-in-polygon test.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    let mut inside = false;
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Closed path through the given vertices.
pub(crate) fn closed_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = vertices.split_first() {
        path.move_to(*first);
        for v in rest {
            path.line_to(*v);
        }
        path.close_path();
    }
    path
}

/// Hit test against a closed polygon, including a tolerance band around its edges.
pub(crate) fn hit_test_polygon(point: Point, vertices: &[Point], tolerance: f64) -> bool {
    if point_in_polygon(point, vertices) {
        return true;
    }
    let mut ring = vertices.to_vec();
    if let Some(first) = vertices.first() {
        ring.push(*first);
    }
    point_to_polyline_dist(point, &ring) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_clamps_size() {
        let base = ElementBase::new("Rectangle", 0.0, 0.0, 2.0, -10.0);
        assert!((base.width - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((base.height - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!(base.visible);
        assert!(!base.locked);
    }

    #[test]
    fn test_bounds_respect_anchor() {
        let rect = Element::rect(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.bounds(), Rect::new(10.0, 20.0, 110.0, 70.0));

        let circle = Element::circle(100.0, 100.0, 50.0);
        assert_eq!(circle.bounds(), Rect::new(75.0, 75.0, 125.0, 125.0));
    }

    #[test]
    fn test_hit_test_rotated_rect() {
        let mut rect = Element::rect(0.0, 0.0, 100.0, 10.0);
        assert!(rect.hit_test(Point::new(50.0, 5.0), 0.0));
        rect.base_mut().rotation = 90.0;
        // Rotating about the top-left corner swings the bar below the origin.
        assert!(!rect.hit_test(Point::new(50.0, 5.0), 0.0));
        assert!(rect.hit_test(Point::new(-5.0, 50.0), 0.0));
    }

    #[test]
    fn test_set_bounds_center_anchor() {
        let mut star = Element::star(0.0, 0.0, 10.0, 10.0);
        star.set_bounds(Rect::new(100.0, 100.0, 140.0, 120.0));
        assert_eq!(star.bounds(), Rect::new(100.0, 100.0, 140.0, 120.0));
        assert!((star.base().x - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_bounds_clamps() {
        let mut rect = Element::rect(0.0, 0.0, 100.0, 100.0);
        rect.set_bounds(Rect::new(10.0, 10.0, 12.0, 200.0));
        assert!((rect.base().width - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((rect.base().height - 190.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_regenerate_id() {
        let mut rect = Element::rect(0.0, 0.0, 10.0, 10.0);
        let before = rect.id();
        rect.regenerate_id();
        assert_ne!(rect.id(), before);
    }

    #[test]
    fn test_serde_tagged_by_type() {
        let rect = Element::rect(1.0, 2.0, 30.0, 40.0);
        let json = serde_json::to_value(&rect).unwrap();
        assert_eq!(json["type"], "rect");
        assert_eq!(json["x"], 1.0);
        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, rect);
    }

    #[test]
    fn test_sanitize_lifts_degenerate_sizes() {
        let mut line = Element::line(0.0, 0.0, vec![0.0, 0.0, 10.0, 10.0]).unwrap();
        let base = line.base_mut();
        base.width = 0.0;
        base.height = -3.0;
        base.opacity = 4.0;
        line.sanitize().unwrap();
        assert!((line.base().width - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((line.base().height - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((line.base().opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sanitize_rejects_bad_points() {
        let mut line = Element::line(0.0, 0.0, vec![0.0, 0.0, 10.0, 10.0]).unwrap();
        if let Element::Line(inner) = &mut line {
            inner.points = vec![1.0, 2.0, 3.0];
        }
        assert!(line.sanitize().is_err());
    }

    #[test]
    fn test_resize_from_zero_size_stays_finite() {
        let mut line = Element::line(0.0, 0.0, vec![0.0, 0.0, 10.0, 10.0]).unwrap();
        line.base_mut().width = 0.0;
        line.apply_patch(&ElementPatch::size(100.0, 100.0));
        let Element::Line(inner) = &line else {
            panic!("expected a line");
        };
        assert!(inner.points.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_point_in_polygon() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Point::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(Point::new(15.0, 5.0), &square));
        assert!(hit_test_polygon(Point::new(11.0, 5.0), &square, 2.0));
    }
}
