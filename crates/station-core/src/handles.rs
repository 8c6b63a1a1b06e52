//! Transformer handles bound to the current selection.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId};
use crate::selection::Selection;

/// Handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 10.0;
/// Handle hit tolerance in screen pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 12.0;
/// Distance from the top edge to the rotation handle, in canvas units.
pub const ROTATE_HANDLE_OFFSET: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Type of transformer handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Resizes both axes, pinning the opposite corner.
    Corner(Corner),
    /// Resizes one axis, pinning the opposite edge.
    Edge(Edge),
    /// Rotates about the box center.
    Rotate,
}

impl HandleKind {
    /// Which sides of the box this handle moves: (left, top, right, bottom).
    pub fn moving_sides(self) -> (bool, bool, bool, bool) {
        match self {
            HandleKind::Corner(Corner::TopLeft) => (true, true, false, false),
            HandleKind::Corner(Corner::TopRight) => (false, true, true, false),
            HandleKind::Corner(Corner::BottomLeft) => (true, false, false, true),
            HandleKind::Corner(Corner::BottomRight) => (false, false, true, true),
            HandleKind::Edge(Edge::Top) => (false, true, false, false),
            HandleKind::Edge(Edge::Right) => (false, false, true, false),
            HandleKind::Edge(Edge::Bottom) => (false, false, false, true),
            HandleKind::Edge(Edge::Left) => (true, false, false, false),
            HandleKind::Rotate => (false, false, false, false),
        }
    }
}

/// A handle with its position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Point,
    pub kind: HandleKind,
}

impl Handle {
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// `tolerance` should already be divided by the zoom factor.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        (point - self.position).hypot2() <= tolerance * tolerance
    }
}

/// Handles for a bounding box: four corners, four edge midpoints and the
/// rotation handle above the top edge.
pub fn box_handles(bounds: Rect) -> Vec<Handle> {
    let center = bounds.center();
    vec![
        Handle::new(Point::new(bounds.x0, bounds.y0), HandleKind::Corner(Corner::TopLeft)),
        Handle::new(Point::new(bounds.x1, bounds.y0), HandleKind::Corner(Corner::TopRight)),
        Handle::new(Point::new(bounds.x0, bounds.y1), HandleKind::Corner(Corner::BottomLeft)),
        Handle::new(Point::new(bounds.x1, bounds.y1), HandleKind::Corner(Corner::BottomRight)),
        Handle::new(Point::new(center.x, bounds.y0), HandleKind::Edge(Edge::Top)),
        Handle::new(Point::new(bounds.x1, center.y), HandleKind::Edge(Edge::Right)),
        Handle::new(Point::new(center.x, bounds.y1), HandleKind::Edge(Edge::Bottom)),
        Handle::new(Point::new(bounds.x0, center.y), HandleKind::Edge(Edge::Left)),
        Handle::new(
            Point::new(center.x, bounds.y0 - ROTATE_HANDLE_OFFSET),
            HandleKind::Rotate,
        ),
    ]
}

/// The transformer's view of the selection: which elements it manipulates
/// and where its handles are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformerBinding {
    /// Selected elements that can be transformed, in z-order.
    pub nodes: Vec<ElementId>,
    /// Combined bounds of `nodes`.
    pub bounds: Option<Rect>,
    pub handles: Vec<Handle>,
}

impl TransformerBinding {
    /// Bind to the selected elements that are visible and unlocked.
    pub fn bind(elements: &[Element], selection: &Selection) -> Self {
        let nodes: Vec<&Element> = elements
            .iter()
            .filter(|e| selection.contains(&e.id()) && e.is_visible() && !e.is_locked())
            .collect();
        let Some(bounds) = combined_bounds(nodes.iter().copied()) else {
            return Self::default();
        };
        Self {
            nodes: nodes.iter().map(|e| e.id()).collect(),
            bounds: Some(bounds),
            handles: box_handles(bounds),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The handle under `point`, if any.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> Option<HandleKind> {
        self.handles
            .iter()
            .find(|h| h.hit_test(point, tolerance))
            .map(|h| h.kind)
    }
}

/// Union of the bounds of `elements`, or `None` when empty.
pub fn combined_bounds<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Option<Rect> {
    elements
        .into_iter()
        .map(Element::bounds)
        .reduce(|acc, r| acc.union(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementPatch;

    #[test]
    fn test_empty_selection_has_no_handles() {
        let elements = vec![Element::rect(0.0, 0.0, 10.0, 10.0)];
        let binding = TransformerBinding::bind(&elements, &Selection::new());
        assert!(binding.is_empty());
        assert!(binding.handles.is_empty());
        assert!(binding.bounds.is_none());
    }

    #[test]
    fn test_binding_covers_selection() {
        let elements = vec![
            Element::rect(0.0, 0.0, 10.0, 10.0),
            Element::rect(50.0, 20.0, 10.0, 10.0),
        ];
        let mut selection = Selection::new();
        selection.replace(elements.iter().map(Element::id));
        let binding = TransformerBinding::bind(&elements, &selection);
        assert_eq!(binding.nodes.len(), 2);
        assert_eq!(binding.bounds, Some(Rect::new(0.0, 0.0, 60.0, 30.0)));
        assert_eq!(binding.handles.len(), 9);
    }

    #[test]
    fn test_locked_elements_get_no_handles() {
        let mut locked = Element::rect(0.0, 0.0, 10.0, 10.0);
        locked.apply_patch(&ElementPatch::new().with_locked(true));
        let elements = vec![locked];
        let mut selection = Selection::new();
        selection.set_single(elements[0].id());
        let binding = TransformerBinding::bind(&elements, &selection);
        assert!(binding.is_empty());
    }

    #[test]
    fn test_handle_hit_test() {
        let elements = vec![Element::rect(0.0, 0.0, 100.0, 100.0)];
        let mut selection = Selection::new();
        selection.set_single(elements[0].id());
        let binding = TransformerBinding::bind(&elements, &selection);
        assert_eq!(
            binding.hit_test(Point::new(101.0, 99.0), 4.0),
            Some(HandleKind::Corner(Corner::BottomRight))
        );
        assert_eq!(
            binding.hit_test(Point::new(50.0, -25.0), 4.0),
            Some(HandleKind::Rotate)
        );
        assert_eq!(binding.hit_test(Point::new(50.0, 50.0), 4.0), None);
    }
}
