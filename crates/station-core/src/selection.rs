//! Selection set, marquee selection and point hit-testing.

use std::collections::HashSet;

use kurbo::{Point, Rect};

use crate::element::{Element, ElementId};

/// Hit tolerance in canvas units for point picking.
pub const HIT_TOLERANCE: f64 = 4.0;

/// The set of selected element ids.
///
/// Membership is unordered; [`Selection::ids_in_order`] reports ids in the
/// scene's z-order so callers see a stable sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single id.
    pub fn set_single(&mut self, id: ElementId) {
        self.ids.clear();
        self.ids.insert(id);
    }

    /// Add an id. Returns `false` if it was already selected.
    pub fn add(&mut self, id: ElementId) -> bool {
        self.ids.insert(id)
    }

    /// Flip membership of an id. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: ElementId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn replace(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.ids.clear();
        self.ids.extend(ids);
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.ids.extend(ids);
    }

    pub fn remove(&mut self, id: &ElementId) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop ids that no longer name an element. Returns how many were pruned.
    pub fn prune(&mut self, elements: &[Element]) -> usize {
        let before = self.ids.len();
        let present: HashSet<ElementId> = elements.iter().map(Element::id).collect();
        self.ids.retain(|id| present.contains(id));
        before - self.ids.len()
    }

    /// Selected ids in z-order (bottom-most first).
    pub fn ids_in_order(&self, elements: &[Element]) -> Vec<ElementId> {
        elements
            .iter()
            .map(Element::id)
            .filter(|id| self.ids.contains(id))
            .collect()
    }

    /// Selected elements in z-order.
    pub fn elements<'a>(&self, elements: &'a [Element]) -> Vec<&'a Element> {
        elements
            .iter()
            .filter(|e| self.ids.contains(&e.id()))
            .collect()
    }
}

/// An in-progress marquee (rubber-band) drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeState {
    pub origin: Point,
    pub current: Point,
    /// Shift was held at gesture start: union with the prior selection.
    pub additive: bool,
}

impl MarqueeState {
    pub fn new(origin: Point, additive: bool) -> Self {
        Self {
            origin,
            current: origin,
            additive,
        }
    }

    /// The normalized marquee rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.origin, self.current)
    }
}

/// Open-interval overlap: rectangles that only share an edge do not overlap.
pub fn overlaps_open(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Ids of visible elements whose bounds overlap `rect`, in z-order.
pub fn marquee_hits(elements: &[Element], rect: Rect) -> Vec<ElementId> {
    elements
        .iter()
        .filter(|e| e.is_visible() && overlaps_open(e.bounds(), rect))
        .map(Element::id)
        .collect()
}

/// The top-most visible element under `point`, if any.
pub fn element_at(elements: &[Element], point: Point, tolerance: f64) -> Option<ElementId> {
    elements
        .iter()
        .rev()
        .find(|e| e.is_visible() && e.hit_test(point, tolerance))
        .map(Element::id)
}
