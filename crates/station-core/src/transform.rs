//! Drag, resize and rotate of selected elements.
//!
//! Two paths end in the same element state. Engine-driven gestures run a
//! [`DragSession`] from pointer events. A backend with its own transformer
//! widget reports final scale and rotation through [`NodeTransform`] and
//! [`end_transform`].

use kurbo::{Point, Rect, Vec2};

use crate::element::{Element, ElementId, MIN_ELEMENT_SIZE};
use crate::handles::HandleKind;
use crate::snap::GridConfig;

/// Final dimension after a transformer scale: never below the minimum.
pub fn resize_dimension(original: f64, scale: f64) -> f64 {
    let scaled = original * scale.abs();
    if scaled.is_nan() {
        MIN_ELEMENT_SIZE
    } else {
        scaled.max(MIN_ELEMENT_SIZE)
    }
}

/// Final node state reported by a backend transformer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Degrees added to the rotation at gesture start.
    pub rotation_delta: f64,
}

/// Commit backend transformer results into `elements`.
///
/// `originals` holds the elements as they were when the transform began.
/// Returns the ids whose backend scale must be reset to 1.
pub fn end_transform(
    elements: &mut [Element],
    originals: &[Element],
    nodes: &[NodeTransform],
) -> Vec<ElementId> {
    let mut reset = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Some(original) = originals.iter().find(|e| e.id() == node.id) else {
            log::debug!("transform end for unknown original {}", node.id);
            continue;
        };
        let Some(element) = elements.iter_mut().find(|e| e.id() == node.id) else {
            continue;
        };
        if element.is_locked() {
            continue;
        }
        let base = original.base();
        let width = resize_dimension(base.width, node.scale_x);
        let height = resize_dimension(base.height, node.scale_y);

        *element = original.clone();
        let top_left = element.bounds().origin();
        element.set_bounds(Rect::from_origin_size(top_left, (width, height)));
        element.set_position(Point::new(node.x, node.y));
        element.base_mut().rotation = base.rotation + node.rotation_delta;
        reset.push(node.id);
    }
    reset
}

/// Move the sides of `bounds` selected by `handle` by `delta`.
///
/// A side stops at [`MIN_ELEMENT_SIZE`] from its opposite side. The opposite
/// side never moves.
pub fn resize_bounds(bounds: Rect, handle: HandleKind, delta: Vec2) -> Rect {
    let (left, top, right, bottom) = handle.moving_sides();
    let mut rect = bounds;
    if left {
        rect.x0 = (bounds.x0 + delta.x).min(bounds.x1 - MIN_ELEMENT_SIZE);
    }
    if right {
        rect.x1 = (bounds.x1 + delta.x).max(bounds.x0 + MIN_ELEMENT_SIZE);
    }
    if top {
        rect.y0 = (bounds.y0 + delta.y).min(bounds.y1 - MIN_ELEMENT_SIZE);
    }
    if bottom {
        rect.y1 = (bounds.y1 + delta.y).max(bounds.y0 + MIN_ELEMENT_SIZE);
    }
    rect
}

/// Map `rect` from the `from` frame into the `to` frame proportionally.
pub fn remap_rect(rect: Rect, from: Rect, to: Rect) -> Rect {
    let sx = if from.width() > 0.0 { to.width() / from.width() } else { 1.0 };
    let sy = if from.height() > 0.0 { to.height() / from.height() } else { 1.0 };
    Rect::new(
        to.x0 + (rect.x0 - from.x0) * sx,
        to.y0 + (rect.y0 - from.y0) * sy,
        to.x0 + (rect.x1 - from.x0) * sx,
        to.y0 + (rect.y1 - from.y0) * sy,
    )
}

/// Angle of `point` around `pivot`, in degrees.
pub fn angle_around(pivot: Point, point: Point) -> f64 {
    (point.y - pivot.y).atan2(point.x - pivot.x).to_degrees()
}

/// What an engine-driven gesture does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragKind {
    Move,
    Resize(HandleKind),
    Rotate { pivot: Point },
}

/// An in-progress drag over a set of elements.
///
/// Elements are mutated live while dragging; nothing is committed until the
/// caller finishes the session.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub kind: DragKind,
    pub start: Point,
    pub current: Point,
    /// The element under the pointer when a move started.
    pub pressed: Option<ElementId>,
    /// Elements as they were at gesture start. Locked elements are excluded.
    originals: Vec<Element>,
    /// Combined bounds of `originals` at gesture start.
    group: Rect,
}

impl DragSession {
    /// Start a session over `targets` (already filtered to movable elements).
    /// Returns `None` when there is nothing to move.
    pub fn begin(kind: DragKind, start: Point, targets: Vec<Element>) -> Option<Self> {
        let group = targets
            .iter()
            .map(Element::bounds)
            .reduce(|acc, r| acc.union(r))?;
        Some(Self {
            kind,
            start,
            current: start,
            pressed: None,
            originals: targets,
            group,
        })
    }

    pub fn with_pressed(mut self, id: ElementId) -> Self {
        self.pressed = Some(id);
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.originals.iter().map(Element::id)
    }

    pub fn originals(&self) -> &[Element] {
        &self.originals
    }

    pub fn delta(&self) -> Vec2 {
        self.current - self.start
    }

    pub fn has_moved(&self) -> bool {
        self.delta() != Vec2::ZERO
    }

    /// Move the pointer to `point` and update the elements live.
    pub fn update(&mut self, elements: &mut [Element], point: Point) {
        self.current = point;
        let delta = self.delta();
        match self.kind {
            DragKind::Move => {
                self.for_each(elements, |element, original| {
                    element.set_position(original.position() + delta);
                });
            }
            DragKind::Resize(handle) => {
                let group = self.group;
                let target = resize_bounds(group, handle, delta);
                self.for_each(elements, |element, original| {
                    *element = original.clone();
                    element.set_bounds(remap_rect(original.bounds(), group, target));
                });
            }
            DragKind::Rotate { pivot } => {
                let spin = angle_around(pivot, point) - angle_around(pivot, self.start);
                self.for_each(elements, |element, original| {
                    element.base_mut().rotation = original.base().rotation + spin;
                });
            }
        }
    }

    /// Put every element back where it started.
    pub fn revert(&self, elements: &mut [Element]) {
        self.for_each(elements, |element, original| *element = original.clone());
    }

    /// End the gesture. Moves snap each element's position to the grid when
    /// snapping is on. Returns whether anything changed.
    pub fn finish(&self, elements: &mut [Element], grid: &GridConfig) -> bool {
        if !self.has_moved() {
            return false;
        }
        if self.kind == DragKind::Move && grid.snap {
            self.for_each(elements, |element, _| {
                let snapped = grid.apply(element.position());
                element.set_position(snapped);
            });
        }
        true
    }

    fn for_each(&self, elements: &mut [Element], mut f: impl FnMut(&mut Element, &Element)) {
        for original in &self.originals {
            if let Some(element) = elements.iter_mut().find(|e| e.id() == original.id()) {
                f(element, original);
            }
        }
    }
}
