//! Pointer dispatch: clicks, drags, marquee and creation gestures.
//!
//! Points are in canvas coordinates. The host converts screen positions
//! through the [`Viewport`](crate::viewport::Viewport) first.

use kurbo::{Point, Rect};

use super::Scene;
use crate::element::{Element, ElementId};
use crate::handles::{HANDLE_HIT_TOLERANCE, HandleKind};
use crate::input::{Modifiers, PointerAction};
use crate::selection::{MarqueeState, marquee_hits};
use crate::tools::{ToolKind, create_shape_at};
use crate::transform::{DragKind, DragSession, NodeTransform, end_transform};

/// A gesture between pointer-down and pointer-up.
#[derive(Debug, Clone)]
pub enum Gesture {
    Drag(DragSession),
    Marquee(MarqueeState),
    /// Line/arrow draft; its state lives in the tool manager.
    Draft,
    /// A backend transformer owns the gesture; holds the pre-gesture elements.
    External(Vec<Element>),
}

impl Scene {
    /// Pointer pressed, resolving the target with the engine's hit-test.
    pub fn pointer_down(&mut self, point: Point, modifiers: Modifiers) -> PointerAction {
        let target = self.element_at(point);
        self.pointer_down_on(point, target, modifiers)
    }

    /// Pointer pressed over `target`, as resolved by the rendering backend.
    pub fn pointer_down_on(
        &mut self,
        point: Point,
        target: Option<ElementId>,
        modifiers: Modifiers,
    ) -> PointerAction {
        if self.gesture.is_some() {
            log::debug!("pointer down during a gesture, cancelling it");
            self.cancel_gesture();
        }
        let tool = self.tools.current_tool;
        match tool {
            ToolKind::Select => self.select_down(point, target, modifiers),
            ToolKind::Line | ToolKind::Arrow => {
                let start = self.grid.apply(point);
                self.tools.begin(start);
                self.gesture = Some(Gesture::Draft);
                PointerAction::Draft
            }
            ToolKind::Image => PointerAction::ImageRequested(self.request_image(point)),
            _ => {
                let at = self.grid.apply(point);
                let Some(element) = create_shape_at(tool, at) else {
                    return PointerAction::None;
                };
                let id = element.id();
                if !self.add_element(element) {
                    return PointerAction::None;
                }
                self.selection.set_single(id);
                self.tools.set_tool(ToolKind::Select);
                PointerAction::Placed(id)
            }
        }
    }

    fn select_down(
        &mut self,
        point: Point,
        target: Option<ElementId>,
        modifiers: Modifiers,
    ) -> PointerAction {
        let binding = self.transformer();
        let tolerance = self.viewport.canvas_tolerance(HANDLE_HIT_TOLERANCE);
        if let (Some(handle), Some(bounds)) = (binding.hit_test(point, tolerance), binding.bounds) {
            let kind = match handle {
                HandleKind::Rotate => DragKind::Rotate {
                    pivot: bounds.center(),
                },
                other => DragKind::Resize(other),
            };
            let targets = self.movable(&binding.nodes);
            if let Some(session) = DragSession::begin(kind, point, targets) {
                self.gesture = Some(Gesture::Drag(session));
                return PointerAction::Transform(handle);
            }
        }

        let target = target.filter(|id| self.index_of(*id).is_some());
        let Some(id) = target else {
            self.gesture = Some(Gesture::Marquee(MarqueeState::new(point, modifiers.shift)));
            return PointerAction::Marquee;
        };

        if modifiers.shift {
            self.selection.toggle(id);
            return PointerAction::Selected;
        }
        if !self.selection.contains(&id) {
            self.selection.set_single(id);
        }
        let ids = self.selected_ids();
        let targets = self.movable(&ids);
        match DragSession::begin(DragKind::Move, point, targets) {
            Some(session) => {
                self.gesture = Some(Gesture::Drag(session.with_pressed(id)));
                PointerAction::Drag
            }
            None => {
                self.selection.set_single(id);
                PointerAction::Selected
            }
        }
    }

    /// Copies of the visible, unlocked elements among `ids`.
    fn movable(&self, ids: &[ElementId]) -> Vec<Element> {
        self.elements
            .iter()
            .filter(|e| ids.contains(&e.id()) && e.is_visible() && !e.is_locked())
            .cloned()
            .collect()
    }

    pub fn pointer_move(&mut self, point: Point) {
        match &mut self.gesture {
            Some(Gesture::Drag(session)) => session.update(&mut self.elements, point),
            Some(Gesture::Marquee(marquee)) => marquee.current = point,
            Some(Gesture::Draft) => self.tools.update(point),
            Some(Gesture::External(_)) | None => {}
        }
    }

    /// Pointer released: finish the gesture and commit whatever it changed.
    pub fn pointer_up(&mut self, point: Point) {
        match self.gesture.take() {
            Some(Gesture::Drag(mut session)) => {
                session.update(&mut self.elements, point);
                if session.finish(&mut self.elements, &self.grid) {
                    self.commit();
                } else if let Some(id) = session.pressed {
                    // A click without motion selects only the pressed element.
                    self.selection.set_single(id);
                }
            }
            Some(Gesture::Marquee(mut marquee)) => {
                marquee.current = point;
                self.finish_marquee(marquee);
            }
            Some(Gesture::Draft) => {
                let end = self.grid.apply(point);
                if let Some(element) = self.tools.end(end) {
                    let id = element.id();
                    if self.add_element(element) {
                        self.selection.set_single(id);
                    }
                }
            }
            Some(external @ Gesture::External(_)) => self.gesture = Some(external),
            None => {}
        }
    }

    fn finish_marquee(&mut self, marquee: MarqueeState) {
        if marquee.origin == marquee.current {
            if !marquee.additive {
                self.selection.clear();
            }
            return;
        }
        let hits = marquee_hits(&self.elements, marquee.rect());
        if marquee.additive {
            self.selection.extend(hits);
        } else {
            self.selection.replace(hits);
        }
    }

    /// Abort the in-flight gesture without touching history. A drag is
    /// reverted to its start positions. Returns whether anything was aborted.
    pub fn cancel_gesture(&mut self) -> bool {
        match self.gesture.take() {
            Some(Gesture::Drag(session)) => {
                session.revert(&mut self.elements);
                true
            }
            Some(Gesture::Draft) => {
                self.tools.cancel();
                true
            }
            Some(Gesture::External(originals)) => {
                for original in originals {
                    if let Some(e) = self.elements.iter_mut().find(|e| e.id() == original.id()) {
                        *e = original;
                    }
                }
                true
            }
            Some(Gesture::Marquee(_)) => true,
            None => false,
        }
    }

    /// Drop any gesture; the element list is about to be replaced.
    pub(super) fn abandon_gesture(&mut self) {
        if let Some(Gesture::Draft) = self.gesture {
            self.tools.cancel();
        }
        self.gesture = None;
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// The marquee rectangle while one is being dragged.
    pub fn marquee(&self) -> Option<Rect> {
        match &self.gesture {
            Some(Gesture::Marquee(m)) => Some(m.rect()),
            _ => None,
        }
    }

    /// Live position update from a backend drag (no commit).
    pub fn drag_element(&mut self, id: ElementId, position: Point) -> bool {
        match self.elements.iter_mut().find(|e| e.id() == id) {
            Some(element) if !element.is_locked() => {
                element.set_position(position);
                true
            }
            _ => false,
        }
    }

    /// Backend drag released: snap if enabled, then commit.
    pub fn end_drag(&mut self, id: ElementId) {
        let snap = self.grid;
        let Some(element) = self.elements.iter_mut().find(|e| e.id() == id) else {
            return;
        };
        if element.is_locked() {
            return;
        }
        let snapped = snap.apply(element.position());
        element.set_position(snapped);
        self.commit();
    }

    /// A backend transformer started on the bound nodes.
    pub fn begin_transform(&mut self) {
        let ids = self.transformer().nodes;
        self.gesture = Some(Gesture::External(self.movable(&ids)));
    }

    /// A backend transformer finished. Applies the minimum-size clamp and
    /// commits once. Returns the ids whose backend scale must be reset to 1.
    pub fn finish_transform(&mut self, nodes: &[NodeTransform]) -> Vec<ElementId> {
        let originals = match self.gesture.take() {
            Some(Gesture::External(originals)) => originals,
            other => {
                self.gesture = other;
                self.movable(&nodes.iter().map(|n| n.id).collect::<Vec<_>>())
            }
        };
        let reset = end_transform(&mut self.elements, &originals, nodes);
        if !reset.is_empty() {
            self.commit();
        }
        reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementPatch;

    fn scene_with_rect() -> (Scene, ElementId) {
        let mut scene = Scene::new();
        let rect = Element::rect(100.0, 100.0, 100.0, 100.0);
        let id = rect.id();
        scene.add_element(rect);
        (scene, id)
    }

    #[test]
    fn test_click_selects_and_drag_commits_once() {
        let (mut scene, id) = scene_with_rect();
        assert_eq!(scene.pointer_down(Point::new(150.0, 150.0), Modifiers::NONE), PointerAction::Drag);
        assert_eq!(scene.selected_ids(), vec![id]);
        scene.pointer_move(Point::new(160.0, 150.0));
        scene.pointer_move(Point::new(170.0, 170.0));
        scene.pointer_up(Point::new(170.0, 170.0));
        assert_eq!(scene.element(id).unwrap().position(), Point::new(120.0, 120.0));

        scene.undo();
        assert_eq!(scene.element(id).unwrap().position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_click_without_motion_does_not_commit() {
        let (mut scene, _) = scene_with_rect();
        scene.pointer_down(Point::new(150.0, 150.0), Modifiers::NONE);
        scene.pointer_up(Point::new(150.0, 150.0));
        scene.undo();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_plain_click_in_group_selects_one() {
        let mut scene = Scene::new();
        let a = Element::rect(0.0, 0.0, 50.0, 50.0);
        let b = Element::rect(100.0, 0.0, 50.0, 50.0);
        let (a_id, b_id) = (a.id(), b.id());
        scene.add_element(a);
        scene.add_element(b);
        scene.select_multiple([a_id, b_id]);

        assert_eq!(scene.pointer_down(Point::new(25.0, 25.0), Modifiers::NONE), PointerAction::Drag);
        assert_eq!(scene.selected_ids(), vec![a_id, b_id]);
        scene.pointer_up(Point::new(25.0, 25.0));
        assert_eq!(scene.selected_ids(), vec![a_id]);
    }

    #[test]
    fn test_group_drag_keeps_selection() {
        let mut scene = Scene::new();
        let a = Element::rect(0.0, 0.0, 50.0, 50.0);
        let b = Element::rect(100.0, 0.0, 50.0, 50.0);
        let (a_id, b_id) = (a.id(), b.id());
        scene.add_element(a);
        scene.add_element(b);
        scene.select_multiple([a_id, b_id]);

        scene.pointer_down(Point::new(25.0, 25.0), Modifiers::NONE);
        scene.pointer_move(Point::new(35.0, 25.0));
        scene.pointer_up(Point::new(35.0, 25.0));
        assert_eq!(scene.selected_ids(), vec![a_id, b_id]);
        assert_eq!(scene.element(b_id).unwrap().position(), Point::new(110.0, 0.0));
    }

    #[test]
    fn test_locked_element_selects_but_does_not_move() {
        let (mut scene, id) = scene_with_rect();
        scene.update_element(id, &ElementPatch::new().with_locked(true));
        let action = scene.pointer_down(Point::new(150.0, 150.0), Modifiers::NONE);
        assert_eq!(action, PointerAction::Selected);
        scene.pointer_move(Point::new(300.0, 300.0));
        scene.pointer_up(Point::new(300.0, 300.0));
        assert_eq!(scene.element(id).unwrap().position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_empty_click_clears_unless_shift() {
        let (mut scene, id) = scene_with_rect();
        scene.set_selected_id(id);
        scene.pointer_down(Point::new(500.0, 500.0), Modifiers::SHIFT);
        scene.pointer_up(Point::new(500.0, 500.0));
        assert_eq!(scene.selected_ids(), vec![id]);

        scene.pointer_down(Point::new(500.0, 500.0), Modifiers::NONE);
        scene.pointer_up(Point::new(500.0, 500.0));
        assert!(scene.selected_ids().is_empty());
    }

    #[test]
    fn test_shift_click_toggles() {
        let (mut scene, id) = scene_with_rect();
        scene.pointer_down(Point::new(150.0, 150.0), Modifiers::SHIFT);
        scene.pointer_up(Point::new(150.0, 150.0));
        assert!(scene.is_selected(id));
        scene.pointer_down(Point::new(150.0, 150.0), Modifiers::SHIFT);
        scene.pointer_up(Point::new(150.0, 150.0));
        assert!(!scene.is_selected(id));
    }

    #[test]
    fn test_marquee_replace_and_union() {
        let mut scene = Scene::new();
        let a = Element::rect(0.0, 0.0, 50.0, 50.0);
        let b = Element::rect(200.0, 0.0, 50.0, 50.0);
        let (a_id, b_id) = (a.id(), b.id());
        scene.add_element(a);
        scene.add_element(b);

        scene.pointer_down(Point::new(-10.0, -10.0), Modifiers::NONE);
        scene.pointer_move(Point::new(60.0, 60.0));
        assert!(scene.marquee().is_some());
        scene.pointer_up(Point::new(60.0, 60.0));
        assert_eq!(scene.selected_ids(), vec![a_id]);

        scene.pointer_down(Point::new(190.0, -10.0), Modifiers::SHIFT);
        scene.pointer_up(Point::new(260.0, 60.0));
        assert_eq!(scene.selected_ids(), vec![a_id, b_id]);
    }

    #[test]
    fn test_escape_reverts_drag() {
        let (mut scene, id) = scene_with_rect();
        scene.pointer_down(Point::new(150.0, 150.0), Modifiers::NONE);
        scene.pointer_move(Point::new(250.0, 250.0));
        assert!(scene.cancel_gesture());
        assert_eq!(scene.element(id).unwrap().position(), Point::new(100.0, 100.0));
        assert!(!scene.cancel_gesture());
        scene.undo();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_place_shape_switches_to_select() {
        let mut scene = Scene::new();
        scene.set_tool(ToolKind::Rect);
        let action = scene.pointer_down(Point::new(10.0, 10.0), Modifiers::NONE);
        let PointerAction::Placed(id) = action else {
            panic!("expected placement, got {action:?}");
        };
        assert_eq!(scene.selected_ids(), vec![id]);
        assert_eq!(scene.tool(), ToolKind::Select);
        assert!(scene.can_undo());
    }

    #[test]
    fn test_place_snaps_to_grid() {
        let mut scene = Scene::new();
        scene.toggle_snap();
        scene.set_tool(ToolKind::Rect);
        scene.pointer_down(Point::new(13.0, 27.0), Modifiers::NONE);
        assert_eq!(scene.elements()[0].position(), Point::new(20.0, 20.0));
    }

    #[test]
    fn test_draft_cancel_leaves_scene() {
        let mut scene = Scene::new();
        scene.set_tool(ToolKind::Line);
        assert_eq!(scene.pointer_down(Point::ZERO, Modifiers::NONE), PointerAction::Draft);
        scene.pointer_move(Point::new(100.0, 100.0));
        assert!(scene.cancel_gesture());
        scene.pointer_up(Point::new(100.0, 100.0));
        assert!(scene.is_empty());
        assert!(!scene.can_undo());
    }

    #[test]
    fn test_resize_handle_clamps() {
        let (mut scene, id) = scene_with_rect();
        scene.set_selected_id(id);
        let action = scene.pointer_down(Point::new(200.0, 200.0), Modifiers::NONE);
        assert!(matches!(action, PointerAction::Transform(_)));
        scene.pointer_move(Point::new(0.0, 0.0));
        scene.pointer_up(Point::new(0.0, 0.0));
        let bounds = scene.element(id).unwrap().bounds();
        assert_eq!(bounds, Rect::new(100.0, 100.0, 105.0, 105.0));
    }

    #[test]
    fn test_backend_transform_roundtrip() {
        let (mut scene, id) = scene_with_rect();
        scene.set_selected_id(id);
        scene.begin_transform();
        let reset = scene.finish_transform(&[NodeTransform {
            id,
            x: 100.0,
            y: 100.0,
            scale_x: 0.01,
            scale_y: 1.5,
            rotation_delta: 30.0,
        }]);
        assert_eq!(reset, vec![id]);
        let base = scene.element(id).unwrap().base();
        assert!((base.width - 5.0).abs() < 1e-9);
        assert!((base.height - 150.0).abs() < 1e-9);
        assert!((base.rotation - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_backend_drag_snaps_on_release() {
        let (mut scene, id) = scene_with_rect();
        scene.toggle_snap();
        assert!(scene.drag_element(id, Point::new(133.0, 147.0)));
        scene.end_drag(id);
        assert_eq!(scene.element(id).unwrap().position(), Point::new(140.0, 140.0));
    }
}
