//! The scene store: the ordered element list and everything that edits it.
//!
//! A [`Scene`] owns the elements, the selection, the active tool, grid and
//! zoom settings, the clipboard and the undo history. All commands take
//! `&mut self` and never fail. Invalid targets are logged and ignored.
//!
//! Element order is z-order: index 0 is drawn first and hit-tested last.

mod images;
mod interaction;

pub use images::{ImageLoad, ImageRequest};
pub use interaction::Gesture;

use std::collections::{HashMap, HashSet};

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::align::{self, Alignment, DistributeAxis};
use crate::clipboard::Clipboard;
use crate::config::EditorConfig;
use crate::element::{Element, ElementId, ElementPatch};
use crate::handles::TransformerBinding;
use crate::history::History;
use crate::input::Modifiers;
use crate::selection::{self, HIT_TOLERANCE, Selection};
use crate::shortcuts::{Command, ShortcutRegistry};
use crate::snap::GridConfig;
use crate::tools::{FreehandDraft, ToolKind, ToolManager};
use crate::viewport::Viewport;

/// Direction for a one-step z-order move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerDirection {
    /// Towards the top (drawn later).
    Up,
    /// Towards the bottom.
    Down,
}

/// The design canvas state.
#[derive(Debug, Clone)]
pub struct Scene {
    elements: Vec<Element>,
    selection: Selection,
    tools: ToolManager,
    grid: GridConfig,
    viewport: Viewport,
    canvas_size: Size,
    canvas_preset: String,
    clipboard: Clipboard,
    history: History<Vec<Element>>,
    gesture: Option<Gesture>,
    pending_images: HashMap<u64, ImageRequest>,
    next_image_request: u64,
    config: EditorConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            elements: Vec::new(),
            selection: Selection::new(),
            tools: ToolManager::new(),
            grid: config.grid(),
            viewport: config.viewport(),
            canvas_size: config.canvas_size(),
            canvas_preset: config.default_preset.clone(),
            clipboard: Clipboard::new(),
            history: match config.history_limit {
                Some(limit) => History::bounded(Vec::new(), limit),
                None => History::new(Vec::new()),
            },
            gesture: None,
            pending_images: HashMap::new(),
            next_image_request: 1,
            config,
        }
    }

    // --- Queries ---

    /// Elements in z-order, bottom-most first.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Selected ids in z-order.
    pub fn selected_ids(&self) -> Vec<ElementId> {
        self.selection.ids_in_order(&self.elements)
    }

    pub fn selected_elements(&self) -> Vec<&Element> {
        self.selection.elements(&self.elements)
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selection.contains(&id)
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    pub fn canvas_preset(&self) -> &str {
        &self.canvas_preset
    }

    pub fn clipboard_len(&self) -> usize {
        self.clipboard.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Handles for the current selection.
    pub fn transformer(&self) -> TransformerBinding {
        TransformerBinding::bind(&self.elements, &self.selection)
    }

    /// The line/arrow being drawn, if any.
    pub fn draft(&self) -> Option<&FreehandDraft> {
        self.tools.draft()
    }

    /// Top-most visible element under a canvas point.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        let tolerance = self.viewport.canvas_tolerance(HIT_TOLERANCE);
        selection::element_at(&self.elements, point, tolerance)
    }

    // --- History ---

    /// Record the current element list as an undo step. Does nothing when
    /// the list equals the latest snapshot.
    pub fn commit(&mut self) {
        if self.history.current() == &self.elements {
            return;
        }
        self.history.push(self.elements.clone());
        log::debug!("commit: {} elements, history depth {}", self.elements.len(), self.history.len());
    }

    pub fn undo(&mut self) -> bool {
        self.abandon_gesture();
        let Some(snapshot) = self.history.undo() else {
            log::debug!("nothing to undo");
            return false;
        };
        self.elements = snapshot.clone();
        self.selection.prune(&self.elements);
        true
    }

    pub fn redo(&mut self) -> bool {
        self.abandon_gesture();
        let Some(snapshot) = self.history.redo() else {
            log::debug!("nothing to redo");
            return false;
        };
        self.elements = snapshot.clone();
        self.selection.prune(&self.elements);
        true
    }

    // --- Element commands ---

    /// Append an element on top and commit. Ignored if the id is taken.
    pub fn add_element(&mut self, element: Element) -> bool {
        if !self.insert(element) {
            return false;
        }
        self.commit();
        true
    }

    fn insert(&mut self, element: Element) -> bool {
        let id = element.id();
        if self.index_of(id).is_some() {
            log::warn!("ignoring element with duplicate id {id}");
            return false;
        }
        log::debug!("adding {:?} {id}", element.kind());
        self.elements.push(element);
        true
    }

    /// Merge `patch` into one element without committing.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        match self.elements.iter_mut().find(|e| e.id() == id) {
            Some(element) => {
                element.apply_patch(patch);
                true
            }
            None => {
                log::debug!("update for unknown element {id}");
                false
            }
        }
    }

    /// Apply `patch` to every selected element, then commit.
    pub fn update_selected(&mut self, patch: &ElementPatch) -> usize {
        let mut count = 0;
        for element in self.elements.iter_mut() {
            if self.selection.contains(&element.id()) {
                element.apply_patch(patch);
                count += 1;
            }
        }
        if count > 0 {
            self.commit();
        }
        count
    }

    pub fn remove_element(&mut self, id: ElementId) -> bool {
        let Some(index) = self.index_of(id) else {
            log::debug!("remove for unknown element {id}");
            return false;
        };
        self.elements.remove(index);
        self.selection.remove(&id);
        self.commit();
        true
    }

    /// Delete every selected element. Returns how many were removed.
    pub fn remove_selection(&mut self) -> usize {
        let before = self.elements.len();
        let selection = &self.selection;
        self.elements.retain(|e| !selection.contains(&e.id()));
        self.selection.clear();
        let removed = before - self.elements.len();
        if removed > 0 {
            self.commit();
        }
        removed
    }

    /// Swap an element with its neighbour. No-op at either end.
    pub fn reorder_element(&mut self, id: ElementId, direction: LayerDirection) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let target = match direction {
            LayerDirection::Up if index + 1 < self.elements.len() => index + 1,
            LayerDirection::Down if index > 0 => index - 1,
            _ => return false,
        };
        self.elements.swap(index, target);
        self.commit();
        true
    }

    pub fn bring_to_front(&mut self, id: ElementId) -> bool {
        match self.index_of(id) {
            Some(index) if index + 1 < self.elements.len() => {
                let element = self.elements.remove(index);
                self.elements.push(element);
                self.commit();
                true
            }
            _ => false,
        }
    }

    pub fn send_to_back(&mut self, id: ElementId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                let element = self.elements.remove(index);
                self.elements.insert(0, element);
                self.commit();
                true
            }
            _ => false,
        }
    }

    pub fn toggle_visibility(&mut self, id: ElementId) -> bool {
        self.toggle_flag(id, |e| &mut e.base_mut().visible)
    }

    pub fn toggle_lock(&mut self, id: ElementId) -> bool {
        self.toggle_flag(id, |e| &mut e.base_mut().locked)
    }

    fn toggle_flag(&mut self, id: ElementId, flag: impl Fn(&mut Element) -> &mut bool) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id() == id) else {
            return false;
        };
        let value = flag(element);
        *value = !*value;
        self.commit();
        true
    }

    // --- Tools, view and canvas ---

    /// Switch tools. An in-flight line/arrow draft is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if matches!(self.gesture, Some(Gesture::Draft)) {
            self.gesture = None;
        }
        self.tools.set_tool(tool);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset();
    }

    pub fn toggle_grid(&mut self) {
        self.grid.enabled = !self.grid.enabled;
    }

    pub fn toggle_snap(&mut self) {
        self.grid.snap = !self.grid.snap;
    }

    pub fn set_grid_size(&mut self, size: f64) -> bool {
        self.grid.set_size(size)
    }

    /// Resize the canvas to a named preset. Unknown names are ignored.
    pub fn set_canvas_preset(&mut self, name: &str) -> bool {
        let Some(preset) = self.config.preset(name) else {
            log::warn!("unknown canvas preset {name:?}");
            return false;
        };
        self.canvas_size = preset.size();
        self.canvas_preset = preset.name.clone();
        true
    }

    // --- Selection ---

    /// Select only `id`. Unknown ids are ignored.
    pub fn set_selected_id(&mut self, id: ElementId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.selection.set_single(id);
        true
    }

    pub fn add_to_selection(&mut self, id: ElementId) -> bool {
        self.index_of(id).is_some() && self.selection.add(id)
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle_selection(&mut self, id: ElementId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.selection.toggle(id)
    }

    /// Replace the selection with the present ids among `ids`.
    pub fn select_multiple(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        let present: HashSet<ElementId> = self.elements.iter().map(Element::id).collect();
        self.selection
            .replace(ids.into_iter().filter(|id| present.contains(id)));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        self.selection.replace(self.elements.iter().map(Element::id));
    }

    // --- Clipboard ---

    pub fn copy_selection(&mut self) -> usize {
        let selected: Vec<&Element> = self.selection.elements(&self.elements);
        self.clipboard.copy(selected)
    }

    /// Copy the selection, then delete it in one undo step.
    pub fn cut_selection(&mut self) -> usize {
        let copied = self.copy_selection();
        if copied > 0 {
            self.remove_selection();
        }
        copied
    }

    /// Insert fresh copies of the clipboard on top, offset by the configured
    /// paste offset, and select them.
    pub fn paste_clipboard(&mut self) -> Vec<ElementId> {
        let copies = self.clipboard.prepare_paste(self.config.paste_offset);
        if copies.is_empty() {
            log::debug!("paste with empty clipboard");
            return Vec::new();
        }
        let ids: Vec<ElementId> = copies.iter().map(Element::id).collect();
        self.elements.extend(copies);
        self.selection.replace(ids.iter().copied());
        self.commit();
        ids
    }

    pub fn duplicate_selection(&mut self) -> Vec<ElementId> {
        if self.copy_selection() == 0 {
            return Vec::new();
        }
        self.paste_clipboard()
    }

    // --- Arrange ---

    pub fn align_selection(&mut self, alignment: Alignment) -> bool {
        let targets = self.selection.elements(&self.elements);
        let deltas = align::alignment_deltas(&targets, alignment);
        self.apply_deltas(deltas)
    }

    pub fn distribute_selection(&mut self, axis: DistributeAxis) -> bool {
        let targets = self.selection.elements(&self.elements);
        let deltas = align::distribution_deltas(&targets, axis);
        self.apply_deltas(deltas)
    }

    fn apply_deltas(&mut self, deltas: Vec<(ElementId, Vec2)>) -> bool {
        if deltas.is_empty() {
            return false;
        }
        for (id, delta) in deltas {
            if let Some(element) = self.elements.iter_mut().find(|e| e.id() == id) {
                element.translate(delta);
            }
        }
        self.commit();
        true
    }

    // --- Keyboard ---

    /// Run the command bound to `key`. Returns whether a binding matched.
    pub fn handle_shortcut(&mut self, key: &str, modifiers: Modifiers) -> bool {
        let Some(command) = ShortcutRegistry::resolve(key, modifiers) else {
            return false;
        };
        log::debug!("shortcut {key} -> {command:?}");
        self.run_command(command);
        true
    }

    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::SelectAll => self.select_all(),
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            Command::Copy => {
                self.copy_selection();
            }
            Command::Cut => {
                self.cut_selection();
            }
            Command::Paste => {
                self.paste_clipboard();
            }
            Command::Duplicate => {
                self.duplicate_selection();
            }
            Command::Delete => {
                self.remove_selection();
            }
            Command::Cancel => {
                if !self.cancel_gesture() {
                    self.clear_selection();
                }
            }
            Command::LayerUp => self.reorder_selection(LayerDirection::Up),
            Command::LayerDown => self.reorder_selection(LayerDirection::Down),
            Command::BringToFront => {
                for id in self.selected_ids() {
                    self.bring_to_front(id);
                }
            }
            Command::SendToBack => {
                for id in self.selected_ids().into_iter().rev() {
                    self.send_to_back(id);
                }
            }
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
            Command::ResetZoom => self.reset_zoom(),
            Command::ToggleGrid => self.toggle_grid(),
            Command::ToggleSnap => self.toggle_snap(),
            Command::Tool(tool) => self.set_tool(tool),
        }
    }

    fn reorder_selection(&mut self, direction: LayerDirection) {
        let mut ids = self.selected_ids();
        if direction == LayerDirection::Up {
            ids.reverse();
        }
        for id in ids {
            self.reorder_element(id, direction);
        }
    }

    // --- Payload ---

    /// Serialize the element list for a document-save collaborator.
    pub fn elements_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.elements)
    }

    /// Replace the element list with a saved payload. History restarts from
    /// the loaded state and the selection is cleared. Sizes below the minimum
    /// are lifted, elements with malformed point lists are dropped and
    /// duplicate ids get fresh ids.
    pub fn elements_from_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let mut elements: Vec<Element> = serde_json::from_str(json)?;
        elements.retain_mut(|element| match element.sanitize() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("dropping element {} from payload: {e}", element.id());
                false
            }
        });
        let mut seen = HashSet::new();
        for element in elements.iter_mut() {
            if !seen.insert(element.id()) {
                log::warn!("duplicate id {} in payload, assigning a new one", element.id());
                element.regenerate_id();
                seen.insert(element.id());
            }
        }
        self.abandon_gesture();
        self.elements = elements;
        self.selection.clear();
        self.history.reset(self.elements.clone());
        log::info!("loaded {} elements", self.elements.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Color;

    fn scene_with(n: usize) -> (Scene, Vec<ElementId>) {
        let mut scene = Scene::new();
        let mut ids = Vec::new();
        for i in 0..n {
            let element = Element::rect(i as f64 * 50.0, 0.0, 40.0, 40.0);
            ids.push(element.id());
            scene.add_element(element);
        }
        (scene, ids)
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut scene = Scene::new();
        let element = Element::rect(0.0, 0.0, 10.0, 10.0);
        assert!(scene.add_element(element.clone()));
        assert!(!scene.add_element(element));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let (mut scene, _) = scene_with(1);
        let before = scene.elements().to_vec();
        assert!(!scene.update_element(ElementId::new_v4(), &ElementPatch::position(5.0, 5.0)));
        assert_eq!(scene.elements(), &before[..]);
    }

    #[test]
    fn test_update_element_is_live() {
        let (mut scene, ids) = scene_with(1);
        scene.undo();
        scene.redo();
        scene.update_element(ids[0], &ElementPatch::position(99.0, 0.0));
        assert!(!scene.can_redo());
        scene.undo();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_update_selected_commits() {
        let (mut scene, ids) = scene_with(2);
        scene.select_multiple(ids.clone());
        let red = Color::rgb(255, 0, 0);
        assert_eq!(scene.update_selected(&ElementPatch::new().with_fill(red)), 2);
        assert!(scene.elements().iter().all(|e| e.fill() == Some(red)));
        scene.undo();
        assert!(scene.elements().iter().all(|e| e.fill() != Some(red)));
    }

    #[test]
    fn test_remove_prunes_selection() {
        let (mut scene, ids) = scene_with(3);
        scene.select_multiple([ids[0], ids[2]]);
        assert!(scene.remove_element(ids[0]));
        assert_eq!(scene.selected_ids(), vec![ids[2]]);
        assert!(!scene.remove_element(ids[0]));
    }

    #[test]
    fn test_remove_selection() {
        let (mut scene, ids) = scene_with(3);
        scene.select_multiple([ids[0], ids[1]]);
        assert_eq!(scene.remove_selection(), 2);
        assert_eq!(scene.len(), 1);
        assert!(scene.selected_ids().is_empty());
        assert_eq!(scene.remove_selection(), 0);
    }

    #[test]
    fn test_reorder_boundaries() {
        let (mut scene, ids) = scene_with(3);
        assert!(!scene.reorder_element(ids[2], LayerDirection::Up));
        assert!(!scene.reorder_element(ids[0], LayerDirection::Down));
        assert!(scene.reorder_element(ids[0], LayerDirection::Up));
        assert_eq!(scene.index_of(ids[0]), Some(1));
        assert!(scene.bring_to_front(ids[0]));
        assert_eq!(scene.index_of(ids[0]), Some(2));
        assert!(scene.send_to_back(ids[0]));
        assert_eq!(scene.index_of(ids[0]), Some(0));
        assert!(!scene.send_to_back(ids[0]));
    }

    #[test]
    fn test_toggles_commit() {
        let (mut scene, ids) = scene_with(1);
        assert!(scene.toggle_visibility(ids[0]));
        assert!(!scene.element(ids[0]).unwrap().is_visible());
        assert!(scene.toggle_lock(ids[0]));
        assert!(scene.element(ids[0]).unwrap().is_locked());
        scene.undo();
        assert!(!scene.element(ids[0]).unwrap().is_locked());
        assert!(!scene.toggle_lock(ElementId::new_v4()));
    }

    #[test]
    fn test_canvas_preset() {
        let mut scene = Scene::new();
        assert_eq!(scene.canvas_size(), Size::new(1080.0, 1080.0));
        assert!(scene.set_canvas_preset("YouTube Thumbnail"));
        assert_eq!(scene.canvas_size(), Size::new(1280.0, 720.0));
        assert!(!scene.set_canvas_preset("Billboard"));
        assert_eq!(scene.canvas_preset(), "YouTube Thumbnail");
    }

    #[test]
    fn test_selection_ignores_unknown() {
        let (mut scene, ids) = scene_with(2);
        assert!(!scene.set_selected_id(ElementId::new_v4()));
        scene.select_multiple([ids[1], ElementId::new_v4()]);
        assert_eq!(scene.selected_ids(), vec![ids[1]]);
        scene.select_all();
        assert_eq!(scene.selected_ids(), ids);
    }

    #[test]
    fn test_cut_and_paste() {
        let (mut scene, ids) = scene_with(2);
        scene.set_selected_id(ids[0]);
        assert_eq!(scene.cut_selection(), 1);
        assert_eq!(scene.len(), 1);
        let pasted = scene.paste_clipboard();
        assert_eq!(pasted.len(), 1);
        assert_ne!(pasted[0], ids[0]);
        assert_eq!(scene.selected_ids(), pasted);
        assert_eq!(scene.index_of(pasted[0]), Some(1));
    }

    #[test]
    fn test_duplicate_single_commit() {
        let (mut scene, ids) = scene_with(1);
        scene.set_selected_id(ids[0]);
        let copies = scene.duplicate_selection();
        assert_eq!(copies.len(), 1);
        scene.undo();
        assert_eq!(scene.len(), 1);
        assert!(scene.selected_ids().is_empty());
    }

    #[test]
    fn test_commit_skips_unchanged() {
        let (mut scene, _) = scene_with(1);
        scene.commit();
        scene.commit();
        assert!(scene.undo());
        assert!(scene.is_empty());
        assert!(!scene.can_undo());
    }

    #[test]
    fn test_shortcuts_dispatch() {
        let (mut scene, ids) = scene_with(2);
        assert!(scene.handle_shortcut("a", Modifiers::CTRL));
        assert_eq!(scene.selected_ids(), ids);
        assert!(scene.handle_shortcut("Delete", Modifiers::NONE));
        assert!(scene.is_empty());
        assert!(scene.handle_shortcut("z", Modifiers::CTRL));
        assert_eq!(scene.len(), 2);
        assert!(scene.handle_shortcut("r", Modifiers::NONE));
        assert_eq!(scene.tool(), ToolKind::Rect);
        assert!(!scene.handle_shortcut("F13", Modifiers::NONE));
    }

    #[test]
    fn test_json_payload_roundtrip() {
        let (scene, _) = scene_with(2);
        let json = scene.elements_to_json().unwrap();
        let mut other = Scene::new();
        other.elements_from_json(&json).unwrap();
        assert_eq!(other.elements(), scene.elements());
        assert!(!other.can_undo());
    }

    #[test]
    fn test_json_payload_restores_invariants() {
        let line = Element::line(0.0, 0.0, vec![0.0, 0.0, 10.0, 100.0]).unwrap();
        let mut value = serde_json::to_value(vec![line.clone(), line]).unwrap();
        value[0]["width"] = serde_json::json!(0.0);
        value[1]["id"] = serde_json::json!(ElementId::new_v4());
        value[1]["points"] = serde_json::json!([1.0, 2.0, 3.0]);

        let mut scene = Scene::new();
        scene.elements_from_json(&value.to_string()).unwrap();
        assert_eq!(scene.len(), 1);
        let id = scene.elements()[0].id();
        assert!((scene.elements()[0].base().width - 5.0).abs() < 1e-9);

        scene.update_element(id, &ElementPatch::size(100.0, 100.0));
        let Element::Line(line) = &scene.elements()[0] else {
            panic!("expected a line");
        };
        assert!(line.points.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_json_payload_dedupes_ids() {
        let element = Element::rect(0.0, 0.0, 10.0, 10.0);
        let json = serde_json::to_string(&vec![element.clone(), element]).unwrap();
        let mut scene = Scene::new();
        scene.elements_from_json(&json).unwrap();
        assert_ne!(scene.elements()[0].id(), scene.elements()[1].id());
    }
}
