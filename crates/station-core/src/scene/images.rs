//! Image placement. Loading happens outside the engine: the scene hands out
//! a request, and the host reports back exactly once per request.

use kurbo::Point;

use super::Scene;
use crate::element::{Element, ElementId, ImageElement, ImageFormat};

/// A pending image placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRequest {
    pub id: u64,
    /// Top-left corner of the image once placed.
    pub position: Point,
}

/// Outcome reported by the host's image loader.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageLoad {
    /// Decoded with its natural pixel size.
    Loaded { src: String, width: u32, height: u32 },
    /// The source was chosen but could not be decoded. A placeholder-sized
    /// element is still added.
    Failed { src: String },
    /// The user dismissed the picker.
    Cancelled,
}

impl Scene {
    /// Register an image placement at `position` and return its request id.
    pub fn request_image(&mut self, position: Point) -> u64 {
        let id = self.next_image_request;
        self.next_image_request += 1;
        self.pending_images.insert(id, ImageRequest { id, position });
        log::debug!("image request {id} at {position:?}");
        id
    }

    pub fn pending_image_requests(&self) -> usize {
        self.pending_images.len()
    }

    /// Resolve an image request. Each request resolves at most once; unknown
    /// or already-resolved ids are ignored. Decoded sources with an unsupported
    /// extension are rejected. A failed load always adds a placeholder so the
    /// source can be replaced later. Returns the new element's id.
    pub fn complete_image_load(&mut self, request: u64, result: ImageLoad) -> Option<ElementId> {
        let Some(pending) = self.pending_images.remove(&request) else {
            log::warn!("image load for unknown request {request}");
            return None;
        };
        let Point { x, y } = pending.position;
        let image = match result {
            ImageLoad::Loaded { src, width, height } => {
                Self::check_source(&src)?;
                if width == 0 || height == 0 {
                    self.placeholder(src, x, y)
                } else {
                    ImageElement::fitted(src, x, y, width, height, self.config.max_image_side)
                }
            }
            ImageLoad::Failed { src } => {
                log::warn!("image {src} failed to load, using placeholder size");
                self.placeholder(src, x, y)
            }
            ImageLoad::Cancelled => return None,
        };
        let id = image.base.id();
        if !self.add_element(Element::Image(image)) {
            return None;
        }
        self.selection.set_single(id);
        Some(id)
    }

    fn check_source(src: &str) -> Option<ImageFormat> {
        match ImageFormat::from_source(src) {
            Ok(format) => Some(format),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    fn placeholder(&self, src: String, x: f64, y: f64) -> ImageElement {
        let size = self.config.image_placeholder;
        ImageElement::placeholder(src, x, y, size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use crate::input::PointerAction;
    use crate::tools::ToolKind;

    #[test]
    fn test_image_tool_requests_load() {
        let mut scene = Scene::new();
        scene.set_tool(ToolKind::Image);
        let action = scene.pointer_down(Point::new(40.0, 60.0), Modifiers::NONE);
        let PointerAction::ImageRequested(request) = action else {
            panic!("expected an image request, got {action:?}");
        };
        assert_eq!(scene.pending_image_requests(), 1);

        let id = scene
            .complete_image_load(
                request,
                ImageLoad::Loaded {
                    src: "photo.jpg".into(),
                    width: 800,
                    height: 400,
                },
            )
            .unwrap();
        let base = scene.element(id).unwrap().base();
        assert_eq!((base.x, base.y), (40.0, 60.0));
        assert!((base.width - 400.0).abs() < 1e-9);
        assert!((base.height - 200.0).abs() < 1e-9);
        assert_eq!(scene.selected_ids(), vec![id]);
    }

    #[test]
    fn test_completion_happens_once() {
        let mut scene = Scene::new();
        let request = scene.request_image(Point::ZERO);
        let load = ImageLoad::Failed {
            src: "broken.png".into(),
        };
        let id = scene.complete_image_load(request, load.clone()).unwrap();
        let base = scene.element(id).unwrap().base();
        assert!((base.width - 200.0).abs() < 1e-9);
        assert!((base.height - 200.0).abs() < 1e-9);
        assert!(scene.complete_image_load(request, load).is_none());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_unsupported_source_rejected() {
        let mut scene = Scene::new();
        let request = scene.request_image(Point::ZERO);
        let result = scene.complete_image_load(
            request,
            ImageLoad::Loaded {
                src: "notes.pdf".into(),
                width: 10,
                height: 10,
            },
        );
        assert!(result.is_none());
        assert!(scene.is_empty());
        assert_eq!(scene.pending_image_requests(), 0);
    }

    #[test]
    fn test_failed_load_without_extension_adds_placeholder() {
        let mut scene = Scene::new();
        let request = scene.request_image(Point::new(10.0, 10.0));
        let id = scene
            .complete_image_load(
                request,
                ImageLoad::Failed {
                    src: "https://cdn.example.com/uploads/12345".into(),
                },
            )
            .unwrap();
        let Some(Element::Image(image)) = scene.element(id) else {
            panic!("expected an image element");
        };
        assert!(image.is_placeholder());
        assert!((image.base.width - 200.0).abs() < 1e-9);
        assert_eq!(scene.selected_ids(), vec![id]);
    }

    #[test]
    fn test_cancelled_request() {
        let mut scene = Scene::new();
        let request = scene.request_image(Point::ZERO);
        assert!(scene.complete_image_load(request, ImageLoad::Cancelled).is_none());
        assert!(scene.is_empty());
        assert!(!scene.can_undo());
    }
}
