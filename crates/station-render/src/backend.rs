//! The rendering backend seam.
//!
//! The engine never draws. Each frame it hands a [`RenderContext`] to a
//! [`RenderBackend`], and asks the backend for pointer positions, node
//! lookups and rasterized pixels.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use station_core::element::{Element, ElementId};
use station_core::handles::Handle;
use station_core::snap::GridConfig;
use station_core::tools::FreehandDraft;
use station_core::Scene;

use crate::error::{RenderResult, RendererError};

/// RGBA8 pixels, row-major, unpremultiplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl RasterImage {
    /// Wrap a pixel buffer, checking its length against the dimensions.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RendererError::InvalidSize { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(RendererError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A single-color image.
    pub fn filled(width: u32, height: u32, color: Color) -> RenderResult<Self> {
        let rgba = color.to_rgba8();
        let pixel = [rgba.r, rgba.g, rgba.b, rgba.a];
        let count = width as usize * height as usize;
        Self::new(width, height, pixel.repeat(count))
    }

    /// Pixel dimensions for a canvas size, rounded to whole pixels.
    pub fn dimensions_for(size: Size) -> RenderResult<(u32, u32)> {
        let (w, h) = (size.width.round(), size.height.round());
        if !(w >= 1.0 && h >= 1.0 && w <= u32::MAX as f64 && h <= u32::MAX as f64) {
            return Err(RendererError::InvalidSize {
                width: w.max(0.0) as u32,
                height: h.max(0.0) as u32,
            });
        }
        Ok((w as u32, h as u32))
    }
}

/// Everything a backend needs to draw one frame.
pub struct RenderContext<'a> {
    /// Visible elements in z-order. Hidden elements are never included.
    pub elements: Vec<&'a Element>,
    /// Selected ids, for highlight outlines.
    pub selected: Vec<ElementId>,
    /// Transformer handles for the selection.
    pub handles: Vec<Handle>,
    /// Combined bounds of the transformable selection.
    pub selection_bounds: Option<Rect>,
    /// Marquee rectangle in canvas coordinates.
    pub marquee: Option<Rect>,
    /// Line or arrow being drawn.
    pub draft: Option<FreehandDraft>,
    pub grid: GridConfig,
    pub zoom: f64,
    pub canvas_size: Size,
    pub background_color: Color,
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Editing frame: elements plus selection overlays.
    pub fn from_scene(scene: &'a Scene) -> Self {
        let binding = scene.transformer();
        Self {
            elements: scene.elements().iter().filter(|e| e.is_visible()).collect(),
            selected: scene.selected_ids(),
            handles: binding.handles,
            selection_bounds: binding.bounds,
            marquee: scene.marquee(),
            draft: scene.draft().copied(),
            grid: *scene.grid(),
            zoom: scene.zoom(),
            canvas_size: scene.canvas_size(),
            background_color: Color::WHITE,
            selection_color: Color::from_rgba8(59, 130, 246, 255),
        }
    }

    /// Export frame: visible elements only, no overlays, no grid, zoom 1.
    pub fn for_export(scene: &'a Scene) -> Self {
        let mut ctx = Self::from_scene(scene);
        ctx.selected.clear();
        ctx.handles.clear();
        ctx.selection_bounds = None;
        ctx.marquee = None;
        ctx.draft = None;
        ctx.grid.enabled = false;
        ctx.zoom = 1.0;
        ctx
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    /// Canvas rectangle in canvas coordinates.
    pub fn canvas_rect(&self) -> Rect {
        self.canvas_size.to_rect()
    }
}

/// A rendering library that can draw the scene.
pub trait RenderBackend {
    /// Draw one frame.
    fn draw(&mut self, ctx: &RenderContext<'_>);

    /// Current pointer position in canvas coordinates, if the pointer is over
    /// the canvas.
    fn pointer_position(&self) -> Option<Point>;

    /// The element drawn at a screen point, if the backend tracks nodes.
    fn node_at(&self, screen: Point) -> Option<ElementId>;

    /// Pixels of the last drawn frame at `canvas_size`.
    fn rasterize(&mut self, canvas_size: Size) -> RenderResult<RasterImage>;
}
