//! Station Render Library
//!
//! The seam between the Station canvas engine and a rendering library:
//! the [`RenderBackend`] trait, per-frame [`RenderContext`], fill resolution
//! and PNG/JPEG/SVG export.

mod backend;
mod error;
pub mod export;
pub mod paint;

pub use backend::{RasterImage, RenderBackend, RenderContext};
pub use error::{ExportError, ExportResult, RenderResult, RendererError};
pub use export::{ExportFormat, ExportOutput, export_scene};
pub use paint::{Paint, resolve_fill, resolve_stroke};
