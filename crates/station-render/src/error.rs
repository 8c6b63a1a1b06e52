//! Renderer and export error types.

use thiserror::Error;

/// Errors raised by a rendering backend.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Invalid raster size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Errors raised while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("{format} encoding failed: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
