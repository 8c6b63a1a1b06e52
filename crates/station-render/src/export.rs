//! Canvas export to PNG, JPEG or an SVG wrapping a PNG.
//!
//! The backend rasterizes the canvas at its preset size; this module only
//! encodes pixels. Output file names are fixed per format.

use std::io::Cursor;

use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use kurbo::Size;
use station_core::Scene;

use crate::backend::{RasterImage, RenderBackend, RenderContext};
use crate::error::{ExportError, ExportResult};

/// Base name of every exported file.
pub const EXPORT_BASENAME: &str = "station-design";

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
    /// Lossless PNG.
    Png,
    /// JPEG with quality in 0.1..=1.0 (clamped).
    Jpeg { quality: f64 },
    /// An SVG document holding the PNG rendering as one embedded image.
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg { .. } => "jpg",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg { .. } => "image/jpeg",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    /// `station-design.png`, `station-design.jpg` or `station-design.svg`.
    pub fn file_name(&self) -> String {
        format!("{EXPORT_BASENAME}.{}", self.extension())
    }
}

/// Encoded export ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Map a 0.1..=1.0 quality to the encoder's 1..=100 scale.
pub fn jpeg_quality(quality: f64) -> u8 {
    let quality = if quality.is_nan() { 1.0 } else { quality.clamp(0.1, 1.0) };
    (quality * 100.0).round() as u8
}

pub fn encode_png(image: &RasterImage) -> ExportResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf)
        .write_image(&image.rgba, image.width, image.height, ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::Encode {
            format: "PNG",
            message: e.to_string(),
        })?;
    Ok(buf.into_inner())
}

/// JPEG has no alpha, so pixels are flattened onto white first.
pub fn encode_jpeg(image: &RasterImage, quality: f64) -> ExportResult<Vec<u8>> {
    let mut rgb = Vec::with_capacity(image.rgba.len() / 4 * 3);
    for pixel in image.rgba.chunks_exact(4) {
        let alpha = u16::from(pixel[3]);
        for &channel in &pixel[..3] {
            let blended = (u16::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
            rgb.push(blended as u8);
        }
    }
    let mut buf = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buf, jpeg_quality(quality))
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| ExportError::Encode {
            format: "JPEG",
            message: e.to_string(),
        })?;
    Ok(buf.into_inner())
}

/// An SVG sized to the canvas with the PNG embedded as a base64 data URL.
pub fn wrap_png_in_svg(png: &[u8], canvas_size: Size) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    let (w, h) = (canvas_size.width, canvas_size.height);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><image width="{w}" height="{h}" href="data:image/png;base64,{encoded}"/></svg>"#
    )
}

/// Encode already-rasterized pixels.
pub fn encode(image: &RasterImage, format: ExportFormat, canvas_size: Size) -> ExportResult<ExportOutput> {
    let bytes = match format {
        ExportFormat::Png => encode_png(image)?,
        ExportFormat::Jpeg { quality } => encode_jpeg(image, quality)?,
        ExportFormat::Svg => wrap_png_in_svg(&encode_png(image)?, canvas_size).into_bytes(),
    };
    Ok(ExportOutput {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        bytes,
    })
}

/// Draw an export frame (visible elements only, no overlays), rasterize it
/// at the canvas size and encode it.
pub fn export_scene(
    backend: &mut dyn RenderBackend,
    scene: &Scene,
    format: ExportFormat,
) -> ExportResult<ExportOutput> {
    let canvas_size = scene.canvas_size();
    let ctx = RenderContext::for_export(scene);
    backend.draw(&ctx);
    let image = backend.rasterize(canvas_size)?;
    let output = encode(&image, format, canvas_size)?;
    log::info!(
        "exported {} ({} bytes, {}x{})",
        output.file_name,
        output.bytes.len(),
        image.width,
        image.height
    );
    Ok(output)
}
