//! Image element.

use super::{ElementBase, ElementKind, ElementPatch, ElementTrait};
use crate::error::{ElementError, ElementResult};
use kurbo::{BezPath, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Image formats accepted as sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Svg,
    Bmp,
}

impl ImageFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "svg" => Some(ImageFormat::Svg),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Detect format from a source reference: a `data:` URL or a path/URL
    /// ending in a known extension (query strings and fragments are ignored).
    pub fn from_source(src: &str) -> ElementResult<Self> {
        let unsupported = || ElementError::UnsupportedImage(src.to_string());
        if let Some(rest) = src.strip_prefix("data:") {
            let mime = rest.split([';', ',']).next().unwrap_or_default();
            return [
                ImageFormat::Png,
                ImageFormat::Jpeg,
                ImageFormat::Gif,
                ImageFormat::WebP,
                ImageFormat::Svg,
                ImageFormat::Bmp,
            ]
            .into_iter()
            .find(|f| f.mime_type() == mime)
            .ok_or_else(unsupported);
        }
        let path = src.split(['?', '#']).next().unwrap_or_default();
        path.rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
            .ok_or_else(unsupported)
    }
}

/// A raster or vector image referenced by `src`, top-left at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(flatten)]
    pub base: ElementBase,
    /// Source reference (path, URL or data URL). Loading is done elsewhere.
    pub src: String,
    /// Pixel size reported by the loader, 0 when the load failed.
    #[serde(default)]
    pub natural_width: u32,
    #[serde(default)]
    pub natural_height: u32,
}

impl ImageElement {
    /// Longest side of a newly created image.
    pub const MAX_SIDE: f64 = 400.0;
    /// Side length used when the natural size is unknown.
    pub const PLACEHOLDER_SIZE: f64 = 200.0;

    /// Create an image scaled down (never up) so its longer side fits `max_side`.
    /// Scaling only happens here; later resizes work on the stored box.
    pub fn fitted(
        src: impl Into<String>,
        x: f64,
        y: f64,
        natural_width: u32,
        natural_height: u32,
        max_side: f64,
    ) -> Self {
        let (w, h) = (natural_width as f64, natural_height as f64);
        let longest = w.max(h);
        let scale = if longest > max_side && longest > 0.0 {
            max_side / longest
        } else {
            1.0
        };
        Self {
            base: ElementBase::new(ElementKind::Image.display_name(), x, y, w * scale, h * scale),
            src: src.into(),
            natural_width,
            natural_height,
        }
    }

    /// Create an image with fixed placeholder dimensions (used when loading failed).
    pub fn placeholder(src: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            base: ElementBase::new(ElementKind::Image.display_name(), x, y, width, height),
            src: src.into(),
            natural_width: 0,
            natural_height: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.natural_width == 0 || self.natural_height == 0
    }
}

impl ElementTrait for ImageElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn local_path(&self) -> BezPath {
        self.local_bounds().to_path(0.1)
    }

    fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(src) = &patch.src {
            self.src = src.clone();
        }
    }
}
