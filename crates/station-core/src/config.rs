//! Editor configuration.

use std::path::Path;

use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::clipboard::DEFAULT_PASTE_OFFSET;
use crate::element::ImageElement;
use crate::error::{ConfigError, ConfigResult};
use crate::snap::{DEFAULT_GRID_SIZE, GridConfig};
use crate::viewport::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_STEP, Viewport};

/// A named canvas size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasPreset {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl CanvasPreset {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Social-media sizes offered out of the box. The first one is the default.
pub fn builtin_presets() -> Vec<CanvasPreset> {
    vec![
        CanvasPreset::new("Instagram Post", 1080.0, 1080.0),
        CanvasPreset::new("Instagram Story", 1080.0, 1920.0),
        CanvasPreset::new("Twitter Post", 1200.0, 675.0),
        CanvasPreset::new("LinkedIn Post", 1200.0, 627.0),
        CanvasPreset::new("Facebook Cover", 820.0, 312.0),
        CanvasPreset::new("YouTube Thumbnail", 1280.0, 720.0),
        CanvasPreset::new("Newsletter Header", 600.0, 200.0),
    ]
}

/// Tunables for a [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_size: f64,
    pub grid_enabled: bool,
    pub snap_enabled: bool,
    pub paste_offset: Vec2,
    /// Maximum undo snapshots. Unbounded when absent.
    pub history_limit: Option<usize>,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub default_preset: String,
    pub presets: Vec<CanvasPreset>,
    /// Size given to images whose natural size could not be read.
    pub image_placeholder: Size,
    /// New images are scaled down so neither side exceeds this.
    pub max_image_side: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            grid_enabled: false,
            snap_enabled: false,
            paste_offset: DEFAULT_PASTE_OFFSET,
            history_limit: None,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            default_preset: "Instagram Post".to_string(),
            presets: builtin_presets(),
            image_placeholder: Size::new(
                ImageElement::PLACEHOLDER_SIZE,
                ImageElement::PLACEHOLDER_SIZE,
            ),
            max_image_side: ImageElement::MAX_SIDE,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON document. Missing keys take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("loaded editor config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid("history_limit must be at least 1".into()));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds inverted or non-positive: {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.zoom_step > 0.0) {
            return Err(ConfigError::Invalid("zoom_step must be positive".into()));
        }
        if self.presets.iter().any(|p| !(p.width > 0.0 && p.height > 0.0)) {
            return Err(ConfigError::Invalid("preset sizes must be positive".into()));
        }
        if self.preset(&self.default_preset).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default preset {:?} is not in the preset table",
                self.default_preset
            )));
        }
        Ok(())
    }

    pub fn preset(&self, name: &str) -> Option<&CanvasPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn grid(&self) -> GridConfig {
        GridConfig {
            enabled: self.grid_enabled,
            snap: self.snap_enabled,
            size: self.grid_size,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.min_zoom, self.max_zoom, self.zoom_step)
    }

    /// Size of the default preset.
    pub fn canvas_size(&self) -> Size {
        self.preset(&self.default_preset)
            .map(CanvasPreset::size)
            .unwrap_or_else(|| Size::new(1080.0, 1080.0))
    }
}
