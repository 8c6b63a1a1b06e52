//! Partial element updates coming from the property panel.

use super::style::{
    Color, FontStyle, FontWeight, Gradient, Outline, Shadow, ShapeStyle, TextAlign,
    TextDecoration,
};
use super::{ElementBase, clamp_size};
use serde::{Deserialize, Serialize};

/// A set of optional field changes.
///
/// Fields that do not exist on an element's type are ignored for that element,
/// so the same patch can be applied across a mixed selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub name: Option<String>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,

    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub corner_radius: Option<f64>,
    pub gradient: Option<Gradient>,

    pub sides: Option<u32>,
    pub num_points: Option<u32>,
    pub inner_radius: Option<f64>,

    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<FontWeight>,
    pub align: Option<TextAlign>,
    pub letter_spacing: Option<f64>,
    pub line_height: Option<f64>,
    pub decoration: Option<TextDecoration>,
    pub shadow: Option<Shadow>,
    pub outline: Option<Outline>,

    pub src: Option<String>,

    pub pointer_length: Option<f64>,
    pub pointer_width: Option<f64>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Color, width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_base(&self, base: &mut ElementBase) {
        if let Some(x) = self.x {
            base.x = x;
        }
        if let Some(y) = self.y {
            base.y = y;
        }
        if let Some(width) = self.width {
            base.width = clamp_size(width);
        }
        if let Some(height) = self.height {
            base.height = clamp_size(height);
        }
        if let Some(rotation) = self.rotation {
            base.rotation = rotation;
        }
        if let Some(opacity) = self.opacity {
            base.set_opacity(opacity);
        }
        if let Some(name) = &self.name {
            base.name = name.clone();
        }
        if let Some(visible) = self.visible {
            base.visible = visible;
        }
        if let Some(locked) = self.locked {
            base.locked = locked;
        }
    }

    pub(crate) fn apply_shape_style(&self, style: &mut ShapeStyle) {
        if let Some(fill) = self.fill {
            style.fill = fill;
        }
        if let Some(stroke) = self.stroke {
            style.stroke = stroke;
        }
        if let Some(width) = self.stroke_width {
            style.stroke_width = width.max(0.0);
        }
        if let Some(gradient) = &self.gradient {
            style.gradient = Some(gradient.clone());
        }
    }
}
