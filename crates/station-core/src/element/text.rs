//! Text element.

use super::style::{Color, FontStyle, FontWeight, Outline, Shadow, TextAlign, TextDecoration};
use super::{ElementBase, ElementKind, ElementPatch, ElementTrait};
use kurbo::{BezPath, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Default line height multiplier when none is set.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;

/// Average glyph advance as a fraction of the font size, used for size estimates.
const APPROX_CHAR_WIDTH: f64 = 0.6;

/// A block of text with its top-left corner at `(x, y)`.
///
/// Glyph layout belongs to the renderer; the box stored here is an estimate
/// taken when the element is created and then owned by the user like any other
/// box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    #[serde(flatten)]
    pub base: ElementBase,
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub fill: Color,
    #[serde(default)]
    pub font_style: FontStyle,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default)]
    pub decoration: TextDecoration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

impl TextElement {
    pub const DEFAULT_FONT_SIZE: f64 = 32.0;
    pub const DEFAULT_FONT_FAMILY: &'static str = "Inter";

    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        let text = text.into();
        let (width, height) = estimate_size(&text, Self::DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT);
        Self {
            base: ElementBase::new(ElementKind::Text.display_name(), x, y, width, height),
            text,
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            fill: Color::rgb(17, 24, 39),
            font_style: FontStyle::default(),
            font_weight: FontWeight::default(),
            align: TextAlign::default(),
            letter_spacing: None,
            line_height: None,
            decoration: TextDecoration::default(),
            shadow: None,
            outline: None,
        }
    }

    pub fn line_height(&self) -> f64 {
        self.line_height.unwrap_or(DEFAULT_LINE_HEIGHT)
    }
}

/// Approximate box for `text` at `font_size`.
pub fn estimate_size(text: &str, font_size: f64, line_height: f64) -> (f64, f64) {
    let lines = text.lines().count().max(1);
    let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    (
        longest as f64 * font_size * APPROX_CHAR_WIDTH,
        lines as f64 * font_size * line_height,
    )
}

impl ElementTrait for TextElement {
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
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(size) = patch.font_size {
            self.font_size = size.max(1.0);
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(fill) = patch.fill {
            self.fill = fill;
        }
        if let Some(style) = patch.font_style {
            self.font_style = style;
        }
        if let Some(weight) = patch.font_weight {
            self.font_weight = weight;
        }
        if let Some(align) = patch.align {
            self.align = align;
        }
        if let Some(spacing) = patch.letter_spacing {
            self.letter_spacing = Some(spacing);
        }
        if let Some(height) = patch.line_height {
            self.line_height = Some(height.max(0.1));
        }
        if let Some(decoration) = patch.decoration {
            self.decoration = decoration;
        }
        if let Some(shadow) = &patch.shadow {
            self.shadow = Some(shadow.clone());
        }
        if let Some(outline) = &patch.outline {
            self.outline = Some(outline.clone());
        }
    }
}
