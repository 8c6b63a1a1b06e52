//! Tool modes and the click/drag gestures that create elements.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::element::{ArrowElement, Element, LineElement};

/// A freehand gesture must travel more than this on either axis to create
/// a line or arrow.
pub const FREEHAND_THRESHOLD: f64 = 3.0;

/// Default sizes for click-to-place shapes.
pub const DEFAULT_RECT_SIZE: (f64, f64) = (150.0, 100.0);
pub const DEFAULT_CIRCLE_DIAMETER: f64 = 100.0;
pub const DEFAULT_SHAPE_SIZE: f64 = 120.0;
pub const DEFAULT_POLYGON_SIDES: u32 = 6;
pub const DEFAULT_TEXT: &str = "Text";

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Rect,
    Circle,
    Triangle,
    Star,
    Polygon,
    Arrow,
    Text,
    Line,
    Image,
}

impl ToolKind {
    /// Tools that place an element with a single click.
    pub fn places_on_click(self) -> bool {
        matches!(
            self,
            ToolKind::Rect
                | ToolKind::Circle
                | ToolKind::Triangle
                | ToolKind::Star
                | ToolKind::Polygon
                | ToolKind::Text
        )
    }

    /// Tools that draw by dragging from a start to an end point.
    pub fn draws_freehand(self) -> bool {
        matches!(self, ToolKind::Line | ToolKind::Arrow)
    }
}

/// Build the default element for a click-to-place tool at `point`.
///
/// Box-anchored shapes put their top-left corner at the point, centered
/// shapes put their center there. Returns `None` for tools that do not place
/// on click.
pub fn create_shape_at(tool: ToolKind, point: Point) -> Option<Element> {
    let (x, y) = (point.x, point.y);
    let element = match tool {
        ToolKind::Rect => Element::rect(x, y, DEFAULT_RECT_SIZE.0, DEFAULT_RECT_SIZE.1),
        ToolKind::Circle => Element::circle(x, y, DEFAULT_CIRCLE_DIAMETER),
        ToolKind::Triangle => Element::triangle(x, y, DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE),
        ToolKind::Star => Element::star(x, y, DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE),
        ToolKind::Polygon => Element::polygon(
            x,
            y,
            DEFAULT_SHAPE_SIZE,
            DEFAULT_SHAPE_SIZE,
            DEFAULT_POLYGON_SIDES,
        ),
        ToolKind::Text => Element::text(x, y, DEFAULT_TEXT),
        _ => return None,
    };
    Some(element)
}

/// An in-flight line or arrow drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreehandDraft {
    pub tool: ToolKind,
    pub start: Point,
    pub current: Point,
}

impl FreehandDraft {
    /// Whether the gesture travelled far enough to create an element.
    pub fn exceeds_threshold(&self, end: Point) -> bool {
        (end.x - self.start.x).abs() > FREEHAND_THRESHOLD
            || (end.y - self.start.y).abs() > FREEHAND_THRESHOLD
    }

    /// The element this gesture produces when released at `end`, or `None`
    /// for a below-threshold gesture.
    pub fn finish(&self, end: Point) -> Option<Element> {
        if !self.exceeds_threshold(end) {
            log::debug!("discarding {:?} gesture below threshold", self.tool);
            return None;
        }
        match self.tool {
            ToolKind::Line => Some(Element::Line(LineElement::between(self.start, end))),
            ToolKind::Arrow => Some(Element::Arrow(ArrowElement::between(self.start, end))),
            _ => None,
        }
    }
}

/// Current tool plus any in-flight creation gesture.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    pub current_tool: ToolKind,
    draft: Option<FreehandDraft>,
}

impl ToolManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tools, abandoning any draft.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.draft.take().is_some() {
            log::debug!("abandoning draft on tool switch to {tool:?}");
        }
        self.current_tool = tool;
    }

    /// Start a line/arrow draft. Ignored for other tools.
    pub fn begin(&mut self, point: Point) -> bool {
        if !self.current_tool.draws_freehand() {
            return false;
        }
        self.draft = Some(FreehandDraft {
            tool: self.current_tool,
            start: point,
            current: point,
        });
        true
    }

    pub fn update(&mut self, point: Point) {
        if let Some(draft) = &mut self.draft {
            draft.current = point;
        }
    }

    /// End the draft and return the created element, if any.
    pub fn end(&mut self, point: Point) -> Option<Element> {
        self.draft.take().and_then(|draft| draft.finish(point))
    }

    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    pub fn draft(&self) -> Option<&FreehandDraft> {
        self.draft.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.draft.is_some()
    }
}
