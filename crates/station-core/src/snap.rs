//! Grid configuration and snapping.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Grid display and snapping settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Whether the grid is drawn.
    pub enabled: bool,
    /// Whether drags, placements and freehand endpoints snap to the grid.
    pub snap: bool,
    /// Cell size in canvas units. Always positive.
    pub size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            snap: false,
            size: DEFAULT_GRID_SIZE,
        }
    }
}

impl GridConfig {
    /// Snap a point if snapping is on, otherwise return it unchanged.
    pub fn apply(&self, point: Point) -> Point {
        if self.snap {
            snap_to_grid(point, self.size).point
        } else {
            point
        }
    }

    /// Set the cell size. Non-positive or non-finite sizes are ignored.
    pub fn set_size(&mut self, size: f64) -> bool {
        if size.is_finite() && size > 0.0 {
            self.size = size;
            true
        } else {
            log::debug!("ignoring invalid grid size {size}");
            false
        }
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was moved.
    pub snapped_x: bool,
    /// Whether the Y coordinate was moved.
    pub snapped_y: bool,
}

impl SnapResult {
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Round a single coordinate to the nearest multiple of `grid`.
pub fn snap_value(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid: f64) -> SnapResult {
    if grid <= 0.0 {
        return SnapResult::none(point);
    }
    let snapped = Point::new(snap_value(point.x, grid), snap_value(point.y, grid));
    SnapResult {
        point: snapped,
        snapped_x: (snapped.x - point.x).abs() > f64::EPSILON,
        snapped_y: (snapped.y - point.y).abs() > f64::EPSILON,
    }
}
