//! View zoom. Zoom only scales the view, never the document.

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Zoom level and its limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Additive change per zoom in/out step.
    pub step: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl Viewport {
    pub fn new(min_zoom: f64, max_zoom: f64, step: f64) -> Self {
        Self {
            zoom: 1.0_f64.max(min_zoom).min(max_zoom),
            min_zoom,
            max_zoom,
            step,
        }
    }

    /// Set the zoom, clamped to the limits. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            log::debug!("ignoring non-finite zoom {zoom}");
            return;
        }
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.step);
    }

    pub fn reset(&mut self) {
        self.set_zoom(1.0);
    }

    /// Canvas-to-screen transform.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.zoom)
    }

    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(screen.x / self.zoom, screen.y / self.zoom)
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        self.transform() * canvas
    }

    /// Convert a screen-pixel tolerance to canvas units.
    pub fn canvas_tolerance(&self, screen_pixels: f64) -> f64 {
        screen_pixels / self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamped() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(10.0);
        assert!((viewport.zoom - DEFAULT_MAX_ZOOM).abs() < f64::EPSILON);
        viewport.set_zoom(0.0);
        assert!((viewport.zoom - DEFAULT_MIN_ZOOM).abs() < f64::EPSILON);
        viewport.set_zoom(f64::NAN);
        assert!((viewport.zoom - DEFAULT_MIN_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_steps() {
        let mut viewport = Viewport::default();
        viewport.zoom_in();
        assert!((viewport.zoom - 1.1).abs() < 1e-9);
        viewport.zoom_out();
        viewport.zoom_out();
        assert!((viewport.zoom - 0.9).abs() < 1e-9);
        viewport.reset();
        assert!((viewport.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_canvas_roundtrip() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(2.0);
        let canvas = viewport.screen_to_canvas(Point::new(200.0, 100.0));
        assert_eq!(canvas, Point::new(100.0, 50.0));
        assert_eq!(viewport.canvas_to_screen(canvas), Point::new(200.0, 100.0));
        assert!((viewport.canvas_tolerance(10.0) - 5.0).abs() < f64::EPSILON);
    }
}
