//! Export through a fake backend that records frames and returns a solid
//! raster of the requested size.

use kurbo::{Point, Size};
use peniko::Color;
use station_core::{Element, ElementId, ElementPatch, Scene};
use station_render::{
    ExportError, ExportFormat, RasterImage, RenderBackend, RenderContext, RenderResult,
    RendererError, export_scene,
};

#[derive(Default)]
struct FakeBackend {
    frames: Vec<Vec<ElementId>>,
    handle_counts: Vec<usize>,
    fail: bool,
}

impl RenderBackend for FakeBackend {
    fn draw(&mut self, ctx: &RenderContext<'_>) {
        self.frames.push(ctx.elements.iter().map(|e| e.id()).collect());
        self.handle_counts.push(ctx.handles.len());
    }

    fn pointer_position(&self) -> Option<Point> {
        None
    }

    fn node_at(&self, _screen: Point) -> Option<ElementId> {
        None
    }

    fn rasterize(&mut self, canvas_size: Size) -> RenderResult<RasterImage> {
        if self.fail {
            return Err(RendererError::RenderFailed("device lost".into()));
        }
        let (w, h) = RasterImage::dimensions_for(canvas_size)?;
        RasterImage::filled(w, h, Color::from_rgba8(30, 60, 90, 255))
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn small_scene() -> (Scene, ElementId, ElementId) {
    let mut scene = Scene::new();
    scene.set_canvas_preset("Newsletter Header");
    let shown = Element::rect(10.0, 10.0, 50.0, 50.0);
    let mut hidden = Element::circle(100.0, 100.0, 40.0);
    hidden.apply_patch(&ElementPatch::new().with_visible(false));
    let (shown_id, hidden_id) = (shown.id(), hidden.id());
    scene.add_element(shown);
    scene.add_element(hidden);
    scene.select_all();
    (scene, shown_id, hidden_id)
}

#[test]
fn test_png_export_matches_canvas_size() {
    init();
    let (scene, shown, _) = small_scene();
    let mut backend = FakeBackend::default();
    let output = export_scene(&mut backend, &scene, ExportFormat::Png).unwrap();

    assert_eq!(output.file_name, "station-design.png");
    assert_eq!(output.mime_type, "image/png");
    let decoded = image::load_from_memory(&output.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (600, 200));
    assert_eq!(backend.frames, vec![vec![shown]]);
    assert_eq!(backend.handle_counts, vec![0]);
}

#[test]
fn test_jpeg_export() {
    init();
    let (scene, _, _) = small_scene();
    let mut backend = FakeBackend::default();
    let output = export_scene(&mut backend, &scene, ExportFormat::Jpeg { quality: 3.0 }).unwrap();
    assert_eq!(output.file_name, "station-design.jpg");
    let decoded = image::load_from_memory(&output.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (600, 200));
}

#[test]
fn test_svg_export_embeds_one_png() {
    init();
    let (scene, _, _) = small_scene();
    let mut backend = FakeBackend::default();
    let output = export_scene(&mut backend, &scene, ExportFormat::Svg).unwrap();
    assert_eq!(output.file_name, "station-design.svg");
    let svg = String::from_utf8(output.bytes).unwrap();
    assert!(svg.contains(r#"width="600" height="200""#));
    assert_eq!(svg.matches("data:image/png;base64,").count(), 1);
    assert_eq!(svg.matches("<image").count(), 1);
}

#[test]
fn test_backend_failure_surfaces() {
    init();
    let (scene, _, _) = small_scene();
    let mut backend = FakeBackend {
        fail: true,
        ..FakeBackend::default()
    };
    let result = export_scene(&mut backend, &scene, ExportFormat::Png);
    assert!(matches!(result, Err(ExportError::Render(RendererError::RenderFailed(_)))));
}

#[test]
fn test_editing_frame_has_handles() {
    init();
    let (scene, _, hidden) = small_scene();
    let mut backend = FakeBackend::default();
    backend.draw(&RenderContext::from_scene(&scene));
    assert!(backend.handle_counts[0] > 0);
    assert!(!backend.frames[0].contains(&hidden));
}
