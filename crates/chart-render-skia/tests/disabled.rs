// File: crates/chart-render-skia/tests/disabled.rs
// Purpose: Without the `raster` feature every entry point reports the missing backend.
#![cfg(not(feature = "raster"))]

use fintrack_chart::Scene;
use fintrack_render_skia::{is_available, RenderError, SkiaRenderer};

#[test]
fn reports_backend_disabled() {
    assert!(!is_available());
    let r = SkiaRenderer::default();
    let scene = Scene::new(10.0, 10.0);
    assert!(matches!(r.render_png(&scene), Err(RenderError::BackendDisabled)));
    assert!(matches!(r.render_rgba8(&scene), Err(RenderError::BackendDisabled)));
    let out = std::env::temp_dir().join("fintrack-disabled.png");
    assert!(matches!(r.write_png(&scene, &out), Err(RenderError::BackendDisabled)));
}
