// File: crates/chart-render-skia/tests/raster.rs
// Purpose: End-to-end raster output; decodes PNG with `image` and probes pixels.
#![cfg(feature = "raster")]

use fintrack_chart::{BarChart, BarChartConfig, BarPoint, ChartRenderer, Color, LineChart, LineChartConfig, LinePoint, Theme};
use fintrack_render_skia::{RasterOptions, SkiaRenderer};

fn no_text() -> SkiaRenderer {
    SkiaRenderer::new(RasterOptions { scale: 1.0, draw_text: false })
}

#[test]
fn png_has_scene_dimensions_times_scale() {
    let chart = LineChart::new(
        vec![LinePoint::new("a", 1.0), LinePoint::new("b", 3.0), LinePoint::new("c", 2.0)],
        LineChartConfig::default(),
    );
    let scene = chart.render(&Theme::dark(), 1.0).with_background(Theme::dark().background);
    let png = SkiaRenderer::new(RasterOptions { scale: 2.0, draw_text: true }).render_png(&scene).expect("png");
    assert!(png.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (700, 440));
}

#[test]
fn rgba_buffer_shape_and_background() {
    let theme = Theme::light();
    let scene = BarChart::new(vec![BarPoint::new("A", 5.0)], BarChartConfig::default().with_labels(false, false))
        .render(&theme, 1.0)
        .with_background(theme.background);
    let img = no_text().render_rgba8(&scene).expect("rgba");
    assert_eq!(img.width as usize * img.height as usize * 4, img.pixels.len());
    assert_eq!(img.stride, img.width as usize * 4);

    let bg = theme.background;
    assert_eq!(img.pixel(1, 1), Some([bg.r, bg.g, bg.b, 255]));
}

#[test]
fn bar_fill_lands_inside_bar_rect() {
    let red = Color::from_rgb(220, 20, 20);
    let chart = BarChart::new(
        vec![BarPoint::new("A", 10.0).with_color(red)],
        BarChartConfig::default().with_labels(false, false),
    );
    let geometry = chart.layout().bars[0].rect;
    let scene = chart.render(&Theme::light(), 1.0);
    let img = no_text().render_rgba8(&scene).expect("rgba");

    let cx = (geometry.left + geometry.width() * 0.5) as u32;
    let cy = (geometry.top + geometry.height() * 0.5) as u32;
    assert_eq!(img.pixel(cx, cy), Some([220, 20, 20, 255]));
}

#[test]
fn write_png_creates_parent_dirs() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("raster/nested/bars.png");
    let scene = BarChart::new(vec![BarPoint::new("A", 1.0)], BarChartConfig::default()).render(&Theme::dark(), 1.0);
    no_text().write_png(&scene, &out).expect("write");
    assert!(std::fs::metadata(&out).expect("exists").len() > 0);
}
