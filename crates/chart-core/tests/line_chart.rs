// File: crates/chart-core/tests/line_chart.rs
// Purpose: Line/area geometry: bounds, degenerate domains, label thinning, empty input.

use fintrack_chart::path::path_coordinates;
use fintrack_chart::scene::Paint;
use fintrack_chart::{ChartRenderer, LineChart, LineChartConfig, LinePoint, Shape, Theme};

fn monthly(values: &[f64]) -> Vec<LinePoint> {
    const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
    values.iter().enumerate().map(|(i, &v)| LinePoint::new(MONTHS[i % 12], v)).collect()
}

#[test]
fn path_stays_inside_padded_region() {
    let cfg = LineChartConfig::default();
    let (w, h, pad) = (cfg.width, cfg.height, cfg.padding);
    // sharp zig-zag: naive Catmull-Rom control points would overshoot here
    let chart = LineChart::new(monthly(&[0.0, 1000.0, 0.0, 1000.0, 0.0, 1000.0, 50.0]), cfg);
    let layout = chart.layout();
    assert!(!layout.path.is_empty());

    let eps = 0.01;
    for (x, y) in path_coordinates(&layout.path).into_iter().chain(path_coordinates(&layout.area)) {
        assert!(x >= pad - eps && x <= w - pad + eps, "x {x} out of bounds");
        assert!(y >= pad - eps && y <= h - pad + eps, "y {y} out of bounds");
    }
}

#[test]
fn first_and_last_points_touch_horizontal_edges() {
    let cfg = LineChartConfig::default();
    let chart = LineChart::new(monthly(&[3.0, 9.0, 4.0]), cfg.clone());
    let layout = chart.layout();
    assert_eq!(layout.points[0].x, cfg.padding);
    assert!((layout.points[2].x - (cfg.width - cfg.padding)).abs() < 1e-3);
    // max at top, min at bottom
    assert_eq!(layout.points[1].y, cfg.padding);
    assert_eq!(layout.points[0].y, cfg.height - cfg.padding);
}

#[test]
fn repeated_value_has_nonzero_span_and_flat_line() {
    let chart = LineChart::new(monthly(&[42.0; 5]), LineChartConfig::default());
    let layout = chart.layout();
    assert!(layout.scale.span() > 0.0);
    let y0 = layout.points[0].y;
    assert!(y0.is_finite());
    assert!(layout.points.iter().all(|p| p.y == y0));
}

#[test]
fn grid_has_ticks_plus_one_levels_labelled_max_to_min() {
    let cfg = LineChartConfig::default().with_y_ticks(4);
    let chart = LineChart::new(monthly(&[100.0, 300.0, 500.0]), cfg);
    let layout = chart.layout();
    assert_eq!(layout.grid.len(), 5);
    assert_eq!(layout.grid[0].value, 500.0);
    assert_eq!(layout.grid[2].value, 300.0);
    assert_eq!(layout.grid[4].value, 100.0);
}

#[test]
fn x_labels_are_thinned_to_about_six() {
    let values: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let points: Vec<LinePoint> = values.iter().map(|&v| LinePoint::new(v, v * 2.0)).collect();
    let chart = LineChart::new(points, LineChartConfig::default());
    let labels = chart.layout().x_labels;
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[0].1, "0");
    assert_eq!(labels[1].1, "5");

    let few = LineChart::new(monthly(&[1.0, 2.0, 3.0]), LineChartConfig::default());
    assert_eq!(few.layout().x_labels.len(), 3);
}

#[test]
fn x_formatter_rewrites_labels() {
    let cfg = LineChartConfig::default()
        .with_format_x(fintrack_chart::LabelFormatter::new(|s| s.to_uppercase()));
    let chart = LineChart::new(monthly(&[1.0, 2.0]), cfg);
    assert_eq!(chart.layout().x_labels[0].1, "JAN");
}

#[test]
fn empty_and_single_point_render_without_error() {
    let theme = Theme::light();
    let empty = LineChart::new(Vec::new(), LineChartConfig::default());
    let scene = empty.render(&theme, 1.0);
    assert!(scene.is_empty());
    assert_eq!(scene.width, 350.0);
    assert!(empty.layout().path.is_empty());

    let single = LineChart::new(monthly(&[10.0]), LineChartConfig::default());
    let layout = single.layout();
    assert!(layout.path.starts_with('M'));
    assert!(!layout.path.contains('C'));
    assert!(layout.area.is_empty());
    let _ = single.render(&theme, 1.0).to_svg();
}

#[test]
fn area_uses_gradient_and_fades_in() {
    let theme = Theme::dark();
    let chart = LineChart::new(monthly(&[1.0, 4.0, 2.0]), LineChartConfig::default());
    let scene = chart.render(&theme, 0.25);
    assert_eq!(scene.gradients.len(), 1);
    let area = scene
        .shapes
        .iter()
        .find(|s| matches!(s, Shape::Path { fill: Paint::Gradient(_), .. }))
        .expect("area path");
    match area {
        Shape::Path { opacity, .. } => assert!((opacity - 0.25).abs() < 1e-6),
        _ => unreachable!(),
    }

    let flat = LineChart::new(monthly(&[1.0, 4.0, 2.0]), LineChartConfig::default().with_gradient(false));
    assert!(flat.render(&theme, 1.0).gradients.is_empty());
}

#[test]
fn points_toggle_adds_markers() {
    let theme = Theme::light();
    let cfg = LineChartConfig::default().with_points(true);
    let scene = LineChart::new(monthly(&[1.0, 2.0, 3.0, 4.0]), cfg).render(&theme, 1.0);
    let markers = scene.shapes.iter().filter(|s| matches!(s, Shape::Circle { .. })).count();
    assert_eq!(markers, 4);
}

#[test]
fn config_loads_from_toml_with_defaults() {
    let cfg: LineChartConfig = toml::from_str("height = 180\nshow_points = true\nduration_ms = 250").expect("parse");
    assert_eq!(cfg.height, 180.0);
    assert!(cfg.show_points);
    assert_eq!(cfg.duration.as_millis(), 250);
    assert_eq!(cfg.width, 350.0);
    assert_eq!(cfg.y_ticks, 4);
}
