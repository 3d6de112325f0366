// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Renders deterministic charts to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, compares text against the committed snapshot for exact match.

use fintrack_chart::{
    BarChart, BarChartConfig, BarPoint, Candle, CandlestickChart, CandlestickConfig, ChartRenderer, LineChart,
    LineChartConfig, LinePoint, Theme,
};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, svg: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), svg.len());
        return;
    }
    let want = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing snapshot {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", path.display()));
    assert_eq!(svg, want, "SVG differs from golden snapshot: {}", path.display());
}

#[test]
fn golden_line_area() {
    let points = vec![
        LinePoint::new("Jan", 1200.0),
        LinePoint::new("Feb", 1850.0),
        LinePoint::new("Mar", 1400.0),
        LinePoint::new("Apr", 2100.0),
        LinePoint::new("May", 1900.0),
    ];
    let chart = LineChart::new(points, LineChartConfig::default().with_points(true));
    let svg = chart.render(&Theme::light(), 1.0).to_svg();
    assert!(svg.contains("linearGradient"));
    assert_eq!(svg.matches("<circle").count(), 5);
    assert_eq!(svg.matches("<path").count(), 2);
    write_or_compare("line_area.svg", &svg);
}

#[test]
fn golden_bars() {
    let data = vec![
        BarPoint::new("Food", 420.0),
        BarPoint::new("Rent", 1200.0),
        BarPoint::new("Transport", 180.0),
        BarPoint::new("Fun", 95.5),
    ];
    let svg = BarChart::new(data, BarChartConfig::default()).render(&Theme::light(), 1.0).to_svg();
    assert_eq!(svg.matches("<rect").count(), 4);
    assert!(svg.contains(r#"height="160.00""#), "tallest bar fills the plot");
    write_or_compare("bars.svg", &svg);
}

#[test]
fn golden_candlesticks() {
    let data = vec![
        Candle::new("W1", 40.0, 55.0, 30.0, 50.0),
        Candle::new("W2", 50.0, 52.0, 20.0, 25.0),
        Candle::new("W3", 25.0, 60.0, 25.0, 60.0),
        Candle::new("W4", 60.0, 61.0, 44.0, 45.0),
    ];
    let svg = CandlestickChart::new(data, CandlestickConfig::default()).render(&Theme::dark(), 1.0).to_svg();
    assert_eq!(svg.matches("<rect").count(), 4);
    assert_eq!(svg.matches(r##"fill="#28c878""##).count(), 2);
    assert_eq!(svg.matches(r##"fill="#dc5050""##).count(), 2);
    write_or_compare("candlesticks.svg", &svg);
}
