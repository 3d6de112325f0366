use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fintrack_chart::{Candle, CandlestickChart, CandlestickConfig, ChartRenderer, LineChart, LineChartConfig, LinePoint, Theme};

fn build_line(n: usize) -> LineChart {
    let points = (0..n)
        .map(|i| LinePoint::new(i as f64, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)))
        .collect();
    LineChart::new(points, LineChartConfig::default().with_size(800.0, 500.0))
}

fn build_candles(n: usize) -> CandlestickChart {
    let mut price = 100.0f64;
    let data = (0..n)
        .map(|i| {
            let o = price;
            let c = o + if i % 3 == 0 { -0.8 } else { 0.5 };
            price = c;
            Candle::new(format!("{i}"), o, o.max(c) + 1.0, o.min(c) - 1.0, c)
        })
        .collect();
    CandlestickChart::new(data, CandlestickConfig::default().with_size(800.0, 500.0))
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::dark();
    let mut group = c.benchmark_group("render_svg");
    for &n in &[1_000usize, 10_000usize] {
        let line = build_line(n);
        group.bench_function(format!("line_{n}"), |b| {
            b.iter(|| black_box(line.render(&theme, 1.0).to_svg()));
        });
        let candles = build_candles(n);
        group.bench_function(format!("candles_{n}"), |b| {
            b.iter(|| black_box(candles.render(&theme, 1.0).to_svg()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
