// File: crates/demo/src/main.rs
// Summary: Demo computes finance metrics over sample (or CSV) data and renders each chart plus switcher frames.

mod config;
mod load;
mod sample;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use fintrack_chart::format::currency;
use fintrack_chart::{
    theme, BarChart, CandlestickChart, ChartRenderer, ChartSwitcher, LineChart, Scene, Tab, Theme,
};
use fintrack_metrics::aggregate::{covering, month_to_date, net_balance, summarize, DateRange};
use fintrack_metrics::model::total_savings;
use fintrack_metrics::progress::overall_debt_progress;
use fintrack_metrics::recurring::{days_until, due_soon, monthly_total, next_upcoming, yearly_projection};
use fintrack_metrics::shape::{category_bars, daily_series, weekly_expense_candles};
use fintrack_metrics::{paginate, PeriodSelector, TransactionKind};
use fintrack_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::sample::SampleBook;

fn main() -> Result<()> {
    // RUST_LOG overrides the default `info` filter
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => DemoConfig::default(),
    };
    let today = cfg.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let theme = theme::find(&cfg.theme);
    info!(theme = %theme.name, %today, period = %cfg.period, "starting demo");

    let mut book = sample::book(today);
    if let Some(path) = &cfg.transactions {
        book.transactions = load::load_transactions(path)
            .with_context(|| format!("failed to load transactions '{}'", path.display()))?;
    }
    if book.transactions.is_empty() {
        warn!("no transactions; charts will render empty surfaces");
    }

    report(&cfg, &book, today)?;
    render_all(&cfg, &book, &theme, today)
}

fn report(cfg: &DemoConfig, book: &SampleBook, today: NaiveDate) -> Result<()> {
    let month = month_to_date(today);
    let income = summarize(&book.transactions, TransactionKind::Income, Some(month));
    let spent = summarize(&book.transactions, TransactionKind::Expense, Some(month));
    info!(
        income = %currency(income.total),
        expenses = %currency(spent.total),
        count = spent.count,
        net = %currency(net_balance(&book.transactions, Some(month))),
        "this month"
    );

    info!(
        monthly = %currency(monthly_total(&book.subscriptions)),
        yearly = %currency(yearly_projection(&book.subscriptions)),
        next = %next_upcoming(&book.subscriptions),
        "subscriptions"
    );
    for s in due_soon(&book.subscriptions, today) {
        info!(name = %s.name, days = days_until(s.next_billing, today), "due soon");
    }

    for d in &book.debts {
        info!(name = %d.name, kind = %d.kind(), remaining = %currency(d.remaining()), progress = %d.progress(), "debt");
    }
    info!(overall = %overall_debt_progress(&book.debts), next = %next_upcoming(&book.debts), "debts");

    for g in &book.goals {
        info!(name = %g.name, progress = %g.progress(), completed = g.is_completed(), "goal");
    }
    info!(total = %currency(total_savings(&book.savings)), "savings");

    let mut recent: Vec<_> = book.transactions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    let page = paginate(&recent, 1, cfg.page_size).context("paginating recent transactions")?;
    info!(page = page.page, of = page.total_pages, "recent transactions");
    for t in page.items {
        info!(date = %t.date, kind = ?t.kind, amount = t.amount, category = %t.category, "  tx");
    }
    Ok(())
}

fn render_all(cfg: &DemoConfig, book: &SampleBook, theme: &Theme, today: NaiveDate) -> Result<()> {
    let selector = PeriodSelector::new(cfg.period);
    let range = selector.range(today).unwrap_or_else(|| covering(&book.transactions, today));
    let weeks = DateRange::new(today.checked_sub_days(Days::new(55)).unwrap_or(today), today);

    let line = LineChart::new(daily_series(&book.transactions, TransactionKind::Expense, range), cfg.line.clone());
    let bars = BarChart::new(category_bars(&book.transactions, Some(range)), cfg.bar.clone());
    let candles = CandlestickChart::new(weekly_expense_candles(&book.transactions, weeks), cfg.candlestick.clone());

    let out = &cfg.output_dir;
    let raster = SkiaRenderer::default();
    write_scene(&raster, &line.render(theme, 1.0).with_background(theme.background), out, "spending_line")?;
    write_scene(&raster, &bars.render(theme, 1.0).with_background(theme.background), out, "categories_bar")?;
    write_scene(&raster, &candles.render(theme, 1.0).with_background(theme.background), out, "weekly_candles")?;

    let mut switcher = ChartSwitcher::new(cfg.switcher.clone())
        .with_tab(Tab::from_chart("trend", "Trend", line))
        .with_tab(Tab::from_chart("categories", "Categories", bars))
        .with_tab(Tab::from_chart("weekly", "Weekly", candles))
        .on_change(|index| info!(index, "tab changed"));
    switcher.select(1, Duration::ZERO).context("selecting categories tab")?;

    let steps = 4u32;
    for i in 0..=steps {
        let now = cfg.switcher.duration * i / steps;
        let scene = switcher.render(theme, now).with_background(theme.background);
        write_scene(&raster, &scene, out, &format!("switcher_{:03}ms", now.as_millis()))?;
    }
    Ok(())
}

/// Write `<name>.svg`, plus `<name>.png` when the raster backend is compiled in.
fn write_scene(raster: &SkiaRenderer, scene: &Scene, dir: &Path, name: &str) -> Result<()> {
    let svg = dir.join(format!("{name}.svg"));
    scene.write_svg(&svg).with_context(|| format!("writing {}", svg.display()))?;
    info!(path = %svg.display(), shapes = scene.shapes.len(), "wrote svg");

    if fintrack_render_skia::is_available() {
        let png = svg.with_extension("png");
        raster.write_png(scene, &png).with_context(|| format!("writing {}", png.display()))?;
        info!(path = %png.display(), "wrote png");
    }
    Ok(())
}
