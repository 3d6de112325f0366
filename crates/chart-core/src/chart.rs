// File: crates/chart-core/src/chart.rs
// Summary: Renderer trait shared by line/bar/candlestick charts and a closed `Chart` wrapper.

use std::path::Path;
use std::time::Duration;

use crate::animation::Tween;
use crate::bar::BarChart;
use crate::candle::CandlestickChart;
use crate::error::Result;
use crate::line::LineChart;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::types::Size;

/// A chart that maps its points to a [`Scene`] of fixed size.
///
/// `progress` is the entry-animation position in `[0, 1]`; callers sample it from
/// [`ChartRenderer::entry_tween`] with their own clock. Rendering is pure.
pub trait ChartRenderer {
    fn size(&self) -> Size;

    fn render(&self, theme: &Theme, progress: f32) -> Scene;

    /// Entry animation starting at clock time `start`; already complete when animation is off.
    fn entry_tween(&self, start: Duration) -> Tween;

    /// Render with the entry animation sampled at clock time `now`.
    fn render_at(&self, theme: &Theme, tween: &Tween, now: Duration) -> Scene {
        self.render(theme, tween.sample(now))
    }

    /// Fully animated-in frame written as SVG.
    fn render_to_svg(&self, theme: &Theme, path: impl AsRef<Path>) -> Result<()>
    where
        Self: Sized,
    {
        self.render(theme, 1.0).with_background(theme.background).write_svg(path)
    }
}

/// Any of the built-in renderers.
#[derive(Clone, Debug)]
pub enum Chart {
    Line(LineChart),
    Bar(BarChart),
    Candlestick(CandlestickChart),
}

impl Chart {
    pub fn kind(&self) -> &'static str {
        match self {
            Chart::Line(_) => "line",
            Chart::Bar(_) => "bar",
            Chart::Candlestick(_) => "candlestick",
        }
    }
}

impl ChartRenderer for Chart {
    fn size(&self) -> Size {
        match self {
            Chart::Line(c) => c.size(),
            Chart::Bar(c) => c.size(),
            Chart::Candlestick(c) => c.size(),
        }
    }

    fn render(&self, theme: &Theme, progress: f32) -> Scene {
        match self {
            Chart::Line(c) => c.render(theme, progress),
            Chart::Bar(c) => c.render(theme, progress),
            Chart::Candlestick(c) => c.render(theme, progress),
        }
    }

    fn entry_tween(&self, start: Duration) -> Tween {
        match self {
            Chart::Line(c) => c.entry_tween(start),
            Chart::Bar(c) => c.entry_tween(start),
            Chart::Candlestick(c) => c.entry_tween(start),
        }
    }
}

impl From<LineChart> for Chart {
    fn from(c: LineChart) -> Self { Chart::Line(c) }
}

impl From<BarChart> for Chart {
    fn from(c: BarChart) -> Self { Chart::Bar(c) }
}

impl From<CandlestickChart> for Chart {
    fn from(c: CandlestickChart) -> Self { Chart::Candlestick(c) }
}
