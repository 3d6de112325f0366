// File: crates/chart-core/src/candle.rs
// Summary: Candlestick renderer: wick + body per OHLC point, colored by direction, thinned date labels.

use std::borrow::Cow;
use std::time::Duration;

use tracing::{debug, warn};

use crate::animation::{entry_tween, Tween};
use crate::chart::ChartRenderer;
use crate::config::CandlestickConfig;
use crate::geometry::{Point, RectF};
use crate::grid::{grid_levels, label_stride, thinned_indices, GridLevel};
use crate::scale::{SlotLayout, ValueScale};
use crate::scene::{Scene, Shape, TextAnchor};
use crate::series::Candle;
use crate::theme::Theme;
use crate::types::{Size, LABEL_FONT_SIZE, X_LABEL_OFFSET, Y_LABEL_GAP};

/// Minimum drawn body height so doji candles (open == close) stay visible.
const MIN_BODY_PX: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CandleGeometry {
    /// Wick top (high) and bottom (low).
    pub wick: (Point, Point),
    pub body: RectF,
    pub bullish: bool,
}

#[derive(Clone, Debug)]
pub struct CandleLayout {
    pub plot: RectF,
    pub scale: ValueScale,
    pub candles: Vec<CandleGeometry>,
    pub grid: Vec<GridLevel>,
    pub labels: Vec<(Point, String)>,
    /// Number of inputs whose high/low did not cover open/close.
    pub invalid: usize,
}

#[derive(Clone, Debug)]
pub struct CandlestickChart {
    pub data: Vec<Candle>,
    pub config: CandlestickConfig,
}

impl CandlestickChart {
    pub fn new(data: Vec<Candle>, config: CandlestickConfig) -> Self {
        Self { data, config }
    }

    pub fn layout(&self) -> CandleLayout {
        let cfg = &self.config;
        let invalid = self.data.iter().filter(|c| c.validate().is_err()).count();
        let candles: Cow<'_, [Candle]> = if cfg.clamp_invalid && invalid > 0 {
            Cow::Owned(self.data.iter().map(Candle::clamped).collect())
        } else {
            Cow::Borrowed(self.data.as_slice())
        };

        let plot = RectF::inset(cfg.width, cfg.height, cfg.padding);
        let scale = ValueScale::fit(plot.top, plot.bottom, candles.iter().flat_map(Candle::values));
        let slots = SlotLayout::new(plot.left, plot.right, candles.len(), cfg.body_fill);

        let geometry = candles
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let cx = slots.center(i);
                let y_open = scale.to_px(c.open);
                let y_close = scale.to_px(c.close);
                let mut top = y_open.min(y_close);
                let mut bottom = y_open.max(y_close);
                if bottom - top < MIN_BODY_PX {
                    // widen within the plot; a doji on the baseline grows upward
                    bottom = (top + MIN_BODY_PX).min(plot.bottom);
                    top = (bottom - MIN_BODY_PX).max(plot.top);
                }
                CandleGeometry {
                    wick: (Point::new(cx, scale.to_px(c.high)), Point::new(cx, scale.to_px(c.low))),
                    body: RectF::from_ltrb(slots.mark_left(i), top, slots.mark_left(i) + slots.mark_width(), bottom),
                    bullish: c.is_bullish(),
                }
            })
            .collect();

        let grid = if candles.is_empty() { Vec::new() } else { grid_levels(&scale, cfg.y_ticks) };
        let stride = label_stride(candles.len(), cfg.max_labels);
        let labels = thinned_indices(candles.len(), stride)
            .map(|i| {
                let at = Point::new(slots.center(i), plot.bottom + X_LABEL_OFFSET);
                (at, cfg.format_label.format(&candles[i].date))
            })
            .collect();

        CandleLayout { plot, scale, candles: geometry, grid, labels, invalid }
    }
}

impl ChartRenderer for CandlestickChart {
    fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    fn entry_tween(&self, start: Duration) -> Tween {
        entry_tween(self.config.animated, self.config.duration, start)
    }

    fn render(&self, theme: &Theme, progress: f32) -> Scene {
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height);
        if self.data.is_empty() {
            debug!("candlestick chart has no data; rendering empty surface");
            return scene;
        }
        let t = if cfg.animated { progress.clamp(0.0, 1.0) } else { 1.0 };
        let layout = self.layout();
        if layout.invalid > 0 {
            warn!(
                invalid = layout.invalid,
                clamped = cfg.clamp_invalid,
                "candles with high/low not covering open/close"
            );
        }

        if cfg.show_grid {
            for level in &layout.grid {
                scene.push(Shape::line(
                    Point::new(layout.plot.left, level.y_px),
                    Point::new(layout.plot.right, level.y_px),
                    theme.grid,
                    1.0,
                ));
                if cfg.show_labels {
                    scene.push(Shape::text(
                        Point::new(layout.plot.left - Y_LABEL_GAP, level.y_px + LABEL_FONT_SIZE * 0.35),
                        cfg.format_y.format(level.value),
                        LABEL_FONT_SIZE,
                        theme.muted,
                        TextAnchor::End,
                    ));
                }
            }
        }

        for c in &layout.candles {
            let color = if c.bullish { theme.bullish } else { theme.bearish };
            scene.push(Shape::Line {
                from: c.wick.0,
                to: c.wick.1,
                stroke: color,
                stroke_width: 1.0,
                opacity: t,
            });
            // body grows from its vertical centre
            let mid = (c.body.top + c.body.bottom) * 0.5;
            let half = c.body.height() * 0.5 * t;
            scene.push(Shape::Rect {
                rect: RectF::from_ltrb(c.body.left, mid - half, c.body.right, mid + half),
                fill: color,
                corner_radius: 1.0,
                opacity: 1.0,
            });
        }

        if cfg.show_labels {
            for (at, text) in layout.labels {
                scene.push(Shape::text(at, text, LABEL_FONT_SIZE, theme.muted, TextAnchor::Middle));
            }
        }
        scene
    }
}
