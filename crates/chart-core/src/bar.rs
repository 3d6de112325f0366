// File: crates/chart-core/src/bar.rs
// Summary: Bar renderer: 80/20 slots, heights relative to max(value, 1), grow-in animation.

use std::time::Duration;

use tracing::debug;

use crate::animation::{entry_tween, Tween};
use crate::chart::ChartRenderer;
use crate::config::BarChartConfig;
use crate::geometry::{Point, RectF};
use crate::scale::SlotLayout;
use crate::scene::{Scene, Shape, TextAnchor};
use crate::series::BarPoint;
use crate::theme::{Color, Theme};
use crate::types::{Size, LABEL_FONT_SIZE, X_LABEL_OFFSET};

/// Geometry of one bar at full height.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub rect: RectF,
    pub color: Option<Color>,
    pub label: String,
    pub value_label: String,
}

#[derive(Clone, Debug)]
pub struct BarLayout {
    pub plot: RectF,
    /// Denominator for bar heights; at least 1 so all-zero data stays finite.
    pub max_value: f64,
    pub bars: Vec<BarGeometry>,
}

#[derive(Clone, Debug)]
pub struct BarChart {
    pub data: Vec<BarPoint>,
    pub config: BarChartConfig,
}

impl BarChart {
    pub fn new(data: Vec<BarPoint>, config: BarChartConfig) -> Self {
        Self { data, config }
    }

    pub fn layout(&self) -> BarLayout {
        let cfg = &self.config;
        let plot = RectF::inset(cfg.width, cfg.height, cfg.padding);
        let max_value = self
            .data
            .iter()
            .map(|b| b.value)
            .filter(|v| v.is_finite())
            .fold(1.0f64, f64::max);
        let slots = SlotLayout::new(plot.left, plot.right, self.data.len(), cfg.bar_fill);
        let available = plot.height();

        let bars = self
            .data
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let ratio = (b.value / max_value).clamp(0.0, 1.0);
                let ratio = if ratio.is_nan() { 0.0 } else { ratio };
                let h = ratio as f32 * available;
                let rect = RectF::from_ltwh(slots.mark_left(i), plot.bottom - h, slots.mark_width(), h);
                BarGeometry {
                    rect,
                    color: b.color,
                    label: cfg.format_label.format(&b.label),
                    value_label: cfg.format_value.format(b.value),
                }
            })
            .collect();

        BarLayout { plot, max_value, bars }
    }
}

impl ChartRenderer for BarChart {
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
            debug!("bar chart has no entries; rendering empty placeholder");
            return scene;
        }
        let t = if cfg.animated { progress.clamp(0.0, 1.0) } else { 1.0 };
        let layout = self.layout();

        for bar in &layout.bars {
            // grow upward from the baseline
            let h = bar.rect.height() * t;
            let rect = RectF::from_ltwh(bar.rect.left, layout.plot.bottom - h, bar.rect.width(), h);
            scene.push(Shape::Rect {
                rect,
                fill: bar.color.unwrap_or(theme.bar),
                corner_radius: cfg.corner_radius.min(rect.width() * 0.5),
                opacity: 1.0,
            });
            let cx = rect.left + rect.width() * 0.5;
            if cfg.show_values {
                scene.push(Shape::text(
                    Point::new(cx, rect.top - 4.0),
                    bar.value_label.clone(),
                    LABEL_FONT_SIZE,
                    theme.label,
                    TextAnchor::Middle,
                ));
            }
            if cfg.show_labels {
                scene.push(Shape::text(
                    Point::new(cx, layout.plot.bottom + X_LABEL_OFFSET),
                    bar.label.clone(),
                    LABEL_FONT_SIZE,
                    theme.muted,
                    TextAnchor::Middle,
                ));
            }
        }
        scene
    }
}
