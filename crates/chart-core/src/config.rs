// File: crates/chart-core/src/config.rs
// Summary: Per-renderer option structs with documented defaults and builder helpers.
// Notes:
// - Every field has a default; TOML/JSON configs may omit any of them.
// - Formatters are closures and cannot be deserialized; they reset to defaults.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::animation::Easing;
use crate::format::{LabelFormatter, ValueFormatter};
use crate::types::{BAR_HEIGHT, CANDLE_HEIGHT, LINE_HEIGHT, PADDING, WIDTH};

fn millis<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    u64::deserialize(d).map(Duration::from_millis)
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_points: bool,
    /// Fill the area under the curve with a fading gradient.
    pub gradient: bool,
    pub animated: bool,
    #[serde(rename = "duration_ms", deserialize_with = "millis")]
    pub duration: Duration,
    /// Number of grid intervals; `y_ticks + 1` levels are drawn.
    pub y_ticks: usize,
    /// Upper bound on visible X labels.
    pub max_x_labels: usize,
    pub stroke_width: f32,
    pub point_radius: f32,
    #[serde(skip)]
    pub format_x: LabelFormatter,
    #[serde(skip)]
    pub format_y: ValueFormatter,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: LINE_HEIGHT,
            padding: PADDING,
            show_grid: true,
            show_labels: true,
            show_points: false,
            gradient: true,
            animated: true,
            duration: Duration::from_millis(1000),
            y_ticks: 4,
            max_x_labels: 6,
            stroke_width: 2.5,
            point_radius: 3.0,
            format_x: LabelFormatter::identity(),
            format_y: ValueFormatter::compact_currency(),
        }
    }
}

impl LineChartConfig {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
    pub fn with_grid(mut self, on: bool) -> Self {
        self.show_grid = on;
        self
    }
    pub fn with_labels(mut self, on: bool) -> Self {
        self.show_labels = on;
        self
    }
    pub fn with_points(mut self, on: bool) -> Self {
        self.show_points = on;
        self
    }
    pub fn with_gradient(mut self, on: bool) -> Self {
        self.gradient = on;
        self
    }
    pub fn with_animation(mut self, animated: bool, duration: Duration) -> Self {
        self.animated = animated;
        self.duration = duration;
        self
    }
    pub fn with_y_ticks(mut self, ticks: usize) -> Self {
        self.y_ticks = ticks;
        self
    }
    pub fn with_format_x(mut self, f: LabelFormatter) -> Self {
        self.format_x = f;
        self
    }
    pub fn with_format_y(mut self, f: ValueFormatter) -> Self {
        self.format_y = f;
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    /// Category label below each bar.
    pub show_labels: bool,
    /// Value label above each bar.
    pub show_values: bool,
    pub animated: bool,
    #[serde(rename = "duration_ms", deserialize_with = "millis")]
    pub duration: Duration,
    /// Share of each slot occupied by the bar.
    pub bar_fill: f32,
    pub corner_radius: f32,
    #[serde(skip)]
    pub format_value: ValueFormatter,
    #[serde(skip)]
    pub format_label: LabelFormatter,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: BAR_HEIGHT,
            padding: PADDING,
            show_labels: true,
            show_values: true,
            animated: true,
            duration: Duration::from_millis(800),
            bar_fill: 0.8,
            corner_radius: 4.0,
            format_value: ValueFormatter::compact_currency(),
            format_label: LabelFormatter::identity(),
        }
    }
}

impl BarChartConfig {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
    pub fn with_labels(mut self, labels: bool, values: bool) -> Self {
        self.show_labels = labels;
        self.show_values = values;
        self
    }
    pub fn with_animation(mut self, animated: bool, duration: Duration) -> Self {
        self.animated = animated;
        self.duration = duration;
        self
    }
    pub fn with_format_value(mut self, f: ValueFormatter) -> Self {
        self.format_value = f;
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CandlestickConfig {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub show_grid: bool,
    pub show_labels: bool,
    pub animated: bool,
    #[serde(rename = "duration_ms", deserialize_with = "millis")]
    pub duration: Duration,
    /// Share of each slot occupied by the candle body.
    pub body_fill: f32,
    /// Upper bound on visible date labels.
    pub max_labels: usize,
    pub y_ticks: usize,
    /// Widen high/low to cover open/close before drawing.
    pub clamp_invalid: bool,
    #[serde(skip)]
    pub format_label: LabelFormatter,
    #[serde(skip)]
    pub format_y: ValueFormatter,
}

impl Default for CandlestickConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: CANDLE_HEIGHT,
            padding: PADDING,
            show_grid: true,
            show_labels: true,
            animated: true,
            duration: Duration::from_millis(800),
            body_fill: 0.6,
            max_labels: 5,
            y_ticks: 4,
            clamp_invalid: true,
            format_label: LabelFormatter::identity(),
            format_y: ValueFormatter::compact_currency(),
        }
    }
}

impl CandlestickConfig {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
    pub fn with_animation(mut self, animated: bool, duration: Duration) -> Self {
        self.animated = animated;
        self.duration = duration;
        self
    }
    pub fn with_clamp_invalid(mut self, on: bool) -> Self {
        self.clamp_invalid = on;
        self
    }
    pub fn with_format_label(mut self, f: LabelFormatter) -> Self {
        self.format_label = f;
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    pub width: f32,
    /// Height of the tab header strip above the content.
    pub header_height: f32,
    #[serde(rename = "duration_ms", deserialize_with = "millis")]
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            header_height: 36.0,
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOutCubic,
        }
    }
}
