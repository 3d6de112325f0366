// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports scales, renderers, switcher and scene/SVG output.

pub mod animation;
pub mod bar;
pub mod candle;
pub mod chart;
pub mod config;
pub mod error;
pub mod feedback;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod path;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod switcher;
pub mod theme;
pub mod types;

pub use animation::{AnimatedValue, Clock, Easing, ManualClock, MonotonicClock, Tween};
pub use bar::BarChart;
pub use candle::CandlestickChart;
pub use chart::{Chart, ChartRenderer};
pub use config::{BarChartConfig, CandlestickConfig, LineChartConfig, SwitcherConfig};
pub use error::ChartError;
pub use feedback::{HapticKind, Haptics, NoHaptics};
pub use format::{LabelFormatter, ValueFormatter};
pub use line::LineChart;
pub use scene::{Scene, Shape};
pub use series::{BarPoint, Candle, Label, LinePoint};
pub use switcher::{ChartSwitcher, Tab};
pub use theme::{Color, Theme};
