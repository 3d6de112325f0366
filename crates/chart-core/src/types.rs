// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (default sizes, paddings, label bands).

/// Default chart width in pixels (phone-width card).
pub const WIDTH: f32 = 350.0;
/// Default line chart height in pixels.
pub const LINE_HEIGHT: f32 = 220.0;
/// Default bar chart height in pixels.
pub const BAR_HEIGHT: f32 = 200.0;
/// Default candlestick chart height in pixels.
pub const CANDLE_HEIGHT: f32 = 250.0;
/// Default padding applied on every side of the drawing region.
pub const PADDING: f32 = 20.0;

/// Vertical distance between the plot baseline and an X label baseline.
pub const X_LABEL_OFFSET: f32 = 14.0;
/// Horizontal gap between the plot's left edge and a Y label's right edge.
pub const Y_LABEL_GAP: f32 = 4.0;
/// Font size used for axis and value labels.
pub const LABEL_FONT_SIZE: f32 = 10.0;

/// Surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
