// File: crates/chart-core/src/series.rs
// Summary: Point models for line, bar and candlestick charts.

use std::fmt;

use serde::Deserialize;

use crate::error::ChartError;
use crate::theme::Color;

/// X label of a line point: free text (`"Jan"`) or a number (`12`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(s) => f.write_str(s),
            Label::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self { Label::Text(s.to_string()) }
}

impl From<String> for Label {
    fn from(s: String) -> Self { Label::Text(s) }
}

impl From<f64> for Label {
    fn from(n: f64) -> Self { Label::Number(n) }
}

impl From<i32> for Label {
    fn from(n: i32) -> Self { Label::Number(n as f64) }
}

/// One sample of a line series. Order across a slice is chronological.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LinePoint {
    pub x: Label,
    pub y: f64,
}

impl LinePoint {
    pub fn new(x: impl Into<Label>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// One bar; `color` overrides the theme's bar color.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<Color>,
}

impl BarPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, color: None }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Candle {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Construct without validation; renderers tolerate inconsistent values.
    pub fn new(date: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { date: date.into(), open, high, low, close }
    }

    /// Try to construct a candle enforcing OHLC invariants:
    /// low <= min(open,close) and high >= max(open,close), and low <= high.
    pub fn try_new(
        date: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Result<Self, ChartError> {
        let c = Self::new(date, open, high, low, close);
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let lo = self.open.min(self.close);
        let hi = self.open.max(self.close);
        if self.low > lo { return Err(ChartError::InvalidCandle("low above min(open,close)")); }
        if self.high < hi { return Err(ChartError::InvalidCandle("high below max(open,close)")); }
        if self.low > self.high { return Err(ChartError::InvalidCandle("low above high")); }
        Ok(())
    }

    /// Copy with high/low widened to cover open and close.
    pub fn clamped(&self) -> Self {
        Self {
            date: self.date.clone(),
            open: self.open,
            close: self.close,
            high: self.high.max(self.open).max(self.close),
            low: self.low.min(self.open).min(self.close),
        }
    }

    /// Close at or above open.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    pub fn values(&self) -> [f64; 4] {
        [self.open, self.high, self.low, self.close]
    }
}
