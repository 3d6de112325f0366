// File: crates/chart-core/src/format.rs
// Summary: Label formatters (caller-supplied closures plus currency/percent defaults).

use std::fmt;
use std::sync::Arc;

/// Shared closure formatting a numeric value for display.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl ValueFormatter {
    pub fn new(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(&self, v: f64) -> String {
        (self.0)(v)
    }

    /// `$1.2k`-style compact currency (the default Y formatter).
    pub fn compact_currency() -> Self {
        Self::new(compact_currency)
    }

    pub fn currency() -> Self {
        Self::new(currency)
    }

    pub fn plain() -> Self {
        Self::new(|v| format!("{v}"))
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::compact_currency()
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// Shared closure rewriting a label string (dates, categories) before display.
#[derive(Clone)]
pub struct LabelFormatter(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl LabelFormatter {
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(&self, label: &str) -> String {
        (self.0)(label)
    }

    pub fn identity() -> Self {
        Self::new(str::to_string)
    }
}

impl Default for LabelFormatter {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LabelFormatter(..)")
    }
}

/// `$950`, `$12.50`, `$1.3k`, `$3.4M`. The unit is picked after rounding, so
/// `999.999` reads `$1.0k` rather than `$1000.00`.
pub fn compact_currency(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let a = v.abs();
    let tenths_of_k = (a / 100.0).round() / 10.0;
    let cents = (a * 100.0).round() / 100.0;
    if tenths_of_k >= 1_000.0 {
        format!("{sign}${:.1}M", a / 1_000_000.0)
    } else if cents >= 1_000.0 {
        format!("{sign}${:.1}k", a / 1_000.0)
    } else if a.fract() == 0.0 {
        format!("{sign}${a:.0}")
    } else {
        format!("{sign}${a:.2}")
    }
}

/// `$1,234.56` with thousands separators.
pub fn currency(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let cents = (v.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn percent(v: f64) -> String {
    format!("{:.0}%", v)
}
