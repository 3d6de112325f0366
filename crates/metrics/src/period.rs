// File: crates/metrics/src/period.rs
// Summary: Reporting periods relative to a reference day, and a selector that notifies on change.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use fintrack_chart::feedback::{trigger_quietly, HapticKind, Haptics, NoHaptics};
use serde::Deserialize;
use tracing::debug;

use crate::aggregate::{month_start, DateRange};
use crate::error::MetricsError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last seven days including today.
    Week,
    #[default]
    Month,
    Quarter,
    Year,
    All,
}

impl Period {
    pub const ALL: [Period; 5] = [Period::Week, Period::Month, Period::Quarter, Period::Year, Period::All];

    pub fn label(self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Quarter => "Quarter",
            Period::Year => "Year",
            Period::All => "All",
        }
    }

    /// Date window ending at `today`; `None` means unbounded.
    pub fn range(self, today: NaiveDate) -> Option<DateRange> {
        let start = match self {
            Period::Week => today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN),
            Period::Month => month_start(today),
            Period::Quarter => {
                let first_month = (today.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(today.year(), first_month, 1).unwrap_or(today)
            }
            Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
            Period::All => return None,
        };
        Some(DateRange::new(start, today))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MetricsError::UnknownPeriod(s.to_string()))
    }
}

type RangeCallback = Box<dyn FnMut(Period, Option<DateRange>)>;

/// Segmented period picker. Notifies subscribers only when the period actually changes.
pub struct PeriodSelector {
    period: Period,
    haptics: Box<dyn Haptics>,
    on_range_change: Option<RangeCallback>,
}

impl PeriodSelector {
    pub fn new(period: Period) -> Self {
        Self { period, haptics: Box::new(NoHaptics), on_range_change: None }
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn on_range_change(mut self, f: impl FnMut(Period, Option<DateRange>) + 'static) -> Self {
        self.on_range_change = Some(Box::new(f));
        self
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn range(&self, today: NaiveDate) -> Option<DateRange> {
        self.period.range(today)
    }

    /// Switch to `period`, returning its window. Returns `true` alongside when it changed.
    pub fn select(&mut self, period: Period, today: NaiveDate) -> (Option<DateRange>, bool) {
        let range = period.range(today);
        if period == self.period {
            return (range, false);
        }
        debug!(from = %self.period, to = %period, "period changed");
        self.period = period;
        trigger_quietly(&*self.haptics, HapticKind::Light);
        if let Some(cb) = self.on_range_change.as_mut() {
            cb(period, range);
        }
        (range, true)
    }
}

impl Default for PeriodSelector {
    fn default() -> Self {
        Self::new(Period::default())
    }
}
