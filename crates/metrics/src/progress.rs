// File: crates/metrics/src/progress.rs
// Summary: Current/target percentages; raw value kept uncapped, display value clamped.

use std::fmt;

use fintrack_chart::format::percent;

use crate::model::{Debt, Goal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// `current / target * 100`, may exceed 100 or be negative.
    pub percent: f64,
}

impl Progress {
    /// Zero target yields 0%.
    pub fn of(current: f64, target: f64) -> Self {
        let percent = if target > 0.0 { current / target * 100.0 } else { 0.0 };
        Self { percent }
    }

    /// Percentage clamped for progress bars.
    pub fn display_percent(&self) -> f64 {
        if self.percent.is_nan() { 0.0 } else { self.percent.clamp(0.0, 100.0) }
    }

    /// Bar fill fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.display_percent() / 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&percent(self.percent))
    }
}

impl Goal {
    pub fn progress(&self) -> Progress {
        Progress::of(self.current_amount, self.target_amount)
    }

    pub fn is_completed(&self) -> bool {
        self.progress().is_complete()
    }
}

impl Debt {
    pub fn progress(&self) -> Progress {
        Progress::of(self.paid_amount, self.amount)
    }
}

/// Spending against a budget; over 100% means over budget.
pub fn budget_usage(spent: f64, budget: f64) -> Progress {
    Progress::of(spent, budget)
}

/// Combined paid/total across debts.
pub fn overall_debt_progress(debts: &[Debt]) -> Progress {
    let (paid, total) = debts.iter().fold((0.0, 0.0), |(p, t), d| (p + d.paid_amount, t + d.amount));
    Progress::of(paid, total)
}
