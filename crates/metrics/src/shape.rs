// File: crates/metrics/src/shape.rs
// Summary: Shape transactions into chart inputs (line series, category bars, weekly expense candles).

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate, Weekday};
use fintrack_chart::{BarPoint, Candle, LinePoint};
use tracing::warn;

use crate::aggregate::{by_category, month_start, DateRange};
use crate::category::ExpenseCategory;
use crate::model::{Transaction, TransactionKind};

fn daily_totals(transactions: &[Transaction], kind: TransactionKind, range: DateRange) -> BTreeMap<NaiveDate, f64> {
    let mut days: BTreeMap<NaiveDate, f64> = range.iter_days().map(|d| (d, 0.0)).collect();
    for t in transactions.iter().filter(|t| t.kind == kind) {
        if let Some(v) = days.get_mut(&t.date) {
            *v += t.amount;
        }
    }
    days
}

/// One point per day in `range` (zero-filled), labelled `Mon 4`-style.
pub fn daily_series(transactions: &[Transaction], kind: TransactionKind, range: DateRange) -> Vec<LinePoint> {
    daily_totals(transactions, kind, range)
        .into_iter()
        .map(|(d, v)| LinePoint::new(d.format("%b %-d").to_string(), v))
        .collect()
}

/// Totals for the `months` calendar months ending with the one containing `today`, oldest first.
pub fn monthly_series(transactions: &[Transaction], kind: TransactionKind, months: u32, today: NaiveDate) -> Vec<LinePoint> {
    let current = month_start(today);
    (0..months)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .map(|start| {
            let total: f64 = transactions
                .iter()
                .filter(|t| t.kind == kind && month_start(t.date) == start)
                .map(|t| t.amount)
                .sum();
            LinePoint::new(start.format("%b").to_string(), total)
        })
        .collect()
}

/// Expense breakdown as bars, largest first, colored by category. Unknown tags keep the theme color.
pub fn category_bars(transactions: &[Transaction], range: Option<DateRange>) -> Vec<BarPoint> {
    by_category(transactions, TransactionKind::Expense, range)
        .into_iter()
        .map(|(tag, total)| match tag.parse::<ExpenseCategory>() {
            Ok(c) => BarPoint::new(tag, total).with_color(c.style().color),
            Err(err) => {
                warn!(%err, "expense category without style");
                BarPoint::new(tag, total)
            }
        })
        .collect()
}

/// Weekly candles over daily expense totals: open is the first day of the week,
/// close the last, high/low the extremes. Weeks start on Monday; partial weeks
/// at the edges of `range` use the days available.
pub fn weekly_expense_candles(transactions: &[Transaction], range: DateRange) -> Vec<Candle> {
    let days = daily_totals(transactions, TransactionKind::Expense, range);
    let mut weeks: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for (d, v) in days {
        let monday = d.week(Weekday::Mon).first_day();
        weeks.entry(monday).or_default().push(v);
    }
    weeks
        .into_iter()
        .filter_map(|(monday, values)| {
            let open = *values.first()?;
            let close = *values.last()?;
            let (low, high) = values.iter().fold((open, open), |(lo, hi), &v| (lo.min(v), hi.max(v)));
            Some(Candle::new(monday.format("%Y-%m-%d").to_string(), open, high, low, close))
        })
        .collect()
}
