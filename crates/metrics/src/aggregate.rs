// File: crates/metrics/src/aggregate.rs
// Summary: Sum/count aggregation over transactions, optionally limited to a date range.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::model::{Transaction, TransactionKind};

/// Inclusive calendar date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Days in the range, counting both ends. Zero for an inverted range.
    pub fn days(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }

    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.days())
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Current calendar month up to and including `today`.
pub fn month_to_date(today: NaiveDate) -> DateRange {
    DateRange::new(month_start(today), today)
}

/// Span of every transaction, widened to include `today`.
pub fn covering(transactions: &[Transaction], today: NaiveDate) -> DateRange {
    transactions.iter().fold(DateRange::new(today, today), |r, t| {
        DateRange::new(r.start.min(t.date), r.end.max(t.date))
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub count: usize,
}

impl Summary {
    pub fn average(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.total / self.count as f64 }
    }
}

impl<'a> FromIterator<&'a f64> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().fold(Summary::default(), |s, v| Summary { total: s.total + v, count: s.count + 1 })
    }
}

fn selected<'a>(
    transactions: &'a [Transaction],
    kind: TransactionKind,
    range: Option<DateRange>,
) -> impl Iterator<Item = &'a Transaction> {
    transactions
        .iter()
        .filter(move |t| t.kind == kind && range.map_or(true, |r| r.contains(t.date)))
}

/// Total and count of `kind` transactions, within `range` when given.
pub fn summarize(transactions: &[Transaction], kind: TransactionKind, range: Option<DateRange>) -> Summary {
    selected(transactions, kind, range).map(|t| &t.amount).collect()
}

/// Income minus expenses over `range`.
pub fn net_balance(transactions: &[Transaction], range: Option<DateRange>) -> f64 {
    summarize(transactions, TransactionKind::Income, range).total
        - summarize(transactions, TransactionKind::Expense, range).total
}

/// Per-category totals, largest first. Ties keep first-seen order.
pub fn by_category(transactions: &[Transaction], kind: TransactionKind, range: Option<DateRange>) -> Vec<(String, f64)> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for t in selected(transactions, kind, range) {
        let entry = totals.entry(t.category.as_str()).or_insert_with(|| {
            order.push(t.category.clone());
            0.0
        });
        *entry += t.amount;
    }
    let mut out: Vec<(String, f64)> = order
        .into_iter()
        .map(|c| {
            let v = totals.get(c.as_str()).copied().unwrap_or(0.0);
            (c, v)
        })
        .collect();
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    out
}
