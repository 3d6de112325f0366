// File: crates/metrics/tests/shape.rs
// Purpose: Aggregation, periods and shaping of transactions into chart inputs.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use fintrack_chart::Label;
use fintrack_metrics::aggregate::{by_category, covering, month_to_date, net_balance, summarize};
use fintrack_metrics::category::ExpenseCategory;
use fintrack_metrics::shape::{category_bars, daily_series, monthly_series, weekly_expense_candles};
use fintrack_metrics::{DateRange, Period, PeriodSelector, Transaction, TransactionKind};

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn ledger() -> Vec<Transaction> {
    vec![
        Transaction::income(day(2, 25), 3000.0, "salary"),
        Transaction::expense(day(2, 27), 80.0, "food"),
        Transaction::income(day(3, 1), 3200.0, "salary"),
        Transaction::expense(day(3, 4), 40.0, "food"),
        Transaction::expense(day(3, 4), 12.5, "transport"),
        Transaction::expense(day(3, 5), 1200.0, "housing"),
        Transaction::expense(day(3, 7), 25.0, "food"),
        Transaction::expense(day(3, 11), 60.0, "mystery"),
    ]
}

#[test]
fn month_to_date_summary() {
    let today = day(3, 10);
    let range = month_to_date(today);
    assert_eq!(range, DateRange::new(day(3, 1), today));

    let spent = summarize(&ledger(), TransactionKind::Expense, Some(range));
    assert_eq!(spent.count, 4);
    assert!((spent.total - 1277.5).abs() < 1e-9);

    let all = summarize(&ledger(), TransactionKind::Expense, None);
    assert_eq!(all.count, 6);
    assert!((net_balance(&ledger(), Some(range)) - (3200.0 - 1277.5)).abs() < 1e-9);
}

#[test]
fn categories_sorted_by_total() {
    let cats = by_category(&ledger(), TransactionKind::Expense, None);
    let tags: Vec<&str> = cats.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(tags, vec!["housing", "food", "mystery", "transport"]);
    assert_eq!(cats[1].1, 145.0);
}

#[test]
fn category_bars_carry_registry_colors() {
    let bars = category_bars(&ledger(), None);
    assert_eq!(bars[0].label, "housing");
    assert_eq!(bars[0].color, Some(ExpenseCategory::Housing.style().color));
    let mystery = bars.iter().find(|b| b.label == "mystery").unwrap();
    assert_eq!(mystery.color, None);
}

#[test]
fn daily_series_zero_fills() {
    let series = daily_series(&ledger(), TransactionKind::Expense, DateRange::new(day(3, 3), day(3, 6)));
    let ys: Vec<f64> = series.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![0.0, 52.5, 1200.0, 0.0]);
    assert_eq!(series[1].x, Label::Text("Mar 4".into()));
}

#[test]
fn monthly_series_runs_oldest_first() {
    let series = monthly_series(&ledger(), TransactionKind::Income, 3, day(3, 10));
    let labels: Vec<String> = series.iter().map(|p| p.x.to_string()).collect();
    assert_eq!(labels, vec!["Jan", "Feb", "Mar"]);
    assert_eq!(series[0].y, 0.0);
    assert_eq!(series[1].y, 3000.0);
    assert_eq!(series[2].y, 3200.0);
}

#[test]
fn weekly_candles_bucket_daily_totals() {
    // 2024-03-04 is a Monday.
    let candles = weekly_expense_candles(&ledger(), DateRange::new(day(3, 4), day(3, 17)));
    assert_eq!(candles.len(), 2);

    let first = &candles[0];
    assert_eq!(first.date, "2024-03-04");
    assert_eq!(first.open, 52.5);
    assert_eq!(first.high, 1200.0);
    assert_eq!(first.low, 0.0);
    assert_eq!(first.close, 0.0);
    assert!(first.validate().is_ok());

    let second = &candles[1];
    assert_eq!(second.open, 60.0);
    assert_eq!(second.high, 60.0);
    assert_eq!(second.close, 0.0);
}

#[test]
fn periods_end_today() {
    let today = day(5, 15);
    assert_eq!(Period::Week.range(today), Some(DateRange::new(day(5, 9), today)));
    assert_eq!(Period::Month.range(today), Some(DateRange::new(day(5, 1), today)));
    assert_eq!(Period::Quarter.range(today), Some(DateRange::new(day(4, 1), today)));
    assert_eq!(Period::Year.range(today), Some(DateRange::new(day(1, 1), today)));
    assert_eq!(Period::All.range(today), None);
    assert_eq!("quarter".parse::<Period>(), Ok(Period::Quarter));
}

#[test]
fn selector_notifies_on_change_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut selector = PeriodSelector::new(Period::Month).on_range_change(move |p, r| sink.borrow_mut().push((p, r)));
    let today = day(5, 15);

    let (_, changed) = selector.select(Period::Month, today);
    assert!(!changed);
    let (range, changed) = selector.select(Period::Week, today);
    assert!(changed);
    assert_eq!(range, Some(DateRange::new(day(5, 9), today)));
    assert_eq!(selector.period(), Period::Week);
    assert_eq!(seen.borrow().as_slice(), &[(Period::Week, range)]);
}

#[test]
fn covering_range_spans_the_whole_ledger() {
    let today = day(3, 10);
    let range = covering(&ledger(), today);
    assert_eq!(range, DateRange::new(day(2, 25), day(3, 11)));
    assert_eq!(summarize(&ledger(), TransactionKind::Expense, Some(range)).count, 6);

    let series = daily_series(&ledger(), TransactionKind::Expense, range);
    assert_eq!(series.len(), range.days());

    assert_eq!(covering(&[], today), DateRange::new(today, today));
}
