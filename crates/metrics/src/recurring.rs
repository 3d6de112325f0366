// File: crates/metrics/src/recurring.rs
// Summary: Monthly-equivalent normalization, yearly projection and next-occurrence selection.

use std::fmt;

use chrono::NaiveDate;

use crate::model::{Debt, Frequency, Subscription};

/// Lookahead window for "due soon".
pub const DUE_SOON_DAYS: i64 = 7;

/// A payment that repeats on a fixed cadence.
pub trait Recurring {
    fn name(&self) -> &str;
    fn payment(&self) -> f64;
    fn frequency(&self) -> Frequency;
    fn next_date(&self) -> NaiveDate;
    fn is_active(&self) -> bool {
        true
    }
}

impl Recurring for Subscription {
    fn name(&self) -> &str { &self.name }
    fn payment(&self) -> f64 { self.amount }
    fn frequency(&self) -> Frequency { self.frequency }
    fn next_date(&self) -> NaiveDate { self.next_billing }
    fn is_active(&self) -> bool { self.active }
}

impl Recurring for Debt {
    fn name(&self) -> &str { &self.name }
    fn payment(&self) -> f64 { self.monthly_payment }
    fn frequency(&self) -> Frequency { Frequency::Monthly }
    fn next_date(&self) -> NaiveDate { self.due_date }
    fn is_active(&self) -> bool { !self.is_paid_off() }
}

pub fn monthly_equivalent(amount: f64, frequency: Frequency) -> f64 {
    amount * frequency.monthly_factor()
}

/// Sum of monthly equivalents over active items.
pub fn monthly_total<T: Recurring>(items: &[T]) -> f64 {
    items
        .iter()
        .filter(|i| i.is_active())
        .map(|i| monthly_equivalent(i.payment(), i.frequency()))
        .sum()
}

pub fn yearly_projection<T: Recurring>(items: &[T]) -> f64 {
    monthly_total(items) * 12.0
}

/// Soonest active occurrence, or the "no upcoming payments" sentinel.
#[derive(Debug, PartialEq)]
pub enum Upcoming<'a, T> {
    Next(&'a T),
    NoneScheduled,
}

impl<'a, T> Upcoming<'a, T> {
    pub fn item(&self) -> Option<&'a T> {
        match self {
            Upcoming::Next(t) => Some(t),
            Upcoming::NoneScheduled => None,
        }
    }
}

impl<T: Recurring> fmt::Display for Upcoming<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upcoming::Next(t) => write!(f, "{} on {}", t.name(), t.next_date().format("%b %-d")),
            Upcoming::NoneScheduled => f.write_str("No upcoming payments"),
        }
    }
}

/// Earliest `next_date` among active items; ties go to the first listed.
pub fn next_upcoming<T: Recurring>(items: &[T]) -> Upcoming<'_, T> {
    items
        .iter()
        .filter(|i| i.is_active())
        .min_by_key(|i| i.next_date())
        .map_or(Upcoming::NoneScheduled, Upcoming::Next)
}

/// Advance `date` by `frequency` until it is on or after `today`.
pub fn next_billing_date(date: NaiveDate, frequency: Frequency, today: NaiveDate) -> NaiveDate {
    let mut next = date;
    while next < today {
        let advanced = frequency.advance(next);
        if advanced <= next {
            break;
        }
        next = advanced;
    }
    next
}

/// Signed whole days from `today` to `date`; negative when overdue.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

pub fn is_due_soon(date: NaiveDate, today: NaiveDate) -> bool {
    (0..=DUE_SOON_DAYS).contains(&days_until(date, today))
}

pub fn is_overdue(date: NaiveDate, today: NaiveDate) -> bool {
    days_until(date, today) < 0
}

/// Active items due within the lookahead window, soonest first.
pub fn due_soon<T: Recurring>(items: &[T], today: NaiveDate) -> Vec<&T> {
    let mut out: Vec<&T> = items.iter().filter(|i| i.is_active() && is_due_soon(i.next_date(), today)).collect();
    out.sort_by_key(|i| i.next_date());
    out
}
