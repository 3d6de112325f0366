// File: crates/metrics/src/model.rs
// Summary: In-memory finance records owned by callers and passed in as read-only snapshots.

use chrono::{Months, NaiveDate};
use serde::Deserialize;

use crate::category::DebtKind;

/// Recurrence cadence of subscriptions and debt payments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// Weeks per month used for weekly normalization. Approximation, not calendar math.
    pub const WEEKS_PER_MONTH: f64 = 4.33;

    /// Multiplier converting one payment at this cadence into a monthly amount.
    pub fn monthly_factor(self) -> f64 {
        match self {
            Frequency::Weekly => Self::WEEKS_PER_MONTH,
            Frequency::Monthly => 1.0,
            Frequency::Yearly => 1.0 / 12.0,
        }
    }

    /// The occurrence after `date`. Month arithmetic clamps to the last day of shorter months.
    pub fn advance(self, date: NaiveDate) -> NaiveDate {
        let next = match self {
            Frequency::Weekly => date.checked_add_days(chrono::Days::new(7)),
            Frequency::Monthly => date.checked_add_months(Months::new(1)),
            Frequency::Yearly => date.checked_add_months(Months::new(12)),
        };
        next.unwrap_or(NaiveDate::MAX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// One income or expense entry. `category` is a free tag resolved through the
/// category registries when a style is needed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn income(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self { date, kind: TransactionKind::Income, amount, category: category.into(), description: String::new() }
    }

    pub fn expense(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self { date, kind: TransactionKind::Expense, amount, category: category.into(), description: String::new() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Subscription {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub frequency: Frequency,
    pub next_billing: NaiveDate,
    #[serde(default = "yes")]
    pub active: bool,
}

fn yes() -> bool {
    true
}

impl Subscription {
    pub fn new(name: impl Into<String>, amount: f64, frequency: Frequency, next_billing: NaiveDate) -> Self {
        Self { name: name.into(), amount, frequency, next_billing, active: true }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Debt {
    pub name: String,
    /// Explicit kind; when absent, [`Debt::kind`] falls back to [`DebtKind::guess_from_name`].
    #[serde(default)]
    pub kind: Option<DebtKind>,
    pub amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub monthly_payment: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub interest_rate: f64,
}

impl Debt {
    pub fn new(name: impl Into<String>, amount: f64, paid_amount: f64, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            kind: None,
            amount,
            paid_amount,
            monthly_payment: 0.0,
            due_date,
            interest_rate: 0.0,
        }
    }

    pub fn with_kind(mut self, kind: DebtKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_monthly_payment(mut self, payment: f64) -> Self {
        self.monthly_payment = payment;
        self
    }

    pub fn kind(&self) -> DebtKind {
        self.kind.unwrap_or_else(|| DebtKind::guess_from_name(&self.name))
    }

    /// Outstanding balance; overpayment reports zero.
    pub fn remaining(&self) -> f64 {
        (self.amount - self.paid_amount).max(0.0)
    }

    pub fn is_paid_off(&self) -> bool {
        self.remaining() <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64, current_amount: f64) -> Self {
        Self { name: name.into(), target_amount, current_amount, deadline: None }
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SavingsAccount {
    pub name: String,
    pub balance: f64,
    /// Annual rate in percent.
    #[serde(default)]
    pub interest_rate: f64,
}

impl SavingsAccount {
    pub fn new(name: impl Into<String>, balance: f64, interest_rate: f64) -> Self {
        Self { name: name.into(), balance, interest_rate }
    }

    /// Simple (non-compounded) interest over one year.
    pub fn yearly_interest(&self) -> f64 {
        self.balance * self.interest_rate / 100.0
    }
}

/// Sum of balances across accounts.
pub fn total_savings(accounts: &[SavingsAccount]) -> f64 {
    accounts.iter().map(|a| a.balance).sum()
}
