// File: crates/demo/src/sample.rs
// Summary: Deterministic in-memory sample records anchored at a reference day.

use chrono::{Datelike, Days, NaiveDate};
use fintrack_metrics::{Debt, DebtKind, Frequency, Goal, SavingsAccount, Subscription, Transaction};

pub struct SampleBook {
    pub transactions: Vec<Transaction>,
    pub subscriptions: Vec<Subscription>,
    pub debts: Vec<Debt>,
    pub goals: Vec<Goal>,
    pub savings: Vec<SavingsAccount>,
}

fn days_ago(today: NaiveDate, n: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(n)).unwrap_or(today)
}

fn days_ahead(today: NaiveDate, n: u64) -> NaiveDate {
    today.checked_add_days(Days::new(n)).unwrap_or(today)
}

/// Ninety days of income and spending ending at `today`.
pub fn transactions(today: NaiveDate) -> Vec<Transaction> {
    const ROTATION: [(&str, f64); 5] =
        [("food", 38.0), ("transport", 14.5), ("food", 22.0), ("entertainment", 31.0), ("shopping", 56.0)];
    let mut out = Vec::new();
    for n in (0..90u64).rev() {
        let d = days_ago(today, n);
        match d.day() {
            1 => {
                out.push(Transaction::income(d, 3200.0, "salary").with_description("Payroll"));
                out.push(Transaction::expense(d, 1250.0, "housing").with_description("Rent"));
            }
            15 => out.push(Transaction::income(d, 420.0, "freelance").with_description("Client invoice")),
            20 => out.push(Transaction::expense(d, 96.4, "utilities").with_description("Power & water")),
            _ => {}
        }
        if n % 2 == 0 {
            let (category, base) = ROTATION[(n / 2) as usize % ROTATION.len()];
            // deterministic wobble so candles have bodies
            let amount = base * (1.0 + ((n * 7) % 11) as f64 / 10.0);
            out.push(Transaction::expense(d, (amount * 100.0).round() / 100.0, category));
        }
    }
    out
}

pub fn book(today: NaiveDate) -> SampleBook {
    SampleBook {
        transactions: transactions(today),
        subscriptions: vec![
            Subscription::new("Netflix", 15.99, Frequency::Monthly, days_ahead(today, 5)),
            Subscription::new("Spotify", 9.99, Frequency::Monthly, days_ahead(today, 12)),
            Subscription::new("Gym Membership", 52.99, Frequency::Monthly, days_ahead(today, 2)),
            Subscription::new("iCloud Storage", 4.00, Frequency::Monthly, days_ahead(today, 20)),
            Subscription::new("News App", 0.99, Frequency::Monthly, days_ago(today, 3)).inactive(),
        ],
        debts: vec![
            Debt::new("Chase Visa", 5000.0, 2500.0, days_ahead(today, 6)).with_monthly_payment(200.0),
            Debt::new("Honda Civic", 18_000.0, 7_200.0, days_ahead(today, 14)).with_monthly_payment(385.0),
            Debt::new("Federal Loan", 24_000.0, 6_000.0, days_ahead(today, 21))
                .with_kind(DebtKind::StudentLoan)
                .with_monthly_payment(260.0),
        ],
        goals: vec![
            Goal::new("Emergency Fund", 25_000.0, 25_000.0),
            Goal::new("Japan Trip", 6_000.0, 2_150.0),
            Goal::new("New Laptop", 2_400.0, 600.0),
        ],
        savings: vec![
            SavingsAccount::new("High-Yield Savings", 12_400.0, 4.25),
            SavingsAccount::new("Brokerage Cash", 3_150.0, 1.5),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_deterministic_and_dated_within_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let a = transactions(today);
        assert_eq!(a, transactions(today));
        assert!(a.iter().all(|t| t.date <= today && t.date > days_ago(today, 90)));
        assert!(a.iter().any(|t| t.category == "salary"));
    }
}
