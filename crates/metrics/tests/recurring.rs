// File: crates/metrics/tests/recurring.rs
// Purpose: Monthly normalization, yearly projection, next-occurrence and due-date helpers.

use chrono::NaiveDate;
use fintrack_metrics::recurring::{
    days_until, due_soon, is_due_soon, monthly_equivalent, monthly_total, next_billing_date, next_upcoming,
    yearly_projection,
};
use fintrack_metrics::{Debt, Frequency, Subscription, Upcoming};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn streaming() -> Vec<Subscription> {
    vec![
        Subscription::new("Netflix", 15.99, Frequency::Monthly, day(2024, 3, 15)),
        Subscription::new("Spotify", 9.99, Frequency::Monthly, day(2024, 3, 8)),
        Subscription::new("Gym", 52.99, Frequency::Monthly, day(2024, 3, 1)),
        Subscription::new("iCloud", 4.00, Frequency::Monthly, day(2024, 3, 20)),
        Subscription::new("Old app", 0.99, Frequency::Monthly, day(2024, 2, 1)).inactive(),
    ]
}

#[test]
fn active_subscriptions_total_and_projection() {
    let subs = streaming();
    assert!((monthly_total(&subs) - 82.97).abs() < 1e-9);
    assert!((yearly_projection(&subs) - 995.64).abs() < 1e-9);
}

#[test]
fn frequencies_normalize_to_monthly() {
    assert!((monthly_equivalent(10.0, Frequency::Weekly) - 43.3).abs() < 1e-9);
    assert_eq!(monthly_equivalent(10.0, Frequency::Monthly), 10.0);
    assert!((monthly_equivalent(120.0, Frequency::Yearly) - 10.0).abs() < 1e-9);

    let mixed = vec![
        Subscription::new("Paper", 5.0, Frequency::Weekly, day(2024, 1, 1)),
        Subscription::new("Domain", 24.0, Frequency::Yearly, day(2024, 1, 1)),
    ];
    assert!((monthly_total(&mixed) - (5.0 * 4.33 + 2.0)).abs() < 1e-9);
}

#[test]
fn next_upcoming_skips_inactive_and_picks_soonest() {
    let subs = streaming();
    match next_upcoming(&subs) {
        Upcoming::Next(s) => assert_eq!(s.name, "Gym"),
        Upcoming::NoneScheduled => panic!("expected an upcoming payment"),
    }
    assert_eq!(next_upcoming(&subs).to_string(), "Gym on Mar 1");
}

#[test]
fn empty_or_all_inactive_yields_sentinel() {
    let none: Vec<Subscription> = Vec::new();
    assert_eq!(next_upcoming(&none), Upcoming::NoneScheduled);
    assert_eq!(next_upcoming(&none).to_string(), "No upcoming payments");

    let inactive = vec![Subscription::new("x", 1.0, Frequency::Monthly, day(2024, 1, 1)).inactive()];
    assert!(next_upcoming(&inactive).item().is_none());
}

#[test]
fn paid_off_debts_are_not_upcoming() {
    let debts = vec![
        Debt::new("Visa", 1000.0, 1000.0, day(2024, 3, 2)).with_monthly_payment(100.0),
        Debt::new("Car loan", 9000.0, 3000.0, day(2024, 3, 10)).with_monthly_payment(350.0),
    ];
    assert_eq!(next_upcoming(&debts).item().map(|d| d.name.as_str()), Some("Car loan"));
    assert_eq!(monthly_total(&debts), 350.0);
}

#[test]
fn billing_dates_roll_forward_by_frequency() {
    let today = day(2024, 3, 10);
    assert_eq!(next_billing_date(day(2024, 1, 31), Frequency::Monthly, today), day(2024, 3, 29));
    assert_eq!(next_billing_date(day(2024, 3, 1), Frequency::Weekly, today), day(2024, 3, 15));
    assert_eq!(next_billing_date(day(2023, 6, 1), Frequency::Yearly, today), day(2024, 6, 1));
    assert_eq!(next_billing_date(day(2024, 4, 1), Frequency::Monthly, today), day(2024, 4, 1));
}

#[test]
fn due_soon_window_is_seven_days() {
    let today = day(2024, 3, 1);
    assert_eq!(days_until(day(2024, 3, 8), today), 7);
    assert!(is_due_soon(day(2024, 3, 1), today));
    assert!(is_due_soon(day(2024, 3, 8), today));
    assert!(!is_due_soon(day(2024, 3, 9), today));
    assert!(!is_due_soon(day(2024, 2, 29), today));

    let subs = streaming();
    let names: Vec<&str> = due_soon(&subs, today).into_iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Gym", "Spotify"]);
}
