// File: crates/metrics/src/lib.rs
// Summary: Metrics library entry point; stateless transforms over in-memory finance records.

pub mod aggregate;
pub mod category;
pub mod error;
pub mod model;
pub mod paginate;
pub mod period;
pub mod progress;
pub mod recurring;
pub mod shape;

pub use aggregate::{DateRange, Summary};
pub use category::{CategoryStyle, DebtKind, ExpenseCategory, IncomeCategory};
pub use error::MetricsError;
pub use model::{Debt, Frequency, Goal, SavingsAccount, Subscription, Transaction, TransactionKind};
pub use paginate::{paginate, Page};
pub use period::{Period, PeriodSelector};
pub use progress::Progress;
pub use recurring::{Recurring, Upcoming};
