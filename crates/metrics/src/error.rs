// File: crates/metrics/src/error.rs
// Summary: Error type for metrics helpers.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("page {page} is outside 1..={total_pages}")]
    InvalidPage { page: usize, total_pages: usize },
    #[error("unknown category tag '{0}'")]
    UnknownCategory(String),
    #[error("unknown period '{0}'")]
    UnknownPeriod(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
