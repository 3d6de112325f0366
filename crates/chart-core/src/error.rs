// File: crates/chart-core/src/error.rs
// Summary: Error type for the few fallible chart operations (tab selection, candle validation, file output).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("tab index {index} out of range ({len} tabs)")]
    TabOutOfRange { index: usize, len: usize },

    #[error("no tab with key '{0}'")]
    UnknownTab(String),

    #[error("invalid candle: {0}")]
    InvalidCandle(&'static str),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
