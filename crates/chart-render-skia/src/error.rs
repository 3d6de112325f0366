// File: crates/chart-render-skia/src/error.rs
// Summary: Raster backend errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("raster backend not compiled in; rebuild with the `raster` feature")]
    BackendDisabled,
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error("pixel readback failed")]
    Readback,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
