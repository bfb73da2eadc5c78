//! Error types for wt-layout.
//!
//! Geometry itself never fails — degenerate inputs degrade to minimal valid
//! outputs.  Errors exist only at the loading boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("slot data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
