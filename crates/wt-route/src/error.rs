//! Error types for wt-route.
//!
//! Only loading can fail.  Index construction itself never errors: bad rows
//! are dropped, bad timestamps fall back, per the engine-wide policy of
//! treating uploads as untrusted, partial data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
