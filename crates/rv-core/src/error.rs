//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RvError` as one variant
//! via `#[from]`, so configuration failures surface unchanged at the top.

use thiserror::Error;

/// The top-level error type for `rv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RvError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rv-*` crates.
pub type RvResult<T> = Result<T, RvError>;
