//! Parameter validation error.
//!
//! Sub-crates define their own error enums; `oc-sim` wraps `CoreError` as
//! one variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `oc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `oc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
