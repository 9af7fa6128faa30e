//! Grid-subsystem error type.

use thiserror::Error;

use oc_core::PlanId;

/// Errors produced by `oc-grid`.
///
/// All of them come from building a [`Layout`](crate::Layout); queries on a
/// built grid are total and never fail.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("layout has no cells")]
    EmptyLayout,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown cell symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("office plan {0} is not registered")]
    PlanNotFound(PlanId),
}

pub type GridResult<T> = Result<T, GridError>;
