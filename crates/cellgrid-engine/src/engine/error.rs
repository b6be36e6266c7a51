//! Error types for the calculation engine.
//!
//! [`RefError`] and [`ShapeError`] are hard failures returned to callers.
//! [`FormulaError`] is recovered inside the evaluator and kept on the cell,
//! which only ever displays the flat [`ERROR_SENTINEL`](super::ERROR_SENTINEL).

use thiserror::Error;

/// A coordinate or reference token that cannot address a cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    #[error("invalid cell reference: {0:?}")]
    Malformed(String),

    #[error("cell {col_label}{row_label} is outside the {columns}x{rows} grid")]
    OutOfRange {
        col_label: String,
        row_label: usize,
        columns: usize,
        rows: usize,
    },
}

/// Rejected grid shape configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("column count must be between 1 and 26, got {0}")]
    Columns(usize),

    #[error("row count must be at least 1, got {0}")]
    Rows(usize),
}

/// Why a formula cell could not produce a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,

    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),

    #[error("unexpected {0:?} in formula")]
    UnexpectedToken(char),

    #[error("malformed number {0:?}")]
    MalformedNumber(String),

    #[error(transparent)]
    Reference(#[from] RefError),

    #[error("{reference} holds {value:?}, which is not a number")]
    NotANumber { reference: String, value: String },

    #[error("{0} holds an error")]
    ReferencedError(String),

    #[error("evaluation failed: {0}")]
    Evaluation(String),

    #[error("result is not a finite number")]
    NonFinite,
}
