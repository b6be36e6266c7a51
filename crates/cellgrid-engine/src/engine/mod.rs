//! Calculation engine API.
//!
//! - [`Cell`], [`CellKind`], [`Computed`], [`Grid`] - grid data model
//! - [`CellRef`], [`GridShape`], [`decode`], [`encode_column`] - reference resolution
//! - [`tokenize`], [`sanitize`] - formula body lexing
//! - [`FormulaEvaluator`] - formula evaluation through Rhai
//! - [`Grid::with_raw_value`] - edit + full recompute pass
//! - [`format_number`] - number display

mod cell;
mod cell_ref;
mod error;
mod eval;
mod format;
mod recalc;
mod tokenize;

pub use cell::{Cell, CellKind, Computed, ERROR_SENTINEL, FORMULA_PREFIX, Grid};
pub use cell_ref::{COLUMNS, CellRef, GridShape, ROWS, decode, encode_column};
pub use error::{FormulaError, RefError, ShapeError};
pub use eval::{FormulaEvaluator, create_engine};
pub use format::format_number;
pub use tokenize::{Token, sanitize, tokenize};
