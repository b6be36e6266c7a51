//! Cell data structures for the spreadsheet grid.
//!
//! - [`CellKind`] - literal or formula, decided once from the raw text prefix
//! - [`Computed`] - the value a recompute pass derived for a cell
//! - [`Cell`] - raw text plus its computed value
//! - [`Grid`] - dense, fixed-shape, column-major storage of cells

use super::cell_ref::{CellRef, GridShape};
use super::error::{FormulaError, RefError};
use super::format::format_number;

/// Raw values starting with this character are formulas.
pub const FORMULA_PREFIX: char = '=';

/// Displayed in place of any formula that fails.
pub const ERROR_SENTINEL: &str = "!ERROR";

/// How a raw value is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind<'a> {
    /// Displayed verbatim.
    Literal(&'a str),
    /// Formula body, without the prefix.
    Formula(&'a str),
}

impl<'a> CellKind<'a> {
    pub fn classify(raw: &'a str) -> CellKind<'a> {
        match raw.strip_prefix(FORMULA_PREFIX) {
            Some(body) => CellKind::Formula(body),
            None => CellKind::Literal(raw),
        }
    }
}

/// Result of evaluating one cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Computed {
    /// A literal cell's raw text.
    Text(String),
    /// A formula that evaluated successfully.
    Number(f64),
    /// A formula that failed; displays as [`ERROR_SENTINEL`].
    Error(FormulaError),
}

impl Computed {
    /// The displayed value.
    pub fn display(&self) -> String {
        match self {
            Computed::Text(s) => s.clone(),
            Computed::Number(n) => format_number(*n),
            Computed::Error(_) => ERROR_SENTINEL.to_string(),
        }
    }

    /// Whether the value came from evaluating a formula.
    pub fn is_evaluated(&self) -> bool {
        !matches!(self, Computed::Text(_))
    }

    pub fn error(&self) -> Option<&FormulaError> {
        match self {
            Computed::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// A cell in the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    raw: String,
    computed: Computed,
}

impl Cell {
    pub(crate) fn empty() -> Cell {
        Cell {
            raw: String::new(),
            computed: Computed::Text(String::new()),
        }
    }

    /// The text last entered for this cell.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    pub fn computed(&self) -> &Computed {
        &self.computed
    }

    /// The displayed value.
    pub fn computed_value(&self) -> String {
        self.computed.display()
    }

    pub fn kind(&self) -> CellKind<'_> {
        CellKind::classify(&self.raw)
    }
}

/// Fixed-shape grid of cells, stored column by column.
///
/// Grids are snapshots: the only way to change one is
/// [`Grid::with_raw_value`](Grid::with_raw_value), which returns a new grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    shape: GridShape,
    columns: Vec<Vec<Cell>>,
}

impl Grid {
    /// A grid with every cell empty.
    pub fn new(shape: GridShape) -> Grid {
        Grid {
            shape,
            columns: vec![vec![Cell::empty(); shape.rows()]; shape.columns()],
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn cell(&self, at: CellRef) -> Result<&Cell, RefError> {
        let at = self.shape.check(at)?;
        Ok(&self.columns[at.col][at.row])
    }

    /// Cells in column-major order, the order a recompute pass visits them.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.columns.iter().enumerate().flat_map(|(col, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(row, cell)| (CellRef::new(col, row), cell))
        })
    }

    pub(crate) fn set_raw(&mut self, at: CellRef, text: &str) -> Result<(), RefError> {
        let at = self.shape.check(at)?;
        self.columns[at.col][at.row].raw = text.to_string();
        Ok(())
    }

    /// Caller guarantees `at` is inside the shape.
    pub(crate) fn set_computed(&mut self, at: CellRef, computed: Computed) {
        self.columns[at.col][at.row].computed = computed;
    }
}
