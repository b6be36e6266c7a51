//! Cell reference parsing and formatting.
//!
//! Two notations are understood:
//!
//! - **Reference tokens** inside formulas: exactly one uppercase letter and one
//!   digit (`A1` .. `Z9`). Rows past 9 cannot be named this way.
//! - **A1 notation** for addressing cells from the outside (`b10`, `AA3`), used
//!   by edit controllers. It is case-insensitive and has no length limit.
//!
//! # Examples
//!
//! ```
//! use cellgrid_engine::engine::{CellRef, GridShape, decode};
//!
//! let cell = decode("B3", GridShape::DEFAULT).unwrap();
//! assert_eq!(cell, CellRef::new(1, 2));
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::error::{RefError, ShapeError};

/// Number of addressable columns when nothing else is configured.
pub const COLUMNS: usize = 7;
/// Number of rows when nothing else is configured.
pub const ROWS: usize = 10;

/// A cell position, zero-indexed.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub col: usize,
    pub row: usize,
}

/// Fixed dimensions of a grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridShape {
    columns: usize,
    rows: usize,
}

impl GridShape {
    pub const DEFAULT: GridShape = GridShape {
        columns: COLUMNS,
        rows: ROWS,
    };

    /// Validate a shape. Columns are letter-labelled, so at most 26.
    pub fn new(columns: usize, rows: usize) -> Result<GridShape, ShapeError> {
        if columns == 0 || columns > 26 {
            return Err(ShapeError::Columns(columns));
        }
        if rows == 0 {
            return Err(ShapeError::Rows(rows));
        }
        Ok(GridShape { columns, rows })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, at: CellRef) -> bool {
        at.col < self.columns && at.row < self.rows
    }

    /// Return `at` unchanged if it lies inside the shape.
    pub fn check(&self, at: CellRef) -> Result<CellRef, RefError> {
        if self.contains(at) {
            Ok(at)
        } else {
            Err(RefError::OutOfRange {
                col_label: encode_column(at.col),
                row_label: at.row + 1,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape::DEFAULT
    }
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { col, row }
    }

    /// Parse A1 notation (`A1`, `b10`, `AA3`) without bounds checking.
    pub fn parse_a1(name: &str) -> Result<CellRef, RefError> {
        let malformed = || RefError::Malformed(name.to_string());
        let caps = a1_re().captures(name.trim()).ok_or_else(malformed)?;

        let mut col_acc = 0usize;
        for c in caps["letters"].to_ascii_uppercase().bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc
                .checked_mul(26)
                .and_then(|acc| acc.checked_add(digit))
                .ok_or_else(malformed)?;
        }
        let row = caps["numbers"]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(malformed)?;

        Ok(CellRef::new(col_acc - 1, row))
    }

    /// The two-character token naming this cell in a formula, if it has one.
    pub fn to_token(&self) -> Option<String> {
        if self.col < 26 && self.row < 9 {
            Some(format!("{}{}", encode_column(self.col), self.row + 1))
        } else {
            None
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", encode_column(self.col), self.row + 1)
    }
}

fn a1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$").expect("static regex")
    })
}

/// Decode a formula reference token into a coordinate inside `shape`.
pub fn decode(token: &str, shape: GridShape) -> Result<CellRef, RefError> {
    match token.as_bytes() {
        &[letter @ b'A'..=b'Z', digit @ b'1'..=b'9'] => {
            let at = CellRef::new((letter - b'A') as usize, (digit - b'1') as usize);
            shape.check(at)
        }
        _ => Err(RefError::Malformed(token.to_string())),
    }
}

/// Column header label: 0 -> `A`, 25 -> `Z`, 26 -> `AA`.
pub fn encode_column(col: usize) -> String {
    let mut result = String::new();
    let mut n = col as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}
