//! The recompute pass.
//!
//! Every edit re-evaluates the whole grid in a single column-major sweep
//! (`A1, A2, .., A10, B1, ..`). There is no dependency graph. A formula sees
//! cells visited earlier in the sweep with their fresh values and cells
//! visited later with the values they held after the previous edit, so a
//! reference to a later cell lags one edit behind. Self references read the
//! cell's previous value the same way; nothing is treated as a cycle.

use log::debug;

use super::cell::{ERROR_SENTINEL, Grid};
use super::cell_ref::CellRef;
use super::error::RefError;
use super::eval::FormulaEvaluator;

impl Grid {
    /// Copy this grid, replace the raw value at `at`, and recompute every cell.
    ///
    /// `self` is left untouched; on error no new grid is produced.
    pub fn with_raw_value(
        &self,
        at: CellRef,
        text: &str,
        evaluator: &FormulaEvaluator,
    ) -> Result<Grid, RefError> {
        let mut next = self.clone();
        next.set_raw(at, text)?;
        next.recompute(evaluator);
        Ok(next)
    }

    /// One column-major pass, writing each result before moving on.
    pub(crate) fn recompute(&mut self, evaluator: &FormulaEvaluator) {
        let shape = self.shape();
        for col in 0..shape.columns() {
            for row in 0..shape.rows() {
                let at = CellRef::new(col, row);
                let computed = match self.cell(at) {
                    Ok(cell) => evaluator.evaluate(cell.raw_value(), self),
                    Err(_) => continue,
                };
                if let Some(err) = computed.error() {
                    debug!("{ERROR_SENTINEL}: {at}: {err}");
                }
                self.set_computed(at, computed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{CellRef, ERROR_SENTINEL, FormulaEvaluator, Grid, GridShape};

    fn at(token: &str) -> CellRef {
        CellRef::parse_a1(token).unwrap()
    }

    fn edit(grid: &Grid, token: &str, text: &str) -> Grid {
        grid.with_raw_value(at(token), text, &FormulaEvaluator::new())
            .unwrap()
    }

    fn value(grid: &Grid, token: &str) -> String {
        grid.cell(at(token)).unwrap().computed_value()
    }

    #[test]
    fn test_backward_reference_is_current() {
        let grid = Grid::new(GridShape::DEFAULT);
        let grid = edit(&grid, "A1", "=5");
        let grid = edit(&grid, "B1", "=A1+1");
        assert_eq!(value(&grid, "B1"), "6");

        let grid = edit(&grid, "A1", "=10");
        assert_eq!(value(&grid, "B1"), "11");
    }

    #[test]
    fn test_forward_reference_lags_one_edit() {
        let grid = Grid::new(GridShape::DEFAULT);
        let grid = edit(&grid, "A1", "=B1+1");
        assert_eq!(value(&grid, "A1"), "1");

        let grid = edit(&grid, "B1", "=5");
        assert_eq!(value(&grid, "B1"), "5");
        assert_eq!(value(&grid, "A1"), "1");

        // Any later edit lets A1 catch up.
        let grid = edit(&grid, "C1", "x");
        assert_eq!(value(&grid, "A1"), "6");
    }

    #[test]
    fn test_same_column_order() {
        let grid = Grid::new(GridShape::DEFAULT);
        let grid = edit(&grid, "A2", "=A1*2");
        let grid = edit(&grid, "A1", "=3");
        // A1 precedes A2 in the sweep.
        assert_eq!(value(&grid, "A2"), "6");
    }

    #[test]
    fn test_self_reference_reads_previous_value() {
        let grid = Grid::new(GridShape::DEFAULT);
        let grid = edit(&grid, "A1", "=A1+1");
        assert_eq!(value(&grid, "A1"), "1");
        let grid = edit(&grid, "B1", "y");
        assert_eq!(value(&grid, "A1"), "2");
    }

    #[test]
    fn test_error_stays_in_its_cell() {
        let grid = Grid::new(GridShape::DEFAULT);
        let grid = edit(&grid, "A1", "7");
        let grid = edit(&grid, "C1", "=A1*3");
        let grid = edit(&grid, "B1", "=2/0");

        assert_eq!(value(&grid, "B1"), ERROR_SENTINEL);
        assert_eq!(value(&grid, "A1"), "7");
        assert_eq!(value(&grid, "C1"), "21");
    }

    #[test]
    fn test_error_propagates_through_references() {
        let grid = Grid::new(GridShape::DEFAULT);
        let grid = edit(&grid, "A1", "=(");
        let grid = edit(&grid, "B1", "=A1+1");
        assert_eq!(value(&grid, "B1"), ERROR_SENTINEL);
    }

    #[test]
    fn test_edit_leaves_original_snapshot_alone() {
        let before = edit(&Grid::new(GridShape::DEFAULT), "A1", "1");
        let after = edit(&before, "A1", "2");
        assert_eq!(value(&before, "A1"), "1");
        assert_eq!(value(&after, "A1"), "2");
    }

    #[test]
    fn test_out_of_range_edit_fails() {
        let grid = Grid::new(GridShape::DEFAULT);
        let result = grid.with_raw_value(CellRef::new(7, 0), "1", &FormulaEvaluator::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_row_ten_is_editable_but_unreferenceable() {
        let grid = Grid::new(GridShape::DEFAULT);
        let grid = edit(&grid, "A10", "=2*2");
        assert_eq!(value(&grid, "A10"), "4");
        // `A10` inside a formula reads as `A1` followed by `0`.
        let grid = edit(&grid, "B1", "=A10");
        assert_eq!(value(&grid, "B1"), ERROR_SENTINEL);
    }
}
