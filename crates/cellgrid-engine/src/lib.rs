//! cellgrid_engine - grid data model, reference resolution and formula evaluation.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    #[test]
    fn test_literal_values_are_displayed_verbatim() {
        let evaluator = FormulaEvaluator::new();
        let mut grid = Grid::new(GridShape::DEFAULT);
        let literals = ["", "0", "3.14", "hello world", "  padded  ", "A1+B1", "!ERROR"];
        for (row, text) in literals.iter().enumerate() {
            grid = grid
                .with_raw_value(CellRef::new(2, row), text, &evaluator)
                .unwrap();
        }
        for (row, text) in literals.iter().enumerate() {
            let cell = grid.cell(CellRef::new(2, row)).unwrap();
            assert_eq!(cell.computed_value(), *text);
            assert_eq!(cell.kind(), CellKind::Literal(*text));
        }
    }

    #[test]
    fn test_same_edit_twice_gives_same_snapshot() {
        let evaluator = FormulaEvaluator::new();
        let base = Grid::new(GridShape::DEFAULT)
            .with_raw_value(CellRef::new(0, 0), "2", &evaluator)
            .unwrap();

        let first = base
            .with_raw_value(CellRef::new(1, 0), "=A1*21", &evaluator)
            .unwrap();
        let second = first
            .with_raw_value(CellRef::new(1, 0), "=A1*21", &evaluator)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(second.cell(CellRef::new(1, 0)).unwrap().computed_value(), "42");
    }

    #[test]
    fn test_small_shape_limits_references() {
        let evaluator = FormulaEvaluator::new();
        let shape = GridShape::new(2, 2).unwrap();
        let grid = Grid::new(shape)
            .with_raw_value(CellRef::new(0, 0), "=C1+1", &evaluator)
            .unwrap();
        let cell = grid.cell(CellRef::new(0, 0)).unwrap();
        assert_eq!(cell.computed_value(), ERROR_SENTINEL);
        assert!(matches!(
            cell.computed().error(),
            Some(FormulaError::Reference(RefError::OutOfRange { .. }))
        ));
    }
}
