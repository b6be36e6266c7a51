use cellgrid_engine::engine::{FormulaEvaluator, Grid, GridShape};
use std::sync::Arc;

use crate::error::Result;

/// Receives every snapshot the store publishes (the render boundary).
pub trait GridObserver {
    fn grid_changed(&mut self, grid: &Arc<Grid>);
}

impl<F> GridObserver for F
where
    F: FnMut(&Arc<Grid>),
{
    fn grid_changed(&mut self, grid: &Arc<Grid>) {
        self(grid)
    }
}

/// UI-agnostic grid store.
///
/// Holds the single current [`Grid`] snapshot. Edits go through
/// [`Document::set_raw_value`], which swaps in a freshly recomputed snapshot;
/// readers only ever get shared, read-only access.
pub struct Document {
    /// Current snapshot (replaced wholesale on every accepted edit)
    pub(crate) grid: Arc<Grid>,
    /// Formula evaluator used by the recompute pass
    pub(crate) evaluator: FormulaEvaluator,
    /// Subscribers notified after each accepted edit
    pub(crate) observers: Vec<Box<dyn GridObserver>>,
}

impl Document {
    /// Create a store whose cells are all empty.
    pub fn new(shape: GridShape) -> Self {
        Document {
            grid: Arc::new(Grid::new(shape)),
            evaluator: FormulaEvaluator::new(),
            observers: Vec::new(),
        }
    }

    /// Create a store from raw column/row counts, validating the shape.
    pub fn with_shape(columns: usize, rows: usize) -> Result<Self> {
        Ok(Self::new(GridShape::new(columns, rows)?))
    }

    pub fn shape(&self) -> GridShape {
        self.grid.shape()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    /// Register a subscriber for published snapshots.
    pub fn subscribe(&mut self, observer: Box<dyn GridObserver>) {
        self.observers.push(observer);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(GridShape::DEFAULT)
    }
}
