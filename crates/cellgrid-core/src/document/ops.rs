use super::Document;
use crate::error::Result;
use cellgrid_engine::engine::{Cell, CellRef, Grid};
use log::{info, warn};
use std::sync::Arc;

impl Document {
    /// Read one cell of the current snapshot.
    pub fn get(&self, at: CellRef) -> Result<Cell> {
        Ok(self.grid.cell(at)?.clone())
    }

    /// Set the raw text of a cell and recompute the whole grid.
    ///
    /// On success the new snapshot replaces the current one and is published
    /// to every observer. On failure nothing changes and nothing is published.
    pub fn set_raw_value(&mut self, at: CellRef, text: &str) -> Result<Arc<Grid>> {
        let next = match self.grid.with_raw_value(at, text, &self.evaluator) {
            Ok(grid) => Arc::new(grid),
            Err(e) => {
                warn!("rejected edit: {e}");
                return Err(e.into());
            }
        };
        info!("{at} <- {text:?}");

        self.grid = Arc::clone(&next);
        self.publish();
        Ok(next)
    }

    /// Plain-text value for the clipboard: the cell's computed value.
    pub fn copy_value(&self, at: CellRef) -> Result<String> {
        Ok(self.grid.cell(at)?.computed_value())
    }

    fn publish(&mut self) {
        for observer in &mut self.observers {
            observer.grid_changed(&self.grid);
        }
    }
}
