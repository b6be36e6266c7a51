//! Plain-text table rendering of grid snapshots.

use cellgrid_core::GridObserver;
use cellgrid_engine::engine::{CellRef, Grid, encode_column};
use log::warn;
use std::io::Write;
use std::sync::Arc;

/// Write the whole grid as a markdown table of computed values.
pub fn render_table<W: Write>(grid: &Grid, out: &mut W) -> std::io::Result<()> {
    let shape = grid.shape();

    // Header with column letters
    write!(out, "|   |")?;
    for col in 0..shape.columns() {
        write!(out, " {} |", encode_column(col))?;
    }
    writeln!(out)?;

    write!(out, "|---|")?;
    for _ in 0..shape.columns() {
        write!(out, "---|")?;
    }
    writeln!(out)?;

    for row in 0..shape.rows() {
        write!(out, "| {} |", row + 1)?; // 1-based row numbers
        for col in 0..shape.columns() {
            let display = grid
                .cell(CellRef::new(col, row))
                .map(|cell| cell.computed_value())
                .unwrap_or_default();
            write!(out, " {} |", escape_markdown(&display))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

/// Observer that re-renders the table on every published snapshot.
pub struct TableRenderer<W: Write> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        TableRenderer { out }
    }
}

impl<W: Write> GridObserver for TableRenderer<W> {
    fn grid_changed(&mut self, grid: &Arc<Grid>) {
        let result = render_table(grid, &mut self.out)
            .and_then(|()| writeln!(self.out))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!("failed to render grid: {e}");
        }
    }
}
