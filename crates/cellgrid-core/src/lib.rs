//! cellgrid-core - UI-agnostic grid store.

pub mod document;
pub mod error;

pub use document::{Document, GridObserver};
pub use error::{CellgridError, Result};

pub use cellgrid_engine::engine::{CellRef, Grid, GridShape};
