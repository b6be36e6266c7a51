//! Error types for Cellgrid core.

use thiserror::Error;

use cellgrid_engine::engine::{RefError, ShapeError};

/// Errors surfaced by the grid store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellgridError {
    #[error(transparent)]
    Reference(#[from] RefError),

    #[error("invalid grid shape: {0}")]
    Shape(#[from] ShapeError),
}

pub type Result<T> = std::result::Result<T, CellgridError>;
