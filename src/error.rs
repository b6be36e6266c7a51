//! Error types for the Cellgrid command line

use cellgrid_core::CellgridError;
use thiserror::Error;

/// Errors that can occur while running commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Cellgrid(#[from] CellgridError),
}

pub type Result<T> = std::result::Result<T, CliError>;
