//! Grid store: owns the current snapshot and is its only mutator.

mod ops;
mod state;

pub use state::{Document, GridObserver};
