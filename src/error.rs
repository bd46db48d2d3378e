//! Error types for matops operations.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to allocate buffer for a {dim}x{dim} matrix")]
    Allocation { dim: usize },

    #[error("matrix data has {len} elements, expected a non-empty {dim}x{dim} matrix")]
    Shape { dim: usize, len: usize },

    #[error("matrix dimension mismatch: A is {0}x{0}, B is {1}x{1}")]
    DimensionMismatch(usize, usize),

    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}
