//! Sum, difference and product of two square integer matrices, computed
//! by a fixed pool of threads that each own a contiguous block of rows.
//!
//! Rows `[0, N)` are split into one range per worker with ceiling
//! division. Each worker reads both inputs and writes the three outputs
//! for its own rows only, so the threads never share a writable cell and
//! need no locks. The caller sees results only after every worker has
//! been joined.
//!
//! ## Usage
//!
//! ```
//! use std::num::NonZeroUsize;
//! use matops::{Matrix, multiply_all};
//!
//! let a = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, vec![5, 6, 7, 8]).unwrap();
//!
//! let store = multiply_all(a, b, NonZeroUsize::new(4).unwrap()).unwrap();
//! assert_eq!(store.sum().as_slice(), &[6, 8, 10, 12]);
//! assert_eq!(store.diff().as_slice(), &[-4, -4, -4, -4]);
//! assert_eq!(store.product().as_slice(), &[19, 22, 43, 50]);
//! ```
//!
//! A full randomized run, as the `matops` binary does it:
//!
//! ```
//! use matops::{Config, run};
//!
//! let config = Config { seed: Some(1), ..Config::default() };
//! let store = run(&config).unwrap();
//! assert_eq!(store.dim().get(), 20);
//! ```
//!
//! ## Numeric semantics
//!
//! Inputs are `i32`, outputs `i64`. Sum and difference are exact. Each
//! product term is exact and terms accumulate with wrapping `i64`
//! addition, which can't overflow for generated inputs (1..=10).

pub mod config;
pub mod error;
pub mod matrix;
pub mod threaded;

use std::num::NonZeroUsize;

use tracing::info;

pub use config::Config;
pub use error::{Error, Result};
pub use matrix::{Matrix, MatrixStore};
pub use threaded::coordinator::compute;
pub use threaded::partition::{RowRange, partition};

/// Allocates a store, fills A and B with random values, and computes all
/// three outputs with `config.workers` threads.
///
/// Nothing is returned unless every worker finished.
pub fn run(config: &Config) -> Result<MatrixStore> {
    let mut store = MatrixStore::allocate(config.size)?;

    let mut rng = matrix::random::rng_from_seed(config.seed);
    let (a, b) = store.inputs_mut();
    matrix::random::fill_random(a, &mut rng);
    matrix::random::fill_random(b, &mut rng);

    info!(
        size = config.size.get(),
        workers = config.workers.get(),
        seed = ?config.seed,
        "starting run"
    );
    compute(&mut store, config.workers)?;
    Ok(store)
}

/// Same as [`run`] but over caller-supplied inputs.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if A and B differ in size, plus anything
/// [`compute`] reports.
pub fn multiply_all(a: Matrix<i32>, b: Matrix<i32>, workers: NonZeroUsize) -> Result<MatrixStore> {
    let mut store = MatrixStore::with_inputs(a, b)?;
    compute(&mut store, workers)?;
    Ok(store)
}
