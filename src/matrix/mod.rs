//! Square row-major matrices and the run-scoped store that owns them.
//!
//! Everything the workers touch lives here: the [`Matrix`] container,
//! the [`MatrixStore`] holding both inputs and all three outputs, the
//! random input generator, the single-threaded reference kernels used as
//! a correctness baseline, and the text formatting for reports.

pub mod format;
pub mod random;
pub mod reference;
pub mod store;

pub use store::MatrixStore;

use std::num::NonZeroUsize;
use std::slice::ChunksExact;

use crate::error::{Error, Result};

/// An N×N matrix stored row-major: cell (r, c) lives at offset `r * N + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Matrix<T> {
    /// Allocates a `dim`×`dim` matrix filled with `T::default()`.
    ///
    /// Reports [`Error::Allocation`] instead of aborting when the buffer
    /// can't be reserved, or when `dim * dim` overflows.
    pub fn zeroed(dim: NonZeroUsize) -> Result<Self> {
        let dim = dim.get();
        let len = dim.checked_mul(dim).ok_or(Error::Allocation { dim })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| Error::Allocation { dim })?;
        data.resize(len, T::default());

        Ok(Self { dim, data })
    }
}

impl<T> Matrix<T> {
    /// Wraps row-major `data` as a `dim`×`dim` matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use matops::Matrix;
    ///
    /// let m = Matrix::from_vec(2, vec![1, 2,
    ///                                  3, 4]).unwrap();
    /// assert_eq!(m.get(1, 0), 3);
    /// ```
    pub fn from_vec(dim: usize, data: Vec<T>) -> Result<Self> {
        let len = data.len();
        if dim == 0 || dim.checked_mul(dim) != Some(len) {
            return Err(Error::Shape { dim, len });
        }
        Ok(Self { dim, data })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row `r` as a slice of `dim` cells.
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.dim..(r + 1) * self.dim]
    }

    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.dim)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> Matrix<T> {
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[r * self.dim + c]
    }
}
