//! Run-scoped ownership of the five matrices.

use std::num::NonZeroUsize;

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Owns inputs A, B and outputs sum, difference, product for one run.
///
/// All five matrices share the same dimension for the lifetime of the
/// store. Inputs are `i32`; outputs are widened to `i64`.
#[derive(Debug, Clone)]
pub struct MatrixStore {
    a: Matrix<i32>,
    b: Matrix<i32>,
    sum: Matrix<i64>,
    diff: Matrix<i64>,
    product: Matrix<i64>,
}

/// Disjoint borrows of a store: shared inputs, exclusive output buffers.
pub(crate) struct StoreParts<'a> {
    pub a: &'a Matrix<i32>,
    pub b: &'a Matrix<i32>,
    pub sum: &'a mut [i64],
    pub diff: &'a mut [i64],
    pub product: &'a mut [i64],
}

impl MatrixStore {
    /// Allocates all five matrices zero-filled.
    pub fn allocate(dim: NonZeroUsize) -> Result<Self> {
        Ok(Self {
            a: Matrix::zeroed(dim)?,
            b: Matrix::zeroed(dim)?,
            sum: Matrix::zeroed(dim)?,
            diff: Matrix::zeroed(dim)?,
            product: Matrix::zeroed(dim)?,
        })
    }

    /// Builds a store around existing inputs, allocating the outputs.
    pub fn with_inputs(a: Matrix<i32>, b: Matrix<i32>) -> Result<Self> {
        if a.dim() != b.dim() {
            return Err(Error::DimensionMismatch(a.dim(), b.dim()));
        }
        let dim = NonZeroUsize::new(a.dim()).ok_or(Error::Shape { dim: 0, len: 0 })?;

        Ok(Self {
            sum: Matrix::zeroed(dim)?,
            diff: Matrix::zeroed(dim)?,
            product: Matrix::zeroed(dim)?,
            a,
            b,
        })
    }

    pub fn dim(&self) -> NonZeroUsize {
        // Matrix construction never yields a zero dimension.
        NonZeroUsize::new(self.a.dim()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn a(&self) -> &Matrix<i32> {
        &self.a
    }

    pub fn b(&self) -> &Matrix<i32> {
        &self.b
    }

    pub fn sum(&self) -> &Matrix<i64> {
        &self.sum
    }

    pub fn diff(&self) -> &Matrix<i64> {
        &self.diff
    }

    pub fn product(&self) -> &Matrix<i64> {
        &self.product
    }

    /// Mutable access to both inputs, for filling them before a run.
    pub fn inputs_mut(&mut self) -> (&mut Matrix<i32>, &mut Matrix<i32>) {
        (&mut self.a, &mut self.b)
    }

    pub(crate) fn parts(&mut self) -> StoreParts<'_> {
        StoreParts {
            a: &self.a,
            b: &self.b,
            sum: self.sum.as_mut_slice(),
            diff: self.diff.as_mut_slice(),
            product: self.product.as_mut_slice(),
        }
    }
}
