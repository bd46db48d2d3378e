//! Single-threaded reference kernels.
//!
//! These are the correctness baseline the threaded path is checked
//! against. The product uses i-k-j loop order, so it shares no loop
//! structure with the worker kernel it validates.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Element-wise `A + B`, widened to `i64`.
pub fn reference_sum(a: &Matrix<i32>, b: &Matrix<i32>) -> Result<Matrix<i64>> {
    elementwise(a, b, |x, y| x + y)
}

/// Element-wise `A - B`, widened to `i64`.
pub fn reference_diff(a: &Matrix<i32>, b: &Matrix<i32>) -> Result<Matrix<i64>> {
    elementwise(a, b, |x, y| x - y)
}

/// Matrix product `A × B` with `i64` wrapping accumulation.
///
/// # Example
///
/// ```
/// use matops::Matrix;
/// use matops::matrix::reference::reference_product;
///
/// let a = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
/// let b = Matrix::from_vec(2, vec![5, 6, 7, 8]).unwrap();
///
/// let c = reference_product(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
/// ```
pub fn reference_product(a: &Matrix<i32>, b: &Matrix<i32>) -> Result<Matrix<i64>> {
    let n = check_dims(a, b)?;
    let mut c = vec![0i64; n * n];

    for i in 0..n {
        for p in 0..n {
            let a_ip = i64::from(a.get(i, p));
            for j in 0..n {
                let cell = &mut c[i * n + j];
                *cell = cell.wrapping_add(a_ip * i64::from(b.get(p, j)));
            }
        }
    }

    Matrix::from_vec(n, c)
}

fn elementwise(
    a: &Matrix<i32>,
    b: &Matrix<i32>,
    op: impl Fn(i64, i64) -> i64,
) -> Result<Matrix<i64>> {
    let n = check_dims(a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(i64::from(x), i64::from(y)))
        .collect();
    Matrix::from_vec(n, data)
}

fn check_dims(a: &Matrix<i32>, b: &Matrix<i32>) -> Result<usize> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch(a.dim(), b.dim()));
    }
    Ok(a.dim())
}
