//! Text rendering of matrices and run reports.

use std::fmt;
use std::io::{self, Write};

use crate::matrix::{Matrix, MatrixStore};

/// Minimum field width of a printed cell. Wider values extend the field.
pub const CELL_WIDTH: usize = 5;

/// Renders one row per line, each cell right-justified in [`CELL_WIDTH`].
///
/// ```
/// use matops::Matrix;
///
/// let m = Matrix::from_vec(2, vec![1, -4, 10, 250]).unwrap();
/// assert_eq!(m.to_string(), "    1   -4\n   10  250\n");
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{:>width$}", cell, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Writes both inputs and all three results, each under a label and
/// followed by a blank line.
pub fn write_report<W: Write>(out: &mut W, store: &MatrixStore) -> io::Result<()> {
    write_labeled(out, "Matrix A", store.a())?;
    write_labeled(out, "Matrix B", store.b())?;
    write_labeled(out, "Sum", store.sum())?;
    write_labeled(out, "Difference", store.diff())?;
    write_labeled(out, "Product", store.product())?;
    out.flush()
}

fn write_labeled<W: Write, T: fmt::Display>(
    out: &mut W,
    label: &str,
    matrix: &Matrix<T>,
) -> io::Result<()> {
    writeln!(out, "{}:", label)?;
    writeln!(out, "{}", matrix)
}
