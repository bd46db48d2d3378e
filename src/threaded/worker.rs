//! Per-worker compute kernel.

use tracing::debug;

use crate::matrix::Matrix;
use crate::threaded::partition::RowRange;

/// One worker's share of a run: a row range, shared read-only inputs, and
/// exclusive output slices covering exactly those rows.
///
/// Output slices start at row `range.start()`, so local offset
/// `(i - range.start()) * n + j` holds cell `(i, j)`.
#[derive(Debug)]
pub struct ComputeTask<'a> {
    worker: usize,
    range: RowRange,
    a: &'a Matrix<i32>,
    b: &'a Matrix<i32>,
    sum: &'a mut [i64],
    diff: &'a mut [i64],
    product: &'a mut [i64],
}

impl<'a> ComputeTask<'a> {
    /// # Panics
    ///
    /// Panics if the inputs differ in dimension or an output slice is not
    /// `range.len() * n` long.
    pub fn new(
        worker: usize,
        range: RowRange,
        a: &'a Matrix<i32>,
        b: &'a Matrix<i32>,
        sum: &'a mut [i64],
        diff: &'a mut [i64],
        product: &'a mut [i64],
    ) -> Self {
        let n = a.dim();
        let cells = range.len() * n;
        assert_eq!(b.dim(), n, "B: expected {}x{}", n, n);
        assert!(range.end() <= n, "rows {:?} exceed dimension {}", range.rows(), n);
        assert_eq!(sum.len(), cells, "sum: expected {} cells", cells);
        assert_eq!(diff.len(), cells, "diff: expected {} cells", cells);
        assert_eq!(product.len(), cells, "product: expected {} cells", cells);

        Self { worker, range, a, b, sum, diff, product }
    }

    pub fn worker(&self) -> usize {
        self.worker
    }

    pub fn range(&self) -> RowRange {
        self.range
    }

    /// Runs the kernel over the task's rows, consuming the task.
    pub fn execute(self) {
        debug!(
            worker = self.worker,
            start = self.range.start(),
            end = self.range.end(),
            "computing rows"
        );
        compute_rows(self.range, self.a, self.b, self.sum, self.diff, self.product);
    }
}

/// Computes sum, difference and product for every cell in `range`.
///
/// Reads only `a` and `b`; writes only the given output slices. Product
/// terms are exact in `i64` and accumulate with wrapping addition. An
/// empty range does nothing.
pub fn compute_rows(
    range: RowRange,
    a: &Matrix<i32>,
    b: &Matrix<i32>,
    sum: &mut [i64],
    diff: &mut [i64],
    product: &mut [i64],
) {
    let n = a.dim();

    for (local, i) in range.rows().enumerate() {
        let a_row = a.row(i);
        let b_row = b.row(i);
        let out = local * n..(local + 1) * n;

        let sum_row = &mut sum[out.clone()];
        let diff_row = &mut diff[out.clone()];
        for j in 0..n {
            let (x, y) = (i64::from(a_row[j]), i64::from(b_row[j]));
            sum_row[j] = x + y;
            diff_row[j] = x - y;
        }

        let product_row = &mut product[out];
        for (j, cell) in product_row.iter_mut().enumerate() {
            let mut acc = 0i64;
            for (k, &a_ik) in a_row.iter().enumerate() {
                acc = acc.wrapping_add(i64::from(a_ik) * i64::from(b.get(k, j)));
            }
            *cell = acc;
        }
    }
}
