//! Static row partitioning.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Half-open span of rows `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    start: usize,
    end: usize,
}

impl RowRange {
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "row range start {} is past end {}", start, end);
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits rows `[0, n)` into exactly `workers` contiguous ranges.
///
/// Each worker gets `ceil(n / workers)` rows, in order. When that
/// overshoots `n`, trailing ranges are clamped and may come out empty.
///
/// ```
/// use std::num::NonZeroUsize;
/// use matops::threaded::partition::partition;
///
/// let n = NonZeroUsize::new(3).unwrap();
/// let w = NonZeroUsize::new(10).unwrap();
/// let ranges = partition(n, w);
///
/// assert_eq!(ranges.len(), 10);
/// assert_eq!(ranges.iter().filter(|r| r.is_empty()).count(), 7);
/// ```
pub fn partition(n: NonZeroUsize, workers: NonZeroUsize) -> Vec<RowRange> {
    let n = n.get();
    let rows_per_worker = n.div_ceil(workers.get());

    (0..workers.get())
        .map(|t| {
            let start = t.saturating_mul(rows_per_worker).min(n);
            let end = start.saturating_add(rows_per_worker).min(n);
            RowRange::new(start, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(v: usize) -> NonZeroUsize {
        NonZeroUsize::new(v).unwrap()
    }

    #[test]
    fn test_even_split() {
        let ranges = partition(nz(20), nz(10));
        assert_eq!(ranges.len(), 10);
        for (t, r) in ranges.iter().enumerate() {
            assert_eq!(*r, RowRange::new(2 * t, 2 * t + 2));
        }
    }

    #[test]
    fn test_more_workers_than_rows() {
        let ranges = partition(nz(3), nz(10));
        assert_eq!(&ranges[..3], &[RowRange::new(0, 1), RowRange::new(1, 2), RowRange::new(2, 3)]);
        assert!(ranges[3..].iter().all(|r| *r == RowRange::new(3, 3)));
    }

    #[test]
    fn test_uneven_tail() {
        // ceil(10 / 4) = 3 -> 3, 3, 3, 1
        let lens: Vec<usize> = partition(nz(10), nz(4)).iter().map(RowRange::len).collect();
        assert_eq!(lens, vec![3, 3, 3, 1]);
    }

    #[test]
    fn test_overshoot_leaves_empty_tail() {
        // ceil(9 / 4) = 3 -> 3, 3, 3, 0
        let ranges = partition(nz(9), nz(4));
        assert_eq!(ranges[3], RowRange::new(9, 9));
        assert!(ranges[3].is_empty());
    }

    #[test]
    fn test_single_worker_takes_everything() {
        assert_eq!(partition(nz(7), nz(1)), vec![RowRange::new(0, 7)]);
    }

    #[test]
    fn test_huge_dimension_does_not_overflow() {
        let ranges = partition(nz(usize::MAX), nz(2));
        let half = usize::MAX.div_ceil(2);
        assert_eq!(ranges, vec![RowRange::new(0, half), RowRange::new(half, usize::MAX)]);

        let ranges = partition(nz(usize::MAX - 1), nz(3));
        assert_eq!(ranges.last().map(RowRange::end), Some(usize::MAX - 1));
        assert_eq!(ranges.iter().map(RowRange::len).sum::<usize>(), usize::MAX - 1);
    }

    #[test]
    #[should_panic]
    fn test_inverted_range_panics() {
        RowRange::new(3, 2);
    }
}
