//! Random input generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::Matrix;

/// Smallest value the generator produces.
pub const MIN_VALUE: i32 = 1;
/// Largest value the generator produces.
pub const MAX_VALUE: i32 = 10;

/// Seeded generator when `seed` is given, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fills every cell with a value drawn uniformly from `MIN_VALUE..=MAX_VALUE`.
pub fn fill_random<R: Rng + ?Sized>(matrix: &mut Matrix<i32>, rng: &mut R) {
    for cell in matrix.as_mut_slice() {
        *cell = rng.gen_range(MIN_VALUE..=MAX_VALUE);
    }
}
