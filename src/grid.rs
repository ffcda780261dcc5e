use ndarray::Array2;

use rand::Rng;

use crate::config::Config;
use crate::types::Cell;

/// Largest value the generator writes into a non-empty cell.
pub const MAX_CELL: Cell = 100;

/// Build the input grid: zero everywhere except the configured non-empty
/// region, which is filled with uniform values in `1..=MAX_CELL`.
///
/// The caller owns the random source. The binary passes `rand::thread_rng()`
/// and makes no reproducibility promise across runs; tests pass a seeded
/// `StdRng` so the grid is deterministic.
pub fn generate<R>(config: &Config, rng: &mut R) -> Array2<Cell>
where
    R: Rng + ?Sized,
{
    Array2::from_shape_fn((config.rows, config.cols), |(i, j)| {
        if config.region.contains(i, j) {
            rng.gen_range(1..=MAX_CELL)
        } else {
            0
        }
    })
}
