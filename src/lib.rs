//! Maximum subarray sums, sequentially or in parallel with rayon.
//!
//! The sequential path is a single Kadane scan which also reports the witness
//! subarray. The parallel path cuts the input in chunks, summarizes every chunk
//! in its own task as an [`Aggregate`] and merges the summaries in order, so
//! runs crossing chunk boundaries are not lost. Both give the same sum.
//!
//! ```
//! use rayon_max_subarray::prelude::*;
//! let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
//! let solution = solve_sequential(&input);
//! assert_eq!(solution.witness(&input), &[4, -1, 2, 1]);
//! assert_eq!(solve_parallel(&input, 4).unwrap(), solution.sum);
//! ```
pub mod aggregate;
pub mod chunk;
pub mod config;
mod error;
pub mod io;
pub mod prelude;
mod reducer;
pub mod schedulers;
pub mod sequential;
pub(crate) mod traits;

pub use aggregate::{Aggregate, Summary};
pub use config::{ReduceConfig, ReduceConfigBuilder, DEFAULT_SEQUENTIAL_THRESHOLD};
pub use error::{Error, Result};
pub use reducer::ParallelReducer;
pub use sequential::Solution;
pub use traits::Divisible;

/// Maximum subarray sum of `input` and the indices of a subarray achieving it.
///
/// An empty input gives a zero sum and an empty range.
pub fn solve_sequential(input: &[i32]) -> Solution {
    sequential::scan(input)
}

/// Maximum subarray sum of `input`, computed over `workers` chunks.
///
/// Uses the default configuration otherwise: inputs under
/// [`DEFAULT_SEQUENTIAL_THRESHOLD`] elements do not reach the pool.
pub fn solve_parallel(input: &[i32], workers: usize) -> Result<i64> {
    let config = ReduceConfig::builder().workers(workers).build()?;
    ParallelReducer::new(config)?.solve(input)
}
