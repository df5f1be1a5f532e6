//! Linear time maximum subarray scan (Kadane).
use std::ops::Range;

/// Result of a sequential scan: the best sum and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub sum: i64,
    /// Indices of the witness subarray in the scanned input.
    /// Empty only for an empty input.
    pub range: Range<usize>,
}

impl Solution {
    /// Solution for an empty input: a zero sum and an empty witness.
    pub fn empty() -> Self {
        Solution { sum: 0, range: 0..0 }
    }
    /// Elements of `input` achieving the maximum sum.
    /// `input` must be the slice this solution was computed on.
    pub fn witness<'a>(&self, input: &'a [i32]) -> &'a [i32] {
        &input[self.range.clone()]
    }
}

struct Kadane {
    current: i64,
    current_start: usize,
    best: i64,
    best_range: Range<usize>,
}

impl Kadane {
    fn start(first: i32) -> Self {
        let first = i64::from(first);
        Kadane {
            current: first,
            current_start: 0,
            best: first,
            best_range: 0..1,
        }
    }
    fn push(mut self, (index, &x): (usize, &i32)) -> Self {
        let x = i64::from(x);
        if x > self.current + x {
            self.current = x;
            self.current_start = index;
        } else {
            self.current += x;
        }
        // witness only moves on strict improvement: leftmost best run wins ties
        if self.current > self.best {
            self.best = self.current;
            self.best_range = self.current_start..index + 1;
        }
        self
    }
}

/// Maximum sum of a non-empty contiguous subarray, together with its witness.
///
/// An empty input yields a zero sum and an empty witness.
///
/// # Example
/// ```
/// use rayon_max_subarray::sequential::scan;
/// let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
/// let solution = scan(&input);
/// assert_eq!(solution.sum, 6);
/// assert_eq!(solution.witness(&input), &[4, -1, 2, 1]);
/// ```
pub fn scan(input: &[i32]) -> Solution {
    match input.split_first() {
        None => Solution::empty(),
        Some((&first, rest)) => {
            let kadane = rest
                .iter()
                .enumerate()
                .map(|(i, x)| (i + 1, x))
                .fold(Kadane::start(first), Kadane::push);
            Solution {
                sum: kadane.best,
                range: kadane.best_range,
            }
        }
    }
}

/// Maximum sum of a non-empty contiguous subarray, `None` on empty input.
/// Same scan as [`scan`] without tracking the witness.
pub fn max_sum(input: &[i32]) -> Option<i64> {
    let (&first, rest) = input.split_first()?;
    let first = i64::from(first);
    let (_, best) = rest.iter().fold((first, first), |(current, best), &x| {
        let x = i64::from(x);
        let current = x.max(current + x);
        (current, best.max(current))
    });
    Some(best)
}
