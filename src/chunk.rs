//! Read-only views on contiguous pieces of the input.
use crate::aggregate::{Aggregate, Summary};
use crate::sequential;
use crate::traits::Divisible;
use std::ops::Range;

/// Contiguous piece `start..end` of an input slice.
///
/// Chunks never own or mutate data: they are offsets into the borrowed input,
/// so any number of them can be handed to different threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    input: &'a [i32],
    start: usize,
    end: usize,
}

impl<'a> Chunk<'a> {
    /// The chunk covering all of `input`.
    pub fn whole(input: &'a [i32]) -> Self {
        Chunk {
            input,
            start: 0,
            end: input.len(),
        }
    }
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn end(&self) -> usize {
        self.end
    }
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
    pub fn len(&self) -> usize {
        self.end - self.start
    }
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
    pub fn as_slice(&self) -> &'a [i32] {
        &self.input[self.start..self.end]
    }

    /// Summary of this chunk.
    ///
    /// Prefix and total come from one forward running sum, suffix from a
    /// backward one and interior from the sequential scan.
    pub fn aggregate(&self) -> Aggregate {
        let slice = self.as_slice();
        let interior = match sequential::max_sum(slice) {
            Some(interior) => interior,
            None => return Aggregate::Empty,
        };
        let (total, prefix) = best_running_sum(slice.iter());
        let (_, suffix) = best_running_sum(slice.iter().rev());
        Aggregate::Range(Summary {
            interior,
            prefix,
            suffix,
            total,
        })
    }
}

/// Final running sum and best running sum over a non-empty iterator.
fn best_running_sum<'a, I: Iterator<Item = &'a i32>>(iter: I) -> (i64, i64) {
    iter.fold((0, i64::MIN), |(sum, best), &x| {
        let sum = sum + i64::from(x);
        (sum, best.max(sum))
    })
}

impl<'a> Divisible for Chunk<'a> {
    fn should_be_divided(&self) -> bool {
        self.len() >= 2
    }
    fn divide_at(self, index: usize) -> (Self, Self) {
        let mid = self.start + index.min(self.len());
        (
            Chunk {
                input: self.input,
                start: self.start,
                end: mid,
            },
            Chunk {
                input: self.input,
                start: mid,
                end: self.end,
            },
        )
    }
    fn len(&self) -> usize {
        Chunk::len(self)
    }
}

/// Cut `input` into exactly `pieces` contiguous chunks, in order.
///
/// All chunks hold `input.len() / pieces` elements except the last one,
/// which also takes the remainder. When `pieces` exceeds the input size
/// the leading chunks are empty.
///
/// # Panics
/// Panics if `pieces` is zero.
pub fn partition(input: &[i32], pieces: usize) -> Vec<Chunk<'_>> {
    assert!(pieces > 0, "cannot partition into zero chunks");
    let size = input.len() / pieces;
    let mut remaining = Chunk::whole(input);
    let mut chunks: Vec<Chunk> = (1..pieces)
        .map(|_| {
            let (left, right) = remaining.divide_at(size);
            remaining = right;
            left
        })
        .collect();
    chunks.push(remaining);
    chunks
}
