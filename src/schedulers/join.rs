//! Easiest parallel scheduler.
use crate::prelude::*;
use crate::schedulers::run_chunk;

/// Splits the list of chunks in halves with `rayon::join` until every
/// task holds a single chunk. Runs on whatever pool it is called from.
pub struct JoinScheduler;

impl Scheduler for JoinScheduler {
    fn schedule<'a, F>(&self, chunks: &[Chunk<'a>], op: &F) -> Vec<Result<Aggregate>>
    where
        F: Fn(&Chunk<'a>) -> Aggregate + Sync,
    {
        schedule_join(chunks, op)
    }
}

fn schedule_join<'a, F>(chunks: &[Chunk<'a>], op: &F) -> Vec<Result<Aggregate>>
where
    F: Fn(&Chunk<'a>) -> Aggregate + Sync,
{
    if chunks.should_be_divided() {
        let (left, right) = chunks.divide();
        let (mut left_r, right_r) = rayon::join(
            || schedule_join(left, op),
            || schedule_join(right, op),
        );
        left_r.extend(right_r);
        left_r
    } else {
        chunks.iter().map(|chunk| run_chunk(chunk, op)).collect()
    }
}
