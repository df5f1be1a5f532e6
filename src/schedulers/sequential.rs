//! sequential scheduler
use crate::prelude::*;
use crate::schedulers::run_chunk;

/// Runs every chunk on the calling thread, one after the other.
pub struct SequentialScheduler;

impl Scheduler for SequentialScheduler {
    fn schedule<'a, F>(&self, chunks: &[Chunk<'a>], op: &F) -> Vec<Result<Aggregate>>
    where
        F: Fn(&Chunk<'a>) -> Aggregate + Sync,
    {
        chunks.iter().map(|chunk| run_chunk(chunk, op)).collect()
    }
}
