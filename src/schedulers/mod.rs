//! Ways of running the chunk aggregations.
//!
//! A scheduler is a parallel map over independent read-only chunks: it applies
//! the same operation to each chunk and hands back one outcome per chunk, in
//! chunk order. Workers share nothing mutable, so any fork/join strategy does.
use crate::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub trait Scheduler: Sync {
    /// Run `op` on every chunk, returning the outcomes in chunk order.
    /// A panicking worker turns into an `Error::WorkerFailure` for its chunk.
    fn schedule<'a, F>(&self, chunks: &[Chunk<'a>], op: &F) -> Vec<Result<Aggregate>>
    where
        F: Fn(&Chunk<'a>) -> Aggregate + Sync;
}

mod join;
mod sequential;
pub use join::JoinScheduler;
pub use sequential::SequentialScheduler;

/// Aggregate one chunk, catching a panicking worker.
pub(crate) fn run_chunk<'a, F>(chunk: &Chunk<'a>, op: &F) -> Result<Aggregate>
where
    F: Fn(&Chunk<'a>) -> Aggregate,
{
    log::trace!("aggregating chunk {:?}", chunk.range());
    let work = AssertUnwindSafe(|| {
        #[cfg(feature = "logs")]
        {
            rayon_logs::subgraph("chunk aggregate", chunk.len(), || op(chunk))
        }
        #[cfg(not(feature = "logs"))]
        {
            op(chunk)
        }
    });
    panic::catch_unwind(work).map_err(|payload| Error::WorkerFailure {
        start: chunk.start(),
        end: chunk.end(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
