//! Chunked parallel reduction.
//!
//! The input is cut into `workers` contiguous chunks, each chunk is summarized
//! by its own task in the reducer's thread pool and, once every task is back,
//! the summaries are merged left to right on the calling thread.
//!
//! The pool is only spawned by the first reduction that needs it: inputs under
//! the sequential threshold never start a thread.
use crate::prelude::*;
use crate::sequential;
use log::{debug, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::OnceLock;

pub struct ParallelReducer<S = JoinScheduler> {
    config: ReduceConfig,
    pool: OnceLock<ThreadPool>,
    scheduler: S,
}

impl ParallelReducer {
    /// Reducer for `config`. No thread is spawned until the first input
    /// reaching the pool.
    pub fn new(config: ReduceConfig) -> Result<Self> {
        Ok(ParallelReducer {
            config,
            pool: OnceLock::new(),
            scheduler: JoinScheduler,
        })
    }
}

impl<S: Scheduler> ParallelReducer<S> {
    /// Dispatch chunks with another scheduler.
    /// It still runs inside this reducer's pool.
    pub fn with_scheduler<T: Scheduler>(self, scheduler: T) -> ParallelReducer<T> {
        ParallelReducer {
            config: self.config,
            pool: self.pool,
            scheduler,
        }
    }

    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    /// The worker pool, spawned on first use.
    ///
    /// A failed spawn is retried once before giving up with `Error::PoolBuild`.
    fn pool(&self) -> Result<&ThreadPool> {
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }
        let pool = build_pool(&self.config)?;
        debug!(
            "spawned pool of {} threads for {} chunks",
            pool.current_num_threads(),
            self.config.workers()
        );
        // a concurrent first call may have won the race, its pool is kept
        Ok(self.pool.get_or_init(|| pool))
    }

    /// Maximum subarray sum of `input`, 0 if `input` is empty.
    ///
    /// Inputs under the sequential threshold are scanned directly on the
    /// calling thread.
    pub fn solve(&self, input: &[i32]) -> Result<i64> {
        if input.len() < self.config.sequential_threshold() {
            debug!(
                "{} elements is under the threshold of {}, scanning sequentially",
                input.len(),
                self.config.sequential_threshold()
            );
            return Ok(sequential::max_sum(input).unwrap_or(0));
        }
        Ok(self.reduce(input)?.interior().unwrap_or(0))
    }

    /// Aggregate of the whole `input`, always computed chunk by chunk in the pool.
    pub fn reduce(&self, input: &[i32]) -> Result<Aggregate> {
        self.reduce_with(input, &Chunk::aggregate)
    }

    pub(crate) fn reduce_with<'a, F>(&self, input: &'a [i32], op: &F) -> Result<Aggregate>
    where
        F: Fn(&Chunk<'a>) -> Aggregate + Sync,
    {
        let chunks = partition(input, self.config.workers());
        debug!(
            "reducing {} elements in {} chunks of about {} elements",
            input.len(),
            chunks.len(),
            input.len() / chunks.len()
        );
        let scheduler = &self.scheduler;
        let outcomes = self.pool()?.install(|| scheduler.schedule(&chunks, op));
        // every worker is back: the fold needs all of them, in order
        let aggregates = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(Aggregate::fold(aggregates))
    }
}

fn build_pool(config: &ReduceConfig) -> Result<ThreadPool> {
    let spawn = || {
        let prefix = config.thread_name().to_owned();
        ThreadPoolBuilder::new()
            .num_threads(config.pool_size())
            .thread_name(move |index| format!("{}-{}", prefix, index))
            .build()
    };
    spawn()
        .or_else(|error| {
            warn!("failed spawning worker pool ({}), retrying once", error);
            spawn()
        })
        .map_err(Error::PoolBuild)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reducer(workers: usize) -> ParallelReducer {
        let config = ReduceConfig::builder()
            .workers(workers)
            .sequential_threshold(0)
            .max_threads(4)
            .build()
            .unwrap();
        ParallelReducer::new(config).unwrap()
    }

    #[test]
    fn boundary_crossing_run() {
        // best run [4, 5, 6] straddles the chunks [1, -9, 4] | [5, 6, -20]
        let input = [1, -9, 4, 5, 6, -20];
        assert_eq!(reducer(2).solve(&input).unwrap(), 15);
    }

    #[test]
    fn failing_worker_fails_the_reduction() {
        let input: Vec<i32> = (0..40).collect();
        let reducer = reducer(4);
        let outcome = reducer.reduce_with(&input, &|chunk: &Chunk<'_>| {
            if chunk.start() >= 20 {
                panic!("worker crashed");
            }
            chunk.aggregate()
        });
        match outcome {
            Err(Error::WorkerFailure { start, end, .. }) => assert_eq!((start, end), (20, 30)),
            other => panic!("expected a worker failure, got {:?}", other),
        }
    }

    #[test]
    fn sequential_scheduler_in_pool() {
        let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        let reducer = reducer(3).with_scheduler(SequentialScheduler);
        let aggregate = reducer.reduce(&input).unwrap();
        assert_eq!(aggregate, Chunk::whole(&input).aggregate());
        assert_eq!(aggregate.interior(), Some(6));
    }

    struct Exploding;

    impl Scheduler for Exploding {
        fn schedule<'a, F>(&self, _chunks: &[Chunk<'a>], _op: &F) -> Vec<Result<Aggregate>>
        where
            F: Fn(&Chunk<'a>) -> Aggregate + Sync,
        {
            panic!("scheduler reached");
        }
    }

    fn threshold_three() -> ParallelReducer<Exploding> {
        let config = ReduceConfig::builder()
            .workers(2)
            .sequential_threshold(3)
            .build()
            .unwrap();
        ParallelReducer::new(config).unwrap().with_scheduler(Exploding)
    }

    #[test]
    fn under_threshold_never_schedules() {
        let reducer = threshold_three();
        assert_eq!(reducer.solve(&[1, 2]).unwrap(), 3);
        assert_eq!(reducer.solve(&[-3, -1]).unwrap(), -1);
        assert_eq!(reducer.solve(&[]).unwrap(), 0);
        assert!(reducer.pool.get().is_none());
    }

    #[test]
    #[should_panic(expected = "scheduler reached")]
    fn threshold_itself_schedules() {
        let _ = threshold_three().solve(&[1, 2, 3]);
    }

    /// Live threads of this process whose name starts with `prefix`.
    #[cfg(target_os = "linux")]
    fn live_threads(prefix: &str) -> usize {
        std::fs::read_dir("/proc/self/task")
            .unwrap()
            .filter_map(|task| std::fs::read_to_string(task.ok()?.path().join("comm")).ok())
            .filter(|name| name.starts_with(prefix))
            .count()
    }

    #[test]
    fn pool_spawned_on_first_reduction() {
        let config = ReduceConfig::builder()
            .workers(16)
            .max_threads(16)
            .sequential_threshold(1_000)
            .thread_name("lazyscan")
            .build()
            .unwrap();
        let reducer = ParallelReducer::new(config).unwrap();
        assert_eq!(reducer.solve(&[1, -2, 3]).unwrap(), 3);
        assert!(reducer.pool.get().is_none());
        #[cfg(target_os = "linux")]
        assert_eq!(live_threads("lazyscan"), 0);

        assert_eq!(reducer.reduce(&[1, -2, 3]).unwrap().interior(), Some(3));
        assert_eq!(reducer.pool.get().map(|p| p.current_num_threads()), Some(16));
    }

    #[test]
    fn thread_names() {
        let config = ReduceConfig::builder()
            .workers(2)
            .max_threads(2)
            .thread_name("scan")
            .build()
            .unwrap();
        let reducer = ParallelReducer::new(config).unwrap();
        let name = reducer
            .pool()
            .unwrap()
            .install(|| std::thread::current().name().map(str::to_owned));
        assert!(name.unwrap().starts_with("scan-"));
    }
}
