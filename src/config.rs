//! Tunables of the parallel reduction.
//!
//! Built like a `rayon::ThreadPoolBuilder`: start from defaults, override what
//! you need, then `build()` validates everything at once.
//!
//! ```
//! use rayon_max_subarray::ReduceConfig;
//! let config = ReduceConfig::builder()
//!     .workers(8)
//!     .sequential_threshold(1_000)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.workers(), 8);
//! ```
use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

/// Below this many elements we do not bother with the pool.
///
/// Only a default: the crossover point depends on the machine, tune it with
/// [`ReduceConfigBuilder::sequential_threshold`] or `MAX_SUBARRAY_THRESHOLD`.
pub const DEFAULT_SEQUENTIAL_THRESHOLD: usize = 1 << 16;

pub const WORKERS_VAR: &str = "MAX_SUBARRAY_WORKERS";
pub const THRESHOLD_VAR: &str = "MAX_SUBARRAY_THRESHOLD";
pub const MAX_THREADS_VAR: &str = "MAX_SUBARRAY_MAX_THREADS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceConfig {
    workers: usize,
    sequential_threshold: usize,
    max_threads: usize,
    thread_name: String,
}

impl ReduceConfig {
    pub fn builder() -> ReduceConfigBuilder {
        ReduceConfigBuilder::default()
    }
    /// Number of chunks the input is cut into.
    pub fn workers(&self) -> usize {
        self.workers
    }
    pub fn sequential_threshold(&self) -> usize {
        self.sequential_threshold
    }
    pub fn max_threads(&self) -> usize {
        self.max_threads
    }
    /// Threads in the pool: one per chunk, capped by `max_threads`.
    pub fn pool_size(&self) -> usize {
        self.workers.min(self.max_threads)
    }
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }
}

impl Default for ReduceConfig {
    fn default() -> Self {
        let threads = rayon::current_num_threads();
        ReduceConfig {
            workers: threads,
            sequential_threshold: DEFAULT_SEQUENTIAL_THRESHOLD,
            max_threads: threads,
            thread_name: "max-subarray".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReduceConfigBuilder {
    workers: Option<usize>,
    sequential_threshold: Option<usize>,
    max_threads: Option<usize>,
    thread_name: Option<String>,
}

impl ReduceConfigBuilder {
    /// Builder pre-filled from the `MAX_SUBARRAY_*` environment variables.
    /// Unset variables keep their defaults, unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        Ok(ReduceConfigBuilder {
            workers: env_value(WORKERS_VAR)?,
            sequential_threshold: env_value(THRESHOLD_VAR)?,
            max_threads: env_value(MAX_THREADS_VAR)?,
            thread_name: None,
        })
    }
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
    /// Inputs strictly shorter than `threshold` are solved sequentially.
    /// 0 always uses the pool.
    pub fn sequential_threshold(mut self, threshold: usize) -> Self {
        self.sequential_threshold = Some(threshold);
        self
    }
    pub fn max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads);
        self
    }
    /// Prefix of the pool's thread names, suffixed by the thread index.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }
    pub fn build(self) -> Result<ReduceConfig> {
        let defaults = ReduceConfig::default();
        let config = ReduceConfig {
            workers: self.workers.unwrap_or(defaults.workers),
            sequential_threshold: self
                .sequential_threshold
                .unwrap_or(defaults.sequential_threshold),
            max_threads: self.max_threads.unwrap_or(defaults.max_threads),
            thread_name: self.thread_name.unwrap_or(defaults.thread_name),
        };
        if config.workers == 0 {
            return Err(Error::invalid_config("workers", "at least one worker is needed"));
        }
        if config.max_threads == 0 {
            return Err(Error::invalid_config(
                "max_threads",
                "at least one thread is needed",
            ));
        }
        Ok(config)
    }
}

fn env_value<T: FromStr>(key: &'static str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::invalid_config(key, format!("{:?}: {}", value, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::invalid_config(key, e.to_string())),
    }
}
