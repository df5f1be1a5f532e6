//! Errors raised while configuring or running a reduction.
use std::io;

/// Everything that can go wrong around a maximum subarray computation.
///
/// The algorithms themselves cannot fail: only worker threads (spawning or
/// panicking), configuration values and the input files of the `io` layer can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value was rejected.
    #[error("invalid configuration for `{key}`: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    /// The worker pool could not be spawned, even after a retry.
    #[error("failed to spawn worker pool")]
    PoolBuild(#[source] rayon::ThreadPoolBuildError),

    /// The worker aggregating `start..end` terminated abnormally.
    #[error("worker for chunk {start}..{end} failed: {message}")]
    WorkerFailure {
        start: usize,
        end: usize,
        message: String,
    },

    /// A token of an input file is not an `i32`.
    #[error("token #{position} ({token:?}) is not a valid integer")]
    InvalidInput { position: usize, token: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid_config(key: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }
}
