pub use crate::aggregate::{Aggregate, Summary};
pub use crate::chunk::{partition, Chunk};
pub use crate::config::{ReduceConfig, ReduceConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::reducer::ParallelReducer;
pub use crate::schedulers::{JoinScheduler, Scheduler, SequentialScheduler};
pub use crate::sequential::Solution;
pub use crate::traits::Divisible;
pub use crate::{solve_parallel, solve_sequential};
