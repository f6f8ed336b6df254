use thiserror::Error;

use crate::partition::Key;

/// Failures that abort a sort run. The sort is a one-shot batch
/// computation, so none of these are retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A command-line argument did not parse as a non-negative integer.
    #[error("invalid {name}: '{value}' is not a non-negative integer")]
    InvalidArgument { name: &'static str, value: String },

    /// The worker pool must hold at least one worker.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// The key domain upper bound must be positive.
    #[error("interval max must be positive, got {0}")]
    InvalidIntervalMax(Key),

    /// Range partitioning needs a span of at least one key value per bucket.
    #[error("interval max {interval_max} is smaller than the worker count {num_workers}, so value spans would be empty")]
    ZeroWidthSpan { interval_max: Key, num_workers: usize },

    /// Sample partitioning needs every chunk to supply one key per splitter.
    #[error("chunk of {chunk_size} keys cannot supply {num_splitters} splitter samples")]
    ChunkTooSmall {
        chunk_size: usize,
        num_splitters: usize,
    },
}
