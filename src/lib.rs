//! Parallel Partition Sort in Rust
//!
//! Integer keys sorted by a fixed pool of worker threads. The key space is
//! split into one partition per worker, either by static value ranges or by
//! splitters selected from a distributed sample, so that every worker sorts
//! a disjoint partition and the partitions concatenate into a globally
//! sorted array.
//!
//! # References
//! [1] Frazer, W. D., and A. C. McKellar. "Samplesort: A sampling approach to
//! minimal storage tree sorting." Journal of the ACM 17.3 (1970): 496-507.
//!
//! [2] Blelloch, Guy E., et al. "A comparison of sorting algorithms for the
//! connection machine CM-2." Proceedings of the third annual ACM Symposium on
//! Parallel Algorithms and Architectures (1991).

/// Per-worker bucket rows and the shared bucket grid.
pub mod bucket;

/// Shared command-line driver for the sort binaries.
pub mod cli;

/// Runtime configuration and precondition checks.
pub mod config;

/// Data manipulation and generation tools.
pub mod data;

/// Failures that abort a run.
pub mod error;

/// Divide the input and the key domain across workers.
pub mod partition;

/// Sort keys in parallel over a fixed worker pool.
pub mod sort;

/// Wall-clock timing tools.
pub mod time;
