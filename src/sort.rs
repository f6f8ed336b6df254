use std::sync::{Barrier, OnceLock};
use std::thread;

use itertools::Itertools;
use log::debug;

use crate::bucket::{BucketGrid, RowBuckets};
use crate::config::Config;
use crate::error::Error;
use crate::partition::{
    chunk_ranges, local_samples, Key, Keys, Partitioner, RangePartitioner, SplitterPartitioner,
};

/// Partition assignment strategy for a sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Equal value spans over the key domain.
    Range,
    /// Splitters selected from a distributed sample of the data.
    Sample,
}

/// Output of a sort run: one sorted partition per worker, plus the
/// intermediate sampling structures when the sample strategy ran.
#[derive(Debug)]
pub struct SortOutput {
    /// Sorted partitions in ascending partition index order. Concatenated,
    /// they are the fully sorted input.
    pub partitions: Vec<Keys>,
    /// Sorted pool of all collected samples.
    pub sample_pool: Option<Keys>,
    /// The selected splitters, `num_workers - 1` non-decreasing values.
    pub splitters: Option<Keys>,
}

impl SortOutput {
    fn empty(num_workers: usize) -> SortOutput {
        SortOutput {
            partitions: vec![Vec::new(); num_workers],
            sample_pool: None,
            splitters: None,
        }
    }
}

/// Concatenate the sorted partitions in partition index order. Every key in
/// partition `i` is at most every key in partition `i + 1`, so concatenation
/// alone yields the fully sorted array.
pub fn assemble(output: &SortOutput) -> Keys {
    let total = output.partitions.iter().map(Vec::len).sum();
    let mut sorted = Vec::with_capacity(total);

    for partition in output.partitions.iter() {
        sorted.extend_from_slice(partition);
    }

    sorted
}

/// Sort `keys` with a fixed pool of `config.num_workers` threads, launched
/// once in a single fork-join region.
///
/// Each worker scatters its chunk of the input into a private row of the
/// bucket grid, then sorts the one partition matching its own index. Shared
/// structures are either owned by a single worker (grid rows, sample slots)
/// or written once by worker 0 between barriers (splitters), so the phases
/// need no locks, only rendezvous.
///
/// # Arguments
/// * `keys` - Input keys, left unchanged
/// * `config` - Worker count and key domain
/// * `strategy` - Partition assignment strategy
pub fn parallel_sort(
    keys: &[Key],
    config: &Config,
    strategy: Strategy,
) -> Result<SortOutput, Error> {
    let run = Config {
        num_keys: keys.len(),
        ..config.clone()
    };
    run.validate(strategy)?;

    let num_workers = run.num_workers;
    if keys.is_empty() {
        return Ok(SortOutput::empty(num_workers));
    }

    let ranges = chunk_ranges(keys.len(), num_workers);

    let barrier = Barrier::new(num_workers);
    let grid = BucketGrid::new(num_workers);
    let range_partitioner = RangePartitioner::new(run.interval_max, num_workers);

    // One write-once slot per worker's samples, filled before the sampling
    // barrier; splitters written once by worker 0 between barriers.
    let sample_slots: Vec<OnceLock<Keys>> = (0..num_workers).map(|_| OnceLock::new()).collect();
    let sample_pool: OnceLock<Keys> = OnceLock::new();
    let splitters: OnceLock<SplitterPartitioner> = OnceLock::new();

    let partitions = thread::scope(|s| {
        let mut handles = Vec::with_capacity(num_workers);

        for (tid, range) in ranges.iter().cloned().enumerate() {
            let barrier = &barrier;
            let grid = &grid;
            let range_partitioner = &range_partitioner;
            let sample_slots = &sample_slots;
            let sample_pool = &sample_pool;
            let splitters = &splitters;
            let chunk = &keys[range];

            handles.push(s.spawn(move || {
                let partitioner = match strategy {
                    Strategy::Range => Partitioner::Range(range_partitioner.clone()),
                    Strategy::Sample => {
                        // Sort a private copy of the chunk and contribute
                        // evenly spaced samples to the shared pool.
                        let mut local = chunk.to_vec();
                        local.sort_unstable();
                        sample_slots[tid]
                            .set(local_samples(&local, num_workers))
                            .unwrap();

                        // All samples must be written before selection.
                        barrier.wait();

                        if tid == 0 {
                            let mut pool: Keys = sample_slots
                                .iter()
                                .flat_map(|slot| slot.get().unwrap())
                                .copied()
                                .collect_vec();
                            let selected = SplitterPartitioner::select(&mut pool, num_workers);
                            debug!("selected splitters {:?}", selected.splitters());
                            splitters.set(selected).unwrap();
                            sample_pool.set(pool).unwrap();
                        }

                        // Selection must be complete before any worker reads
                        // the splitters.
                        barrier.wait();

                        Partitioner::Splitters(splitters.get().unwrap().clone())
                    }
                };

                // Scatter the chunk into this worker's private bucket row.
                let mut row = RowBuckets::new(num_workers);
                for &key in chunk {
                    row.append(partitioner.index_of(key), key);
                }
                grid.publish(tid, row);

                // All rows must be published before any column is read.
                barrier.wait();

                let mut partition = grid.collect_partition(tid);
                partition.sort_unstable();
                debug!("worker {} sorted a partition of {} keys", tid, partition.len());
                partition
            }));
        }

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<Keys>>()
    });

    Ok(SortOutput {
        partitions,
        sample_pool: sample_pool.into_inner(),
        splitters: splitters
            .into_inner()
            .map(|partitioner| partitioner.splitters().to_vec()),
    })
}
