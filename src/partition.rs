use std::ops::Range;

use itertools::Itertools;

/// Integer sort key.
pub type Key = i32;
/// Vector of **Keys**.
pub type Keys = Vec<Key>;

/// Split `num_keys` indices into `num_workers` contiguous chunks, one per
/// worker. Chunks cover the index space exactly; the last chunk absorbs the
/// `num_keys mod num_workers` remainder.
///
/// # Arguments
/// * `num_keys` - Length of the input array
/// * `num_workers` - Size of the worker pool
pub fn chunk_ranges(num_keys: usize, num_workers: usize) -> Vec<Range<usize>> {
    let chunk_size = num_keys / num_workers;

    (0..num_workers)
        .map(|tid| {
            let start = tid * chunk_size;
            let end = if tid == num_workers - 1 {
                num_keys
            } else {
                start + chunk_size
            };
            start..end
        })
        .collect()
}

/// Assign keys to partitions by equal value spans over `[0, interval_max)`.
/// Balanced partition sizes rely on the keys being uniformly distributed.
#[derive(Debug, Clone)]
pub struct RangePartitioner {
    span: Key,
    num_buckets: usize,
}

impl RangePartitioner {
    /// # Arguments
    /// * `interval_max` - Upper bound of the key domain, at least `num_buckets`
    /// * `num_buckets` - Number of target partitions
    pub fn new(interval_max: Key, num_buckets: usize) -> RangePartitioner {
        RangePartitioner {
            span: interval_max / num_buckets as Key,
            num_buckets,
        }
    }

    /// Partition index for `key`. Integer division sends keys at the top of
    /// the domain past the last index, so the result is clamped and the last
    /// partition absorbs the tail.
    pub fn index_of(&self, key: Key) -> usize {
        (key / self.span).clamp(0, self.num_buckets as Key - 1) as usize
    }
}

/// Extract the `num_workers - 1` evenly spaced samples a worker contributes
/// to splitter selection. Empty for a single worker.
///
/// # Arguments
/// * `sorted_chunk` - The worker's chunk, already sorted, at least
///   `num_workers - 1` keys long
/// * `num_workers` - Size of the worker pool
pub fn local_samples(sorted_chunk: &[Key], num_workers: usize) -> Keys {
    let num_splitters = num_workers - 1;
    if num_splitters == 0 {
        return Vec::new();
    }

    let stride = sorted_chunk.len() / num_splitters;
    (0..num_splitters)
        .map(|k| sorted_chunk[((k + 1) * stride) - 1])
        .collect_vec()
}

/// Assign keys to partitions by `num_buckets - 1` splitter values, so
/// partition sizes are balanced by count rather than by value range.
#[derive(Debug, Clone)]
pub struct SplitterPartitioner {
    splitters: Keys,
}

impl SplitterPartitioner {
    /// Sort the pool of collected samples in place and pick every
    /// `num_workers`'th element, leaving `num_workers - 1` non-decreasing
    /// splitters.
    ///
    /// # Arguments
    /// * `sample_pool` - All workers' samples, `num_workers * (num_workers - 1)` keys
    /// * `num_workers` - Size of the worker pool
    pub fn select(sample_pool: &mut Keys, num_workers: usize) -> SplitterPartitioner {
        sample_pool.sort_unstable();

        let splitters = (0..num_workers - 1)
            .map(|k| sample_pool[((k + 1) * num_workers) - 1])
            .collect_vec();

        SplitterPartitioner { splitters }
    }

    /// Smallest partition index whose splitter is at least `key`; keys above
    /// every splitter fall into the last partition.
    pub fn index_of(&self, key: Key) -> usize {
        self.splitters
            .iter()
            .position(|s| key <= *s)
            .unwrap_or(self.splitters.len())
    }

    pub fn splitters(&self) -> &[Key] {
        &self.splitters
    }
}

/// Partition assigner, one of the two interchangeable strategies.
#[derive(Debug, Clone)]
pub enum Partitioner {
    Range(RangePartitioner),
    Splitters(SplitterPartitioner),
}

impl Partitioner {
    pub fn index_of(&self, key: Key) -> usize {
        match self {
            Partitioner::Range(p) => p.index_of(key),
            Partitioner::Splitters(p) => p.index_of(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_ranges() {
        let ranges = chunk_ranges(9, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..9]);

        // Last chunk absorbs the remainder
        let ranges = chunk_ranges(10, 4);
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..10]);

        // Fewer keys than workers
        let ranges = chunk_ranges(2, 4);
        assert_eq!(ranges, vec![0..0, 0..0, 0..0, 0..2]);

        let ranges = chunk_ranges(0, 2);
        assert_eq!(ranges, vec![0..0, 0..0]);
    }

    #[test]
    fn test_chunk_ranges_cover_exactly() {
        let ranges = chunk_ranges(1000, 7);
        let mut next = 0;
        for range in &ranges {
            assert_eq!(range.start, next);
            next = range.end;
        }
        assert_eq!(next, 1000);
    }

    #[test]
    fn test_range_partitioner() {
        let partitioner = RangePartitioner::new(9, 3);

        assert_eq!(partitioner.index_of(0), 0);
        assert_eq!(partitioner.index_of(2), 0);
        assert_eq!(partitioner.index_of(3), 1);
        assert_eq!(partitioner.index_of(5), 1);
        assert_eq!(partitioner.index_of(6), 2);
        assert_eq!(partitioner.index_of(8), 2);

        // Values at or beyond interval_max clamp into the last partition
        assert_eq!(partitioner.index_of(9), 2);
        assert_eq!(partitioner.index_of(Key::MAX), 2);

        // Values below the domain clamp into the first
        assert_eq!(partitioner.index_of(-1), 0);
    }

    #[test]
    fn test_range_partitioner_truncated_span() {
        // interval_max not divisible by the bucket count: the last span
        // stretches to cover the tail of the domain
        let partitioner = RangePartitioner::new(10, 3);
        for key in 0..10 {
            let idx = partitioner.index_of(key);
            assert!(idx < 3);
        }
        assert_eq!(partitioner.index_of(9), 2);
    }

    #[test]
    fn test_local_samples() {
        // stride = 8 / 4 = 2, samples at local indices 1, 3, 5, 7
        let chunk: Keys = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let samples = local_samples(&chunk, 5);
        assert_eq!(samples, vec![2, 4, 6, 8]);

        // stride = 2 / 1 = 2, single sample at index 1
        let chunk: Keys = vec![1, 4];
        let samples = local_samples(&chunk, 2);
        assert_eq!(samples, vec![4]);

        // Single worker contributes no samples
        let samples = local_samples(&chunk, 1);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_splitter_selection() {
        // Two workers, one sample each: the splitter is the larger sample
        let mut pool: Keys = vec![4, 3];
        let partitioner = SplitterPartitioner::select(&mut pool, 2);
        assert_eq!(pool, vec![3, 4]);
        assert_eq!(partitioner.splitters(), &[4]);

        // Three workers, two samples each
        let mut pool: Keys = vec![10, 20, 5, 15, 25, 30];
        let partitioner = SplitterPartitioner::select(&mut pool, 3);
        assert_eq!(partitioner.splitters(), &[15, 30]);
    }

    #[test]
    fn test_splitters_non_decreasing() {
        let mut pool: Keys = vec![9, 1, 7, 3, 5, 5, 2, 8, 4, 6, 0, 9];
        let num_workers = 4;
        let partitioner = SplitterPartitioner::select(&mut pool, num_workers);

        let splitters = partitioner.splitters();
        assert_eq!(splitters.len(), num_workers - 1);
        for pair in splitters.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_splitter_classification() {
        let partitioner = SplitterPartitioner {
            splitters: vec![10, 20, 30],
        };

        assert_eq!(partitioner.index_of(Key::MIN), 0);
        // Boundary keys belong to the partition their splitter caps
        assert_eq!(partitioner.index_of(10), 0);
        assert_eq!(partitioner.index_of(11), 1);
        assert_eq!(partitioner.index_of(20), 1);
        assert_eq!(partitioner.index_of(30), 2);
        // Keys above every splitter fall into the last partition
        assert_eq!(partitioner.index_of(31), 3);
        assert_eq!(partitioner.index_of(Key::MAX), 3);
    }

    #[test]
    fn test_empty_splitter_set() {
        let partitioner = SplitterPartitioner { splitters: vec![] };
        assert_eq!(partitioner.index_of(Key::MIN), 0);
        assert_eq!(partitioner.index_of(Key::MAX), 0);
    }
}
