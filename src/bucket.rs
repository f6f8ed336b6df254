use std::sync::OnceLock;

use crate::partition::{Key, Keys};

/// One worker's row of append-only buckets, written exclusively by that
/// worker during the assignment phase.
#[derive(Debug)]
pub struct RowBuckets {
    buckets: Vec<Keys>,
}

impl RowBuckets {
    pub fn new(num_buckets: usize) -> RowBuckets {
        RowBuckets {
            buckets: vec![Vec::new(); num_buckets],
        }
    }

    /// Append `key` to the bucket headed for `partition`.
    pub fn append(&mut self, partition: usize, key: Key) {
        self.buckets[partition].push(key);
    }

    pub fn bucket(&self, partition: usize) -> &[Key] {
        &self.buckets[partition]
    }
}

/// Grid of buckets: row `i` holds the keys worker `i` assigned to each
/// target partition. Rows are write-once slots. A worker fills its own
/// `RowBuckets` privately, publishes it before the assignment barrier, and
/// the grid is read-only from then on. Write ownership is statically
/// partitioned by row, so the grid needs no locking.
#[derive(Debug)]
pub struct BucketGrid {
    rows: Vec<OnceLock<RowBuckets>>,
}

impl BucketGrid {
    pub fn new(num_workers: usize) -> BucketGrid {
        BucketGrid {
            rows: (0..num_workers).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Publish worker `owner`'s completed row. Publishing a row twice breaks
    /// the ownership discipline and panics.
    pub fn publish(&self, owner: usize, row: RowBuckets) {
        if self.rows[owner].set(row).is_err() {
            panic!("bucket row {} published twice", owner);
        }
    }

    /// Concatenate column `partition` across all rows, in row order. Row
    /// order carries no meaning for the caller, which sorts the result.
    /// Callable only once every row has been published.
    pub fn collect_partition(&self, partition: usize) -> Keys {
        let mut collected = Vec::new();

        for row in self.rows.iter() {
            let row = row.get().expect("bucket row read before publication");
            collected.extend_from_slice(row.bucket(partition));
        }

        collected
    }
}
