use crate::error::Error;
use crate::partition::Key;
use crate::sort::Strategy;

/// Parameters of a sort run. `num_workers` doubles as the number of target
/// partitions, since each worker sorts exactly one partition.
#[derive(Debug, Clone)]
pub struct Config {
    pub num_workers: usize,
    pub num_keys: usize,
    /// Upper bound of the key domain, exclusive.
    pub interval_max: Key,
    /// Surface intermediate structures (raw input, sample pool, splitters)
    /// to the output sink.
    pub display: bool,
}

impl Config {
    /// Build a configuration from the positional command-line arguments
    /// `NUM_THREADS NUM_KEYS DISPLAY_OUTPUT`. The key domain defaults to the
    /// full non-negative `i32` range.
    pub fn from_args(num_workers: &str, num_keys: &str, display: &str) -> Result<Config, Error> {
        let num_workers = parse_field("NUM_THREADS", num_workers)?;
        let num_keys = parse_field("NUM_KEYS", num_keys)?;
        let display = parse_field("DISPLAY_OUTPUT", display)? == 1;

        Ok(Config {
            num_workers,
            num_keys,
            interval_max: Key::MAX,
            display,
        })
    }

    /// Check the preconditions of `strategy` before any worker launches, so
    /// a bad configuration fails fast instead of corrupting indices.
    pub fn validate(&self, strategy: Strategy) -> Result<(), Error> {
        if self.num_workers == 0 {
            return Err(Error::NoWorkers);
        }
        if self.interval_max < 1 {
            return Err(Error::InvalidIntervalMax(self.interval_max));
        }

        match strategy {
            Strategy::Range => {
                if (self.interval_max as usize) < self.num_workers {
                    return Err(Error::ZeroWidthSpan {
                        interval_max: self.interval_max,
                        num_workers: self.num_workers,
                    });
                }
            }
            Strategy::Sample => {
                // Every chunk is at least num_keys / num_workers long and
                // must supply one key per splitter sample.
                let num_splitters = self.num_workers - 1;
                let chunk_size = self.num_keys / self.num_workers;
                if self.num_keys > 0 && chunk_size < num_splitters {
                    return Err(Error::ChunkTooSmall {
                        chunk_size,
                        num_splitters,
                    });
                }
            }
        }

        Ok(())
    }
}

fn parse_field(name: &'static str, value: &str) -> Result<usize, Error> {
    value.parse().map_err(|_| Error::InvalidArgument {
        name,
        value: value.to_string(),
    })
}
