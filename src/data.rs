use rand::Rng;

use crate::partition::{Key, Keys};

/// Generate a uniform random distribution of keys in range
/// `[0, interval_max)`, for testing.
pub fn random(num_keys: usize, interval_max: Key) -> Keys {
    let mut range = rand::thread_rng();

    let mut keys: Keys = Vec::with_capacity(num_keys);

    for _ in 0..num_keys {
        keys.push(range.gen_range(0..interval_max));
    }

    keys
}
