use std::env;
use std::process::ExitCode;

use itertools::Itertools;
use log::info;

use crate::config::Config;
use crate::data::random;
use crate::partition::Key;
use crate::sort::{parallel_sort, Strategy};
use crate::time::timed;

/// Print keys on one line, space separated.
fn output(keys: &[Key]) {
    println!("{}", keys.iter().join(" "));
}

/// Parse the command line, generate random keys, sort them with `strategy`
/// and print the per-partition results. Malformed arguments exit non-zero
/// with a usage message.
///
/// # Arguments
/// * `program` - Program name for the usage message
/// * `strategy` - Partition assignment strategy of this binary
pub fn run(program: &str, strategy: Strategy) -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() != 3 {
        eprintln!("Usage: {} NUM_THREADS NUM_KEYS DISPLAY_OUTPUT[0|1]", program);
        return ExitCode::FAILURE;
    }

    let config = match Config::from_args(&args[0], &args[1], &args[2]) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {}", program, err);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "sorting {} keys across {} workers",
        config.num_keys, config.num_workers
    );

    let keys = random(config.num_keys, config.interval_max);
    if config.display {
        output(&keys);
    }

    let (result, elapsed) = timed(|| parallel_sort(&keys, &config, strategy));
    let output_set = match result {
        Ok(output_set) => output_set,
        Err(err) => {
            eprintln!("{}: {}", program, err);
            return ExitCode::FAILURE;
        }
    };

    if config.display {
        if let Some(pool) = &output_set.sample_pool {
            print!("Sample pool: ");
            output(pool);
        }
        if let Some(splitters) = &output_set.splitters {
            print!("Selected splitters: ");
            output(splitters);
        }
        let sizes = output_set.partitions.iter().map(Vec::len).collect_vec();
        println!("Partition sizes: {}", sizes.iter().join(" "));
        for partition in &output_set.partitions {
            output(partition);
        }
    }

    println!(
        "{:.3} ms | {} workers | {} keys",
        elapsed, config.num_workers, config.num_keys
    );

    ExitCode::SUCCESS
}
