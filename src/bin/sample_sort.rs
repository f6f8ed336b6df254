use std::process::ExitCode;

use keysort::cli;
use keysort::sort::Strategy;

fn main() -> ExitCode {
    env_logger::init();

    cli::run("sample-sort", Strategy::Sample)
}
