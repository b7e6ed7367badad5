//! Reads a puzzle from the file given as the first argument, or from stdin,
//! and prints `YES` or `NO`.
//!
//! Set `RUST_LOG=debug` to see the merges and the DFS intervals.

use std::process::ExitCode;

use floe_crossing::input::{self, InputError};
use floe_crossing::output::render_verdict;
use floe_crossing::solve;

fn read_puzzle() -> Result<floe_crossing::Puzzle, InputError> {
    match std::env::args().nth(1) {
        Some(path) => input::from_file(&path),
        None => input::from_reader(std::io::stdin().lock()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match read_puzzle() {
        Ok(puzzle) => {
            print!("{}", render_verdict(solve(&puzzle)));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
