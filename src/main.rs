//! docintel CLI entry point
//!
//! Parses arguments, dispatches to a command and exits non-zero on failure.
//! All logic lives in the CLI module; the error line is already on stdout
//! by the time `run` returns.

use docintel::cli;

fn main() {
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
