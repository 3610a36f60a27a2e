//! Pasteboard CLI entry point

use std::process::ExitCode;

use clap::Parser;

use pasteboard::cli::{run, Cli};

fn main() -> ExitCode {
    run(Cli::parse())
}
