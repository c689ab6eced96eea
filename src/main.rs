//! ocrtext CLI entrypoint.
//!
//! Parses arguments and hands over to `cli::run`, which exits 0 on success,
//! 1 when recognition fails and 2 when the OCR engine is unavailable.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
