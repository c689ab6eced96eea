//! Command Line Interface (CLI) layer for ocrtext.
//!
//! `args` defines the command line and `runner` wires it to the library:
//! logging setup, engine construction and the exit status. Embedders should
//! call `ocrtext::api` directly instead.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
