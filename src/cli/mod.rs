//! CLI module for nestdb
//!
//! A thin one-shot shell over the store: parse arguments, load config, open
//! the store, run a single command, print JSON.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
