//! cli
//!
//! Command-line interface layer.
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses the version argument via clap and hands
//! off to [`crate::core::update`] in the current directory. The only thing
//! it writes to stdout is the log line produced there.

pub mod args;

pub use args::Cli;

use crate::core::{update, Context};
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    update::prepare(&Context::current(), &cli.release, &mut out)?;

    Ok(())
}
