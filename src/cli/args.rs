//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The only argument is the version string. It is taken verbatim, including
//! values that start with `-`.

use clap::Parser;

/// Stamp a release version and changelog into metadata.json
#[derive(Parser, Debug)]
#[command(name = "prepare-metadata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Reads metadata.json and changelog.txt from the current directory.

EXAMPLE:
    prepare-metadata 1.2.3")]
pub struct Cli {
    /// Version string to write into the metadata (used verbatim)
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub release: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
