//! prepare-metadata - stamp a release into a plugin's metadata.json
//!
//! Reads `metadata.json` and `changelog.txt`, sets the document's `version`
//! and `changelog` fields, prints the updated document double-encoded as a
//! JSON string on one stdout line, and rewrites `metadata.json` with sorted
//! keys and 4-space indentation.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing and dispatch
//! - [`core`] - Metadata document, encoders, file storage, update cycle
//! - [`ui`] - Stderr diagnostics
//!
//! # Guarantees
//!
//! 1. Keys other than `version` and `changelog` keep their values
//! 2. The metadata file is replaced atomically or not at all
//! 3. A top level that is not a JSON object is rejected before any write

pub mod cli;
pub mod core;
pub mod ui;
