//! core::update
//!
//! The read-mutate-write cycle behind `prepare-metadata <VERSION>`.
//!
//! # Lifecycle
//!
//! 1. Read the metadata file, then the changelog
//! 2. Parse the metadata; reject anything but a top-level object
//! 3. Stamp `version` and `changelog`
//! 4. Write the double-encoded log line to `out`
//! 5. Replace the metadata file atomically with the pretty form
//!
//! Nothing is written to disk until every earlier step has succeeded.

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use super::context::Context;
use super::metadata::{MetadataDocument, MetadataError};
use super::store::{self, StoreError};

/// Errors from a metadata update.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Reading or replacing a file failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The metadata file could not be parsed or serialized.
    #[error("{path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    /// Writing the log line failed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Outcome of a successful update.
#[derive(Debug, Clone)]
pub struct Prepared {
    /// The document as written to disk.
    pub document: MetadataDocument,
    /// The line written to `out`, without the trailing newline.
    pub log_line: String,
    /// The metadata file that was replaced.
    pub metadata_path: PathBuf,
}

/// Stamp `version` and the changelog into the metadata file.
///
/// The log line goes to `out` before the metadata file is replaced.
pub fn prepare<W: Write>(
    ctx: &Context,
    version: &str,
    out: &mut W,
) -> Result<Prepared, UpdateError> {
    let metadata_path = ctx.metadata_path();
    let changelog_path = ctx.changelog_path();

    let raw = store::read_text(&metadata_path)?;
    let changelog = store::read_text(&changelog_path)?;

    let metadata_err = |source| UpdateError::Metadata {
        path: metadata_path.clone(),
        source,
    };

    let mut document = MetadataDocument::parse(&raw).map_err(metadata_err)?;
    document.apply_release(version, &changelog);

    let log_line = document.to_log_line().map_err(metadata_err)?;
    let pretty = document.to_pretty().map_err(metadata_err)?;

    writeln!(out, "{}", log_line)
        .and_then(|()| out.flush())
        .map_err(UpdateError::Output)?;

    store::replace_atomic(&metadata_path, &pretty)?;

    Ok(Prepared {
        document,
        log_line,
        metadata_path,
    })
}
