//! core::store
//!
//! File access for the metadata and changelog files.
//!
//! # Atomicity
//!
//! The metadata file is never rewritten in place. New content goes to a
//! uniquely named temp file in the same directory, which is synced and then
//! renamed over the target, so a failure at any point leaves the previous
//! file intact. The temp file takes the target's permissions before the
//! rename.
//!
//! A symlinked target is resolved first; the link survives and the file it
//! points to receives the new content.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading or replacing files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Atomically replace the contents of `path`.
///
/// `path` must already exist; its permissions carry over to the new file.
pub fn replace_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).map_err(write_err)?;
    let permissions = fs::metadata(&target).map_err(write_err)?.permissions();
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut prefix = OsString::from(".");
    if let Some(name) = target.file_name() {
        prefix.push(name);
    }

    // Dropping the temp file on any early return removes it.
    let mut temp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;

    temp.write_all(contents.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.as_file()
        .set_permissions(permissions)
        .map_err(write_err)?;

    temp.persist(&target)
        .map_err(|err| write_err(err.error))?;

    Ok(())
}
