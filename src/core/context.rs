//! core::context
//!
//! Where a run looks for its files.
//!
//! The binary always works in the process's current directory. Tests root
//! a context in a temp directory instead.

use std::path::{Path, PathBuf};

/// Metadata file name.
pub const METADATA_FILE: &str = "metadata.json";

/// Changelog file name.
pub const CHANGELOG_FILE: &str = "changelog.txt";

/// Execution context for a metadata update.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory holding both files (process cwd if `None`)
    pub dir: Option<PathBuf>,
}

impl Context {
    /// Context for the process's current directory.
    pub fn current() -> Self {
        Self::default()
    }

    /// Context rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    fn file(&self, name: &str) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.join(name),
            None => Path::new(name).to_path_buf(),
        }
    }

    /// Path of the metadata file.
    pub fn metadata_path(&self) -> PathBuf {
        self.file(METADATA_FILE)
    }

    /// Path of the changelog file.
    pub fn changelog_path(&self) -> PathBuf {
        self.file(CHANGELOG_FILE)
    }
}
