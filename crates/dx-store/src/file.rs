//! File-based state store.
//!
//! [`FileStore`] keeps each key in its own file under a root directory:
//!
//! ```text
//! {root}/
//! +-- dsnid          # contains "42"
//! +-- ...
//! ```
//!
//! Keys are restricted to a single path component so a key can never
//! address a file outside the root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::StateStore;

/// File-based [`StateStore`] rooted at a directory on disk.
///
/// The directory is created lazily on the first write. Read and write
/// failures are logged but never fatal.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory of this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        if !is_valid_key(key) {
            tracing::warn!(key, "rejecting state key that is not a plain file name");
            return None;
        }
        Some(self.root.join(key))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Failed to read state file");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(path) = self.path_for(key) else {
            return;
        };
        if let Err(e) = fs::create_dir_all(&self.root) {
            tracing::warn!(error = %e, "Failed to create state directory");
            return;
        }
        if let Err(e) = fs::write(&path, value) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write state file");
        }
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.contains('\0')
}
