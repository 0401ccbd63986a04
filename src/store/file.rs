//! Directory-backed key-value store with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{KeyValueStore, StoreError, validate_key};

/// Stores each document as `<dir>/<key>.json`.
///
/// Writes go to a temp file in the same directory which is then renamed
/// over the target, so readers never observe a half-written document.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that backs `key`.
    pub fn document_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.document_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.document_path(key)?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        temp.write_all(value.as_bytes())
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        temp.persist(&path).map_err(|e| StoreError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        Ok(())
    }
}
