//! Whole-document persistence of the note collection.
//!
//! The collection lives as a single JSON array under one key of a
//! [`KeyValueStore`]. Every save overwrites the whole document; there are
//! no partial or append writes.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use log::trace;
use thiserror::Error;

use crate::domain::Note;

/// Default key under which the collection is stored.
pub const STORAGE_KEY: &str = "memo";

/// Errors raised while reading or writing the note document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key '{key}': keys may only contain ASCII letters, digits, '-', '_' and '.'")]
    InvalidKey { key: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document under key '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize notes: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A string-keyed document store.
///
/// Mirrors the shape of a browser's local storage: whole string values
/// addressed by key, read and written synchronously.
pub trait KeyValueStore {
    /// Returns the document stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites the document stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Loads the note collection stored under `key`.
///
/// A missing document yields an empty collection. A document that is not
/// a valid JSON array of notes is reported as [`StoreError::Parse`].
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Vec<Note>, StoreError> {
    let Some(raw) = store.get(key)? else {
        trace!("no document under key '{}'", key);
        return Ok(Vec::new());
    };

    let notes: Vec<Note> = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        key: key.to_string(),
        source,
    })?;
    trace!("loaded {} notes from key '{}'", notes.len(), key);
    Ok(notes)
}

/// Serializes the whole collection and overwrites the document at `key`.
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    notes: &[Note],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(notes).map_err(StoreError::Serialize)?;
    store.set(key, &raw)?;
    trace!("saved {} notes to key '{}'", notes.len(), key);
    Ok(())
}

/// Checks that `key` can be used as a document name.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey {
            key: key.to_string(),
        })
    }
}
