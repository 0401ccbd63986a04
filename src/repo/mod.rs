//! The note repository: ordered notes plus the selected index.
//!
//! Every successful mutation writes the whole collection back to the store
//! before returning. If that write fails the error is returned and memory
//! stays ahead of storage until the next successful mutation.


use chrono::{DateTime, Utc};
use log::debug;
use thiserror::Error;

use crate::domain::{Note, NoteId};
use crate::store::{self, KeyValueStore, StoreError};

/// Number of notes seeded into an empty collection.
const DEFAULT_NOTE_COUNT: usize = 2;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Reading or writing the backing document failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The only remaining note cannot be deleted.
    #[error("cannot delete the last memo")]
    LastNote,

    /// No note with the requested id exists.
    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    /// The requested position is outside the collection.
    #[error("no note at position {index} (collection has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Returns the default title for the note created at position `count`.
pub fn default_title(count: usize) -> String {
    format!("new memo {}", count + 1)
}

/// Owns the note collection, the selection, and the store it syncs to.
///
/// The collection is never empty once [`initialize`](Self::initialize) has
/// returned, and `selected_index` always points at an existing note.
#[derive(Debug)]
pub struct NoteRepository<S> {
    store: S,
    key: String,
    notes: Vec<Note>,
    selected: usize,
    clock: fn() -> DateTime<Utc>,
}

impl<S: KeyValueStore> NoteRepository<S> {
    /// Loads the collection stored under `key`.
    ///
    /// When the store holds no notes, two default notes are created and
    /// persisted. The first note is selected.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::Store` if the document cannot be read or parsed,
    /// or if seeding the default notes cannot be persisted.
    pub fn initialize(store: S, key: impl Into<String>) -> RepoResult<Self> {
        Self::initialize_with_clock(store, key, Utc::now)
    }

    /// Like [`initialize`](Self::initialize), with a custom time source.
    pub fn initialize_with_clock(
        store: S,
        key: impl Into<String>,
        clock: fn() -> DateTime<Utc>,
    ) -> RepoResult<Self> {
        let key = key.into();
        let notes = store::load(&store, &key)?;
        debug!("loaded {} notes from '{}'", notes.len(), key);

        let mut repo = Self {
            store,
            key,
            notes,
            selected: 0,
            clock,
        };

        if repo.notes.is_empty() {
            for _ in 0..DEFAULT_NOTE_COUNT {
                let note = repo.new_note();
                repo.notes.push(note);
            }
            repo.persist()?;
            debug!("seeded {} default notes", DEFAULT_NOTE_COUNT);
        }

        repo.selected = 0;
        Ok(repo)
    }

    /// Appends an empty note, persists, and selects it.
    ///
    /// The title is `"new memo {n+1}"` where `n` is the count before the
    /// insert.
    pub fn create_note(&mut self) -> RepoResult<&Note> {
        let note = self.new_note();
        debug!("creating note {} '{}'", note.id(), note.title());
        self.notes.push(note);
        self.selected = self.notes.len() - 1;
        self.persist()?;
        Ok(&self.notes[self.selected])
    }

    /// Selects the first note whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::NoteNotFound` and keeps the current selection if
    /// no note has that id.
    pub fn select_note(&mut self, id: &NoteId) -> RepoResult<&Note> {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NoteNotFound { id: id.to_string() })?;
        self.selected = index;
        Ok(&self.notes[index])
    }

    /// Selects the note at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::IndexOutOfRange` and keeps the current selection
    /// if `index` is past the end.
    pub fn select_index(&mut self, index: usize) -> RepoResult<&Note> {
        if index >= self.notes.len() {
            return Err(RepoError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        self.selected = index;
        Ok(&self.notes[index])
    }

    /// Overwrites title and body of the selected note and persists.
    pub fn update_selected(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> RepoResult<&Note> {
        let now = (self.clock)();
        let note = &mut self.notes[self.selected];
        note.set_content(title, body, now);
        debug!("updated note {} '{}'", note.id(), note.title());
        self.persist()?;
        Ok(&self.notes[self.selected])
    }

    /// Removes the selected note and persists.
    ///
    /// Selection moves to the previous note, or stays at 0 when the first
    /// note was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::LastNote` without touching anything when only
    /// one note remains.
    pub fn delete_selected(&mut self) -> RepoResult<Note> {
        if self.notes.len() == 1 {
            return Err(RepoError::LastNote);
        }

        let removed = self.notes.remove(self.selected);
        debug!("deleted note {} '{}'", removed.id(), removed.title());
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.persist()?;
        Ok(removed)
    }

    /// Returns all notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false once initialized; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the position of the selected note.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the selected note.
    pub fn selected(&self) -> &Note {
        &self.notes[self.selected]
    }

    /// Returns the position of the note with `id`, if any.
    pub fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    /// Returns the key the collection is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn new_note(&self) -> Note {
        Note::empty(default_title(self.notes.len()), (self.clock)())
    }

    fn persist(&mut self) -> RepoResult<()> {
        store::save(&mut self.store, &self.key, &self.notes)?;
        Ok(())
    }
}
