//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Utc};
use memo::domain::{Note, NoteId};

/// Builder for creating test notes with sensible defaults.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    title: String,
    body: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl TestNote {
    /// Creates a new test note with the given title, a fresh ID, and
    /// timestamps set to now.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            title: title.into(),
            body: String::new(),
            created: now,
            updated: now,
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.parse().expect("Invalid test note id");
        self
    }

    /// Sets the markdown body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Converts to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(
            self.id.clone(),
            self.title.clone(),
            self.body.clone(),
            self.created,
            self.updated,
        )
    }
}
