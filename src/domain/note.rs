//! Note record: id, title, markdown body, and two timestamps.

use crate::domain::NoteId;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single memo.
///
/// Serialized as a JSON object with the keys `id`, `title`, `body`,
/// `createdAt` and `updatedAt`; the timestamps are integer epoch
/// milliseconds. Timestamps are truncated to millisecond precision on
/// construction so that a note always equals its own serialized form.
///
/// # Examples
///
/// ```
/// use memo::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::new(NoteId::new(), "Groceries", "- milk", now, now);
/// assert_eq!(note.title(), "Groceries");
/// assert_eq!(note.body(), "- milk");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    body: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note from all of its fields.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at: created_at.trunc_subsecs(3),
            updated_at: updated_at.trunc_subsecs(3),
        }
    }

    /// Creates an empty note with a fresh id, stamped with `now`.
    pub fn empty(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(NoteId::new(), title, "", now, now)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the markdown source of the body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last saved.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces title and body and bumps `updated_at`.
    ///
    /// The id and creation time never change.
    pub fn set_content(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        self.title = title.into();
        self.body = body.into();
        self.updated_at = now.trunc_subsecs(3);
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("body_len", &self.body.len())
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
