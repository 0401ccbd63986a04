//! Core types: Note and NoteId

mod note;
mod note_id;

pub use note::Note;
pub use note_id::{NoteId, ParseNoteIdError};
