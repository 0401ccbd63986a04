//! What the user sees: the note list and the detail pane.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Note;

/// Whether the detail pane shows the rendered preview or editable fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    View,
    Edit,
}

/// One row of the note list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub title: String,
    pub active: bool,
}

/// The selected note as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPane {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Rendered HTML of the body. May lag one render behind `body`.
    pub preview: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Title and body accept input.
    pub editable: bool,
    pub show_edit: bool,
    pub show_save: bool,
}

/// A full projection of the app state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub mode: Mode,
    pub list: Vec<ListEntry>,
    pub detail: DetailPane,
}

/// Projects every note into a list row, marking the selected one.
pub fn project_list(notes: &[Note], selected: usize) -> Vec<ListEntry> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| ListEntry {
            id: note.id().to_string(),
            title: note.title().to_string(),
            active: i == selected,
        })
        .collect()
}

/// Projects the selected note into the detail pane.
pub fn project_detail(note: &Note, preview: &str, mode: Mode) -> DetailPane {
    let editing = mode == Mode::Edit;
    DetailPane {
        id: note.id().to_string(),
        title: note.title().to_string(),
        body: note.body().to_string(),
        preview: preview.to_string(),
        created_at: note.created_at(),
        updated_at: note.updated_at(),
        editable: editing,
        show_edit: !editing,
        show_save: editing,
    }
}
