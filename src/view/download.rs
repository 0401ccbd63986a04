//! Exporting a note's markdown body as a file.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::Note;

/// MIME type attached to exported notes.
pub const EXPORT_MIME: &str = "application/octet-stream";

/// A file offered for download: the raw markdown body of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// `{title}.md`
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

impl Download {
    /// Builds the download for `note`.
    pub fn for_note(note: &Note) -> Self {
        Self {
            filename: format!("{}.md", note.title()),
            mime: EXPORT_MIME,
            contents: note.body().to_string(),
        }
    }

    /// Returns `filename` with path separators and control characters
    /// replaced, so it always names a single file.
    pub fn safe_filename(&self) -> String {
        let stem = self.filename.strip_suffix(".md").unwrap_or(&self.filename);
        let cleaned: String = stem
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        let cleaned = cleaned.trim().trim_start_matches('.');
        if cleaned.is_empty() {
            "untitled.md".to_string()
        } else {
            format!("{}.md", cleaned)
        }
    }

    /// Writes the body into `dir` under [`safe_filename`](Self::safe_filename).
    ///
    /// Returns the path written.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.safe_filename());
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}
