//! The memo view: list, detail pane, edit mode, and user intents.
//!
//! Each intent is a single repository call followed by a fresh projection
//! of the state. The view keeps no data of its own beyond the edit-mode
//! flag and the preview slot.

mod download;
mod model;
mod page;

pub use download::{Download, EXPORT_MIME};
pub use model::{DetailPane, ListEntry, Mode, Screen, project_detail, project_list};
pub use page::{PAGE_TEMPLATE, THEME_CSS, render_page};

use std::sync::Arc;

use log::info;
use thiserror::Error;

use crate::domain::{Note, NoteId};
use crate::render::{CommonMark, MarkdownRenderer, Preview, RenderError};
use crate::repo::{NoteRepository, RepoError, RepoResult};
use crate::store::KeyValueStore;

/// Errors raised while opening the memo view.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A blocking, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

/// What happened when the user asked to delete the selected note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Note),
    /// The note was kept; show the notice to the user.
    Rejected(Notice),
}

/// The memo widget: a repository plus its presentation state.
#[derive(Debug)]
pub struct Memo<S> {
    repo: NoteRepository<S>,
    mode: Mode,
    preview: Preview,
}

impl<S: KeyValueStore> Memo<S> {
    /// Loads (or seeds) the collection under `key` and shows the first note.
    pub fn open(store: S, key: impl Into<String>) -> Result<Self, ViewError> {
        let repo = NoteRepository::initialize(store, key)?;
        Ok(Self::new(repo)?)
    }

    /// Wraps an initialized repository using the default markdown renderer.
    pub fn new(repo: NoteRepository<S>) -> Result<Self, RenderError> {
        Self::with_renderer(repo, Arc::new(CommonMark))
    }

    /// Wraps an initialized repository with a custom markdown renderer.
    pub fn with_renderer(
        repo: NoteRepository<S>,
        renderer: Arc<dyn MarkdownRenderer>,
    ) -> Result<Self, RenderError> {
        let mut memo = Self {
            repo,
            mode: Mode::View,
            preview: Preview::new(renderer)?,
        };
        memo.refresh();
        Ok(memo)
    }

    /// Creates a note, selects it, and switches to edit mode.
    pub fn add_note(&mut self) -> RepoResult<&Note> {
        let created = self.repo.create_note().map(|_| ());
        self.after_mutation(created, Mode::Edit)?;
        Ok(self.repo.selected())
    }

    /// Selects the note with `id` and switches to view mode.
    pub fn select_note(&mut self, id: &NoteId) -> RepoResult<&Note> {
        self.repo.select_note(id)?;
        self.mode = Mode::View;
        self.refresh();
        Ok(self.repo.selected())
    }

    /// Selects the note at `index` and switches to view mode.
    pub fn select_index(&mut self, index: usize) -> RepoResult<&Note> {
        self.repo.select_index(index)?;
        self.mode = Mode::View;
        self.refresh();
        Ok(self.repo.selected())
    }

    /// Makes title and body editable.
    pub fn enter_edit(&mut self) {
        self.mode = Mode::Edit;
    }

    /// Saves title and body into the selected note and returns to view mode.
    pub fn save_edit(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> RepoResult<&Note> {
        let updated = self.repo.update_selected(title, body).map(|_| ());
        self.after_mutation(updated, Mode::View)?;
        Ok(self.repo.selected())
    }

    /// Deletes the selected note and returns to view mode.
    ///
    /// Deleting the only remaining note is turned into a
    /// [`DeleteOutcome::Rejected`] notice; storage errors are still errors.
    pub fn delete_note(&mut self) -> RepoResult<DeleteOutcome> {
        match self.repo.delete_selected() {
            Err(err @ RepoError::LastNote) => {
                info!("delete rejected: {}", err);
                Ok(DeleteOutcome::Rejected(Notice(err.to_string())))
            }
            result => self
                .after_mutation(result, Mode::View)
                .map(DeleteOutcome::Deleted),
        }
    }

    /// Builds the `{title}.md` download for the selected note.
    pub fn export_selected(&self) -> Download {
        Download::for_note(self.repo.selected())
    }

    /// Projects the current state, applying any finished preview render.
    pub fn screen(&mut self) -> Screen {
        self.preview.poll();
        self.project()
    }

    /// Like [`screen`](Self::screen), but waits for the pending preview.
    pub fn settled_screen(&mut self) -> Screen {
        self.preview.wait();
        self.project()
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the underlying repository.
    pub fn repo(&self) -> &NoteRepository<S> {
        &self.repo
    }

    fn project(&self) -> Screen {
        Screen {
            mode: self.mode,
            list: project_list(self.repo.notes(), self.repo.selected_index()),
            detail: project_detail(self.repo.selected(), self.preview.html(), self.mode),
        }
    }

    /// Switches to `mode` and re-renders once the repository has changed.
    ///
    /// A store error is raised after the in-memory change, so the view
    /// follows memory before the error is passed on.
    fn after_mutation<T>(&mut self, result: RepoResult<T>, mode: Mode) -> RepoResult<T> {
        if matches!(result, Ok(_) | Err(RepoError::Store(_))) {
            self.mode = mode;
            self.refresh();
        }
        result
    }

    fn refresh(&mut self) {
        self.preview.request(self.repo.selected().body());
    }
}
