//! Command handlers for the CLI.

mod delete;
mod export;
mod list;
mod new;
mod render;
mod resolve;
mod show_edit;


use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::store::{FileStore, KeyValueStore};
use crate::view::Memo;

// Re-export public items
pub use delete::handle_delete;
pub use export::handle_export;
pub use list::handle_list;
pub use new::handle_new;
pub use render::handle_render;
pub use resolve::{ResolveResult, resolve_note};
pub use show_edit::{handle_edit, handle_show};

// Re-export for tests
#[cfg(test)]
pub(crate) use new::{EditorLauncher, edit_text, handle_new_impl};
#[cfg(test)]
pub(crate) use show_edit::{handle_edit_impl, read_body_file};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the memo stored under `key` in `dir`, seeding it on first use.
pub(crate) fn open_memo(dir: &Path, key: &str) -> Result<Memo<FileStore>> {
    let store = FileStore::open(dir)
        .with_context(|| format!("failed to open storage directory {}", dir.display()))?;
    Memo::open(store, key).with_context(|| format!("failed to load memos from '{}'", key))
}

/// Selects the note named by `identifier`, if one was given.
///
/// Without an identifier the selection made at startup (the first note)
/// is kept.
pub(crate) fn select_identified<S: KeyValueStore>(
    memo: &mut Memo<S>,
    identifier: Option<&str>,
) -> Result<()> {
    let Some(identifier) = identifier else {
        return Ok(());
    };

    match resolve_note(memo.repo().notes(), identifier) {
        ResolveResult::Unique(pos) => {
            memo.select_index(pos)?;
            Ok(())
        }
        ResolveResult::Ambiguous(positions) => {
            resolve::print_ambiguous_notes(identifier, memo.repo().notes(), &positions);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => {
            bail!("note not found: '{}'", identifier);
        }
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "memo", &mut io::stdout());
    Ok(())
}
