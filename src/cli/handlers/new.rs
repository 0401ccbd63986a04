//! New note command handler and editor plumbing.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

use super::open_memo;
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::store::KeyValueStore;
use crate::view::Memo;

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// The user's configured editor.
pub(crate) struct RealEditor<'a>(pub(crate) &'a Config);

impl EditorLauncher for RealEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        open_in_editor(path, self.0)
    }
}

/// Opens a file in the user's configured editor.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

/// Lets the user edit `initial` in a temporary markdown file and returns
/// the result.
pub(crate) fn edit_text<E: EditorLauncher>(editor: &E, initial: &str) -> Result<String> {
    let temp = tempfile::Builder::new()
        .prefix("memo-")
        .suffix(".md")
        .tempfile()
        .context("failed to create temporary file for editing")?;
    std::fs::write(temp.path(), initial)
        .with_context(|| format!("failed to write {}", temp.path().display()))?;

    editor.open(temp.path())?;

    std::fs::read_to_string(temp.path())
        .with_context(|| format!("failed to read back {}", temp.path().display()))
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_new_impl<S: KeyValueStore, E: EditorLauncher>(
    args: &NewArgs,
    memo: &mut Memo<S>,
    editor: &E,
) -> Result<()> {
    memo.add_note()?;

    if args.title.is_some() || args.body.is_some() || args.edit {
        let current = memo.repo().selected();
        let title = args.title.clone().unwrap_or_else(|| current.title().to_string());
        let mut body = args.body.clone().unwrap_or_default();
        if args.edit {
            body = edit_text(editor, &body)?;
        }
        memo.save_edit(title, body)?;
    }

    let note = memo.repo().selected();
    println!("Created: {} [{}]", note.title(), note.id().prefix());
    Ok(())
}

pub fn handle_new(args: &NewArgs, dir: &Path, key: &str, config: &Config) -> Result<()> {
    let mut memo = open_memo(dir, key)?;
    handle_new_impl(args, &mut memo, &RealEditor(config))
}
