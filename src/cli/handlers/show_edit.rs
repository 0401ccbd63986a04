//! Show and Edit command handlers.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use super::new::{EditorLauncher, RealEditor, edit_text};
use super::{open_memo, select_identified};
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};
use crate::store::KeyValueStore;
use crate::view::Memo;

pub fn handle_show(args: &ShowArgs, dir: &Path, key: &str) -> Result<()> {
    let mut memo = open_memo(dir, key)?;
    select_identified(&mut memo, args.note.as_deref())?;
    let screen = memo.settled_screen();
    let detail = &screen.detail;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", detail.title);
            println!();
            println!(
                "ID: {}  Created: {}  Updated: {}",
                detail.id,
                detail.created_at.format("%Y-%m-%d %H:%M"),
                detail.updated_at.format("%Y-%m-%d %H:%M")
            );
            println!();

            if !detail.body.is_empty() {
                println!("--- markdown ---");
                println!("{}", detail.body);
            }
            if !detail.editable && !detail.preview.is_empty() {
                println!("--- preview ---");
                print!("{}", detail.preview);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(detail))?);
        }
    }

    Ok(())
}

/// Reads a replacement body from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_body_file(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read body from stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<S: KeyValueStore, E: EditorLauncher>(
    args: &EditArgs,
    memo: &mut Memo<S>,
    editor: &E,
) -> Result<()> {
    select_identified(memo, Some(&args.note))?;
    memo.enter_edit();

    let current = memo.repo().selected();
    let title = args.title.clone().unwrap_or_else(|| current.title().to_string());
    let body = match (&args.body, &args.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => read_body_file(path)?,
        (None, None) if args.title.is_none() => edit_text(editor, current.body())?,
        (None, None) => current.body().to_string(),
    };

    let note = memo.save_edit(title, body)?;
    println!("Saved: {} [{}]", note.title(), note.id().prefix());
    Ok(())
}

pub fn handle_edit(args: &EditArgs, dir: &Path, key: &str, config: &Config) -> Result<()> {
    let mut memo = open_memo(dir, key)?;
    handle_edit_impl(args, &mut memo, &RealEditor(config))
}
