//! Handler for the `render` command.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_memo, select_identified};
use crate::cli::RenderArgs;
use crate::view::render_page;

pub fn handle_render(args: &RenderArgs, dir: &Path, key: &str) -> Result<()> {
    let mut memo = open_memo(dir, key)?;
    select_identified(&mut memo, args.note.as_deref())?;
    if args.edit_mode {
        memo.enter_edit();
    }

    let screen = memo.settled_screen();
    let html = render_page(&screen).context("failed to render page")?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Rendered '{}' to {}", screen.detail.title, path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
