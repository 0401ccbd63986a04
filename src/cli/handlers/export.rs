//! Handler for the `export` command.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_memo, select_identified};
use crate::cli::ExportArgs;
use crate::cli::output::{Output, OutputFormat, WriteResult};

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs, dir: &Path, key: &str) -> Result<()> {
    let mut memo = open_memo(dir, key)?;
    select_identified(&mut memo, args.note.as_deref())?;
    let download = memo.export_selected();

    let Some(output_dir) = &args.output else {
        print!("{}", download.contents);
        return Ok(());
    };

    let path = download
        .write_to(output_dir)
        .with_context(|| format!("failed to export to {}", output_dir.display()))?;
    let note = memo.repo().selected();

    match args.format {
        OutputFormat::Human => {
            println!("Exported '{}' to {}", note.title(), path.display());
        }
        OutputFormat::Json => {
            let result = WriteResult {
                id: note.id().to_string(),
                title: note.title().to_string(),
                path: path.display().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(result))?);
        }
    }

    Ok(())
}
