//! Delete command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::{open_memo, select_identified};
use crate::cli::DeleteArgs;
use crate::view::{DeleteOutcome, Notice};

pub fn handle_delete(args: &DeleteArgs, dir: &Path, key: &str) -> Result<()> {
    let mut memo = open_memo(dir, key)?;
    select_identified(&mut memo, Some(&args.note))?;

    match memo.delete_note()? {
        DeleteOutcome::Deleted(note) => {
            println!("Deleted: {} [{}]", note.title(), note.id().prefix());
            let selected = memo.repo().selected();
            println!("Selected: {} [{}]", selected.title(), selected.id().prefix());
            Ok(())
        }
        DeleteOutcome::Rejected(Notice(message)) => bail!("{}", message),
    }
}
