//! List command handler.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::{open_memo, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat};

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub position: usize,
    pub id: String,
    pub title: String,
    pub active: bool,
    pub updated_at: i64,
}

pub fn handle_list(args: &ListArgs, dir: &Path, key: &str) -> Result<()> {
    let mut memo = open_memo(dir, key)?;
    let screen = memo.screen();
    let notes = memo.repo().notes();

    let listings: Vec<NoteListing> = screen
        .list
        .iter()
        .zip(notes)
        .enumerate()
        .map(|(i, (entry, note))| NoteListing {
            position: i + 1,
            id: entry.id.clone(),
            title: entry.title.clone(),
            active: entry.active,
            updated_at: note.updated_at().timestamp_millis(),
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            println!("{:>3}  {:<10}  {:<50}  {:>10}", "#", "ID", "Title", "Updated");
            println!(
                "{:>3}  {:<10}  {:<50}  {:>10}",
                "---",
                "----------",
                "--------------------------------------------------",
                "----------"
            );

            for (listing, note) in listings.iter().zip(notes) {
                let marker = if listing.active { "*" } else { " " };
                println!(
                    "{:>2}{}  {:<10}  {:<50}  {:>10}",
                    listing.position,
                    marker,
                    note.id().prefix(),
                    truncate_str(&listing.title, 50),
                    note.updated_at().format("%Y-%m-%d")
                );
            }

            println!();
            println!("{} memo(s)", listings.len());
        }
        OutputFormat::Json => {
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
