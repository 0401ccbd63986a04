//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// memo - short markdown notes kept in a single JSON document
#[derive(Parser, Debug)]
#[command(name = "memo", version, about, long_about = None)]
pub struct Cli {
    /// Storage directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Document key the notes are stored under
    #[arg(short = 'k', long, global = true)]
    pub key: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, marking the selected one
    #[command(name = "ls")]
    List(ListArgs),

    /// Add a new note
    New(NewArgs),

    /// Show a note with its rendered preview
    Show(ShowArgs),

    /// Edit and save a note
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Export a note's markdown body as {title}.md
    Export(ExportArgs),

    /// Render the memo view as an HTML page
    Render(RenderArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Title to save instead of the default "new memo N"
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Markdown body to save
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    pub body: Option<String>,

    /// Open the body in your editor after creation
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID, ID prefix, 1-based position, or title (default: first note)
    pub note: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID, ID prefix, 1-based position, or title
    pub note: String,

    /// New title
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub title: Option<String>,

    /// New markdown body
    #[arg(
        short = 'b',
        long,
        allow_hyphen_values = true,
        conflicts_with = "body_file"
    )]
    pub body: Option<String>,

    /// Read the new body from a file ("-" for stdin)
    #[arg(short = 'F', long)]
    pub body_file: Option<PathBuf>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID, ID prefix, 1-based position, or title
    pub note: String,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Note ID, ID prefix, 1-based position, or title (default: first note)
    pub note: Option<String>,

    /// Directory to write {title}.md into (default: print to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format for the result message
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `render` command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Note to select before rendering (default: first note)
    pub note: Option<String>,

    /// Render the detail pane in edit mode
    #[arg(long)]
    pub edit_mode: bool,

    /// File to write the page to (default: print to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
