//! memo - short markdown notes kept in a single JSON document

pub mod cli;
pub mod domain;
pub mod infra;
pub mod render;
pub mod repo;
pub mod store;
pub mod view;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_delete, handle_edit, handle_export, handle_list, handle_new,
        handle_render, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = infra::init_logging(cli.verbose).context("failed to start logger")?;

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let dir = config.storage_dir(cli.dir.as_ref());
    let key = config.key(cli.key.as_deref());
    debug!("using key '{}' in {}", key, dir.display());

    match &cli.command {
        Command::List(args) => handle_list(args, &dir, &key),
        Command::New(args) => handle_new(args, &dir, &key, &config),
        Command::Show(args) => handle_show(args, &dir, &key),
        Command::Edit(args) => handle_edit(args, &dir, &key, &config),
        Command::Delete(args) => handle_delete(args, &dir, &key),
        Command::Export(args) => handle_export(args, &dir, &key),
        Command::Render(args) => handle_render(args, &dir, &key),
        Command::Completions(args) => handle_completions(args),
    }
}
