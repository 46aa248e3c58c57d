//! Config initialization.
//!
//! `typography init [DIR]` writes a commented default config into `DIR`
//! (or the current directory). `--dry` prints it instead.

mod config;

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use std::path::Path;

pub use config::{generate_config_template, write_config};

/// Write a default config for a new or existing site directory.
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(cli: &Cli, name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    let path = write_config(&root.join(cli.config_path()))?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
