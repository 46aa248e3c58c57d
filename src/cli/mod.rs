//! Command-line interface module.

mod args;
pub mod check;
pub mod feed;
pub mod init;
pub mod print;
pub mod show;

pub use args::{Cli, Commands, FeedArgs, ShowFormat};

use crate::config::{SiteConfig, init_config};
use anyhow::Result;

/// Dispatch a parsed command line.
///
/// `init` runs without a config; every other command loads and validates
/// one first, then reads it back through [`crate::config::cfg`].
pub fn run(cli: &Cli) -> Result<()> {
    if let Commands::Init { name, dry } = &cli.command {
        return init::new_site(cli, name.as_deref(), *dry);
    }

    init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Check { strict } => check::check_config(*strict),
        Commands::Show { format, pretty } => show::show_config(*format, *pretty),
        Commands::Footer { year } => print::print_footer(*year),
        Commands::Head => print::print_head(),
        Commands::Nav => print::print_nav(),
        Commands::Feed { args } => feed::run_feed(args),
    }
}
