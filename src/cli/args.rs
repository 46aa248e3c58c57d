//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Typography blog theme configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented default config file
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the config file and report problems
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown keys as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective config with defaults filled in
    Show {
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,

        /// Pretty-print output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print footer lines with placeholders substituted
    Footer {
        /// Year for `%year` (default: current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Print `<head>` tags for the site
    Head,

    /// Print navigation and social link lists
    Nav,

    /// Generate an RSS feed from a JSON list of posts
    #[command(visible_alias = "f")]
    Feed {
        #[command(flatten)]
        args: FeedArgs,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Toml,
    Json,
}

/// Feed command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct FeedArgs {
    /// JSON file with an array of posts
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Where to write the feed (default: rss.xml)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override `rss.fullText`
    #[arg(long = "full-text", action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub full_text: Option<bool>,
}

impl Cli {
    /// Config path with `~` expanded.
    pub fn config_path(&self) -> PathBuf {
        let raw = self.config.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&raw).into_owned())
    }
}
