//! Typography - typed site configuration for the Typography blog theme.
//!
//! The configuration lives in `typography.toml`. Every key is optional and
//! falls back to a built-in default, so a file can override a single value.
//!
//! - [`config`]: the configuration record, loading and validation
//! - [`render`]: footer, navigation and `<head>` fragments
//! - [`feed`]: RSS channel built from a list of posts
//! - [`cli`]: the `typography` command

pub mod logger;

pub mod cli;
pub mod config;
pub mod feed;
pub mod render;
pub mod utils;

pub use config::{SiteConfig, cfg, init_config};
