//! `typography feed`: build `rss.xml` from a JSON list of posts.

use anyhow::Result;
use std::path::PathBuf;

use super::args::FeedArgs;
use crate::config::{SiteConfig, cfg};
use crate::feed::{FEED_FILE, load_entries, write_feed};

pub fn run_feed(args: &FeedArgs) -> Result<()> {
    generate_feed(&cfg(), args)
}

fn generate_feed(config: &SiteConfig, args: &FeedArgs) -> Result<()> {
    let entries = load_entries(&args.input)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(FEED_FILE));

    match args.full_text {
        Some(full_text) if full_text != config.rss.full_text => {
            let mut config = config.clone();
            config.rss.full_text = full_text;
            write_feed(&config, &entries, &output)
        }
        _ => write_feed(config, &entries, &output),
    }
}
