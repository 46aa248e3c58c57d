//! RSS feed generation from a list of posts.
//!
//! Posts come from a JSON array produced by the site generator:
//!
//! ```json
//! [{ "title": "Hello", "path": "/posts/hello", "date": "2024-06-15",
//!    "summary": "First post", "content": "<p>Hi</p>", "categories": ["intro"] }]
//! ```

pub mod rss;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub use self::rss::{build_channel, write_feed};

/// Feed filename, relative to the website root.
pub const FEED_FILE: &str = "rss.xml";

/// A post as listed in the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub title: String,
    /// Site path (`/posts/hello`) or absolute URL.
    pub path: String,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    pub date: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Rendered HTML body, used when `rss.fullText` is on.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub draft: bool,
}

/// Read feed entries from a JSON file.
pub fn load_entries(path: &Path) -> Result<Vec<FeedEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse feed entries from '{}'", path.display()))
}
