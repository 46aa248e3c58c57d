//! `[rss]` feed generation settings.

use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "rss", rename_all = "camelCase")]
pub struct RssConfig {
    #[config(inline_doc = "full post HTML in the feed, false for summaries only")]
    pub full_text: bool,
}

impl Default for RssConfig {
    fn default() -> Self {
        Self { full_text: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        assert!(test_parse_config("").rss.full_text);
    }

    #[test]
    fn test_full_text_disabled() {
        let config = test_parse_config("[rss]\nfullText = false");
        assert!(!config.rss.full_text);
    }
}
