//! RSS 2.0 channel assembly.
//!
//! Items are ordered newest first. Entries with an unparsable date or marked
//! as drafts are left out. With `rss.fullText` on, each item also carries its
//! HTML body in `content:encoded`.

use super::FeedEntry;
use crate::{config::SiteConfig, debug, log, utils::date::DateTimeUtc};
use anyhow::{Result, anyhow};
use rss::{
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
    validation::Validate,
};
use rustc_hash::FxHashSet;
use std::{collections::BTreeMap, fs, path::Path};

const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// Build a validated channel for `entries`.
pub fn build_channel(config: &SiteConfig, entries: &[FeedEntry]) -> Result<Channel> {
    let site = &config.site;

    let mut dated: Vec<_> = entries
        .iter()
        .filter(|entry| !entry.draft)
        .filter_map(|entry| match DateTimeUtc::parse(&entry.date) {
            Some(date) => Some((date, entry)),
            None => {
                log!("warning"; "skipping '{}': invalid date '{}'", entry.title, entry.date);
                None
            }
        })
        .collect();
    // stable, so equal dates keep input order
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let items: Vec<_> = dated
        .iter()
        .map(|(date, entry)| entry_to_item(config, entry, *date))
        .collect();

    let description = if site.description.trim().is_empty() {
        &site.subtitle
    } else {
        &site.description
    };

    let mut namespaces = BTreeMap::new();
    if config.rss.full_text {
        namespaces.insert("content".to_string(), CONTENT_NAMESPACE.to_string());
    }

    let channel = ChannelBuilder::default()
        .title(&site.title)
        .link(&site.website)
        .description(description)
        .language(config.appearance.locale.clone())
        .generator("typography".to_string())
        .pub_date(dated.first().map(|(date, _)| date.to_rfc2822()))
        .namespaces(namespaces)
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel)
}

fn entry_to_item(config: &SiteConfig, entry: &FeedEntry, date: DateTimeUtc) -> Item {
    let link = config
        .site
        .absolute_url(&entry.path)
        .unwrap_or_else(|| entry.path.clone());

    let content = if config.rss.full_text {
        entry.content.clone()
    } else {
        None
    };

    let mut seen = FxHashSet::default();
    let categories = entry
        .categories
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| CategoryBuilder::default().name(name.as_str()).build())
        .collect::<Vec<_>>();

    ItemBuilder::default()
        .title(entry.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(entry.summary.clone())
        .content(content)
        .pub_date(date.to_rfc2822())
        .categories(categories)
        .build()
}

/// Build the feed and write it to `output`.
pub fn write_feed(config: &SiteConfig, entries: &[FeedEntry], output: &Path) -> Result<()> {
    let channel = build_channel(config, entries)?;
    debug!("rss"; "{} items, full text: {}", channel.items().len(), config.rss.full_text);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, channel.to_string())?;

    log!("rss"; "{}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SAMPLE_CONFIG, test_parse_config};
    use tempfile::TempDir;

    fn entry(title: &str, path: &str, date: &str) -> FeedEntry {
        FeedEntry {
            title: title.into(),
            path: path.into(),
            date: date.into(),
            summary: Some(format!("{title} summary")),
            content: Some(format!("<p>{title} body</p>")),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_text_includes_content() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let channel = build_channel(&config, &[entry("Hello", "/posts/hello", "2024-06-15")])
            .unwrap();

        let item = &channel.items()[0];
        assert_eq!(item.link(), Some("https://asquare.site/posts/hello"));
        assert_eq!(item.description(), Some("Hello summary"));
        assert_eq!(item.content(), Some("<p>Hello body</p>"));
        assert_eq!(item.pub_date(), Some("Sat, 15 Jun 2024 00:00:00 GMT"));
        assert!(channel.to_string().contains("content:encoded"));
    }

    #[test]
    fn test_summary_only_without_full_text() {
        let mut config = test_parse_config(SAMPLE_CONFIG);
        config.rss.full_text = false;
        let channel = build_channel(&config, &[entry("Hello", "/posts/hello", "2024-06-15")])
            .unwrap();

        let item = &channel.items()[0];
        assert_eq!(item.description(), Some("Hello summary"));
        assert!(item.content().is_none());
        assert!(channel.namespaces().is_empty());
        assert!(!channel.to_string().contains("content:encoded"));
    }

    #[test]
    fn test_newest_first_and_skips() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let mut draft = entry("Draft", "/posts/draft", "2025-01-01");
        draft.draft = true;
        let entries = [
            entry("Old", "/posts/old", "2023-01-01"),
            entry("Broken", "/posts/broken", "someday"),
            entry("New", "/posts/new", "2024-06-15T08:00:00Z"),
            draft,
        ];

        let channel = build_channel(&config, &entries).unwrap();
        let titles: Vec<_> = channel.items().iter().filter_map(Item::title).collect();
        assert_eq!(titles, ["New", "Old"]);
        assert_eq!(channel.pub_date(), Some("Sat, 15 Jun 2024 08:00:00 GMT"));
    }

    #[test]
    fn test_channel_metadata() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let channel = build_channel(&config, &[]).unwrap();

        assert_eq!(channel.title(), "Notes and Ideas");
        assert_eq!(channel.link(), "https://asquare.site");
        // empty description falls back to the subtitle
        assert_eq!(channel.description(), "A web blog");
        assert_eq!(channel.language(), Some("en-us"));
        assert!(channel.items().is_empty());
    }

    #[test]
    fn test_duplicate_categories_collapsed() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let mut post = entry("Tagged", "/posts/tagged", "2024-01-01");
        post.categories = vec!["rust".into(), "web".into(), "rust".into()];

        let channel = build_channel(&config, &[post]).unwrap();
        let names: Vec<_> = channel.items()[0]
            .categories()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, ["rust", "web"]);
    }

    #[test]
    fn test_write_feed() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("public/rss.xml");
        let config = test_parse_config(SAMPLE_CONFIG);

        write_feed(&config, &[entry("Hello", "/posts/hello", "2024-06-15")], &output).unwrap();
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<title>Hello</title>"));
        assert!(xml.contains("https://asquare.site/posts/hello"));
    }
}
