//! `[site]` section configuration.
//!
//! Identity, navigation and footer of the blog.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Notes and Ideas"
//! subtitle = "A web blog"
//! author = "Anshuman"
//! website = "https://asquare.site"
//! pageSize = 5
//! socialLinks = [{ name = "github", href = "https://github.com/iemAnshuman" }]
//! navLinks = [
//!     { name = "Posts", href = "/" },
//!     { name = "Archive", href = "/archive" },
//! ]
//! footer = ['© %year <a target="_blank" href="%website">%author</a>']
//! ```

mod footer;
mod links;

pub use footer::{FooterContext, Placeholder, substitute, unknown_placeholders};
pub use links::{LinkConfig, is_absolute_url, validate_links};

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::extract_url_path;

/// Site identity, navigation and footer.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "site", rename_all = "camelCase")]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Tagline shown under the title.
    pub subtitle: String,

    /// Author name, also substituted for `%author` in the footer.
    pub author: String,

    /// Site description for meta tags and the feed channel.
    pub description: String,

    /// Canonical site URL, substituted for `%website` in the footer.
    #[config(inline_doc = "http(s) URL, a path component becomes the base path")]
    pub website: String,

    /// Posts per listing page.
    #[config(inline_doc = "positive integer")]
    pub page_size: u32,

    /// Social profile links, rendered in order as icons.
    pub social_links: Vec<LinkConfig>,

    /// Navigation menu entries, rendered in order.
    pub nav_links: Vec<LinkConfig>,

    /// Footer lines. Placeholders: %year, %website, %author.
    pub footer: Vec<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Typography".into(),
            subtitle: "A minimal blog".into(),
            author: "Typography".into(),
            description: String::new(),
            website: "https://example.com/".into(),
            page_size: 6,
            social_links: Vec::new(),
            nav_links: vec![
                LinkConfig::new("Posts", "/"),
                LinkConfig::new("Archive", "/archive"),
                LinkConfig::new("Categories", "/categories"),
                LinkConfig::new("About", "/about"),
            ],
            footer: vec![r#"© %year <a target="_blank" href="%website">%author</a>"#.into()],
        }
    }
}

impl SiteInfoConfig {
    /// Footer lines with placeholders substituted for `year`.
    pub fn footer_lines(&self, year: i32) -> Vec<String> {
        let ctx = FooterContext {
            year,
            website: &self.website,
            author: &self.author,
        };
        self.footer.iter().map(|line| substitute(line, &ctx)).collect()
    }

    /// Path component of `website` as a prefix (`""` or `"/blog"`).
    pub fn base_path(&self) -> String {
        match extract_url_path(&self.website) {
            Some(path) if !path.is_empty() => format!("/{path}"),
            _ => String::new(),
        }
    }

    /// Resolve an href to an absolute URL on `website`.
    ///
    /// Absolute URLs pass through. Site paths are joined below the website's
    /// base path, so `/about` on `https://example.com/blog` becomes
    /// `https://example.com/blog/about`.
    pub fn absolute_url(&self, href: &str) -> Option<String> {
        if is_absolute_url(href) {
            return Some(href.to_string());
        }
        let mut base = url::Url::parse(&self.website).ok()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(href.trim_start_matches('/'))
            .ok()
            .map(String::from)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` and `author` are required
    /// - `website` is an http(s) URL with a host
    /// - `pageSize` is positive
    /// - link entries are labelled and well-formed
    /// - footer lines use only the documented placeholders
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is required",
                format!("set {}, e.g.: \"My Blog\"", Self::FIELDS.title),
            );
        }

        if self.author.trim().is_empty() {
            diag.error(Self::FIELDS.author, "author is required");
        }

        self.validate_website(diag);

        if self.page_size == 0 {
            diag.error_with_hint(
                Self::FIELDS.page_size,
                "page size must be a positive integer",
                "use a value like 5 or 10",
            );
        }

        validate_links(&self.social_links, Self::FIELDS.social_links, diag);
        validate_links(&self.nav_links, Self::FIELDS.nav_links, diag);

        for (i, line) in self.footer.iter().enumerate() {
            let unknown = unknown_placeholders(line);
            if !unknown.is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.footer,
                    format!("line {} uses unknown placeholder(s): {}", i + 1, unknown.join(", ")),
                    format!(
                        "supported placeholders: {}",
                        Placeholder::ALL.map(Placeholder::token).join(", ")
                    ),
                );
            }
        }
    }

    /// `website` must be a valid URL with an http(s) scheme and a host.
    fn validate_website(&self, diag: &mut ConfigDiagnostics) {
        if self.website.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.website,
                "website is required",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.website),
            );
            return;
        }

        match url::Url::parse(&self.website) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.website,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Typography");
        assert_eq!(config.site.page_size, 6);
        assert_eq!(config.site.nav_links.len(), 4);
        assert!(config.site.social_links.is_empty());
        assert_eq!(config.site.footer.len(), 1);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = test_parse_config(
            r#"[site]
pageSize = 5
socialLinks = [{ name = "github", href = "https://github.com/iemAnshuman" }]
navLinks = [{ name = "About", href = "/about" }]
"#,
        );
        assert_eq!(config.site.page_size, 5);
        assert_eq!(config.site.social_links[0].name, "github");
        assert_eq!(config.site.nav_links, vec![LinkConfig::new("About", "/about")]);
        // untouched keys keep their defaults
        assert_eq!(config.site.title, "Typography");
    }

    #[test]
    fn test_lists_replace_defaults() {
        let config = test_parse_config("[site]\nnavLinks = []\nfooter = []");
        assert!(config.site.nav_links.is_empty());
        assert!(config.site.footer.is_empty());
    }

    #[test]
    fn test_negative_page_size_rejected_by_parser() {
        let result = crate::config::SiteConfig::from_str("[site]\npageSize = -1");
        assert!(result.is_err());
    }

    #[test]
    fn test_footer_lines() {
        let mut site = SiteInfoConfig::default();
        site.website = "https://asquare.site".into();
        site.author = "Anshuman".into();
        assert_eq!(
            site.footer_lines(2024),
            vec![r#"© 2024 <a target="_blank" href="https://asquare.site">Anshuman</a>"#]
        );
    }

    #[test]
    fn test_base_path_and_absolute_url() {
        let mut site = SiteInfoConfig::default();
        site.website = "https://asquare.site".into();
        assert_eq!(site.base_path(), "");
        assert_eq!(
            site.absolute_url("/about").as_deref(),
            Some("https://asquare.site/about")
        );
        assert_eq!(site.absolute_url("/").as_deref(), Some("https://asquare.site/"));

        site.website = "https://me.github.io/blog".into();
        assert_eq!(site.base_path(), "/blog");
        assert_eq!(
            site.absolute_url("/posts/hello/").as_deref(),
            Some("https://me.github.io/blog/posts/hello/")
        );
        assert_eq!(
            site.absolute_url("https://x.com/me").as_deref(),
            Some("https://x.com/me")
        );
    }

    #[test]
    fn test_validate_defaults_ok() {
        let mut diag = ConfigDiagnostics::new();
        SiteInfoConfig::default().validate(&mut diag);
        assert!(!diag.has_errors(), "{diag}");
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let config = test_parse_config(
            r#"[site]
title = ""
author = " "
website = "ftp://files.example.com"
pageSize = 0
navLinks = [{ name = "About", href = "about" }]
footer = ["© %yr %author"]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);

        let fields = SiteInfoConfig::FIELDS;
        assert!(diag.has_error_for(fields.title));
        assert!(diag.has_error_for(fields.author));
        assert!(diag.has_error_for(fields.website));
        assert!(diag.has_error_for(fields.page_size));
        assert!(diag.has_error_for(fields.nav_links));
        assert!(diag.has_error_for(fields.footer));
        assert_eq!(diag.len(), 6);
    }

    #[test]
    fn test_footer_hint_lists_placeholders() {
        let mut site = SiteInfoConfig::default();
        site.footer = vec!["%yr".into()];
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);

        let hint = diag.errors()[0].hint.as_deref().unwrap();
        assert_eq!(hint, "supported placeholders: %year, %website, %author");
    }

    #[test]
    fn test_validate_invalid_url() {
        let mut site = SiteInfoConfig::default();
        site.website = "asquare.site".into();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.errors()[0].message.contains("invalid URL"));
    }

    #[test]
    fn test_field_paths_are_camel_case() {
        assert_eq!(SiteInfoConfig::FIELDS.page_size.as_str(), "site.pageSize");
        assert_eq!(SiteInfoConfig::FIELDS.nav_links.as_str(), "site.navLinks");
        assert_eq!(SiteInfoConfig::FIELDS.social_links.as_str(), "site.socialLinks");
    }
}
