//! Configuration file generation.
//!
//! Creates a commented `typography.toml` listing every key with its default.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::section::{
    AnalyticsConfig, AppearanceConfig, CommentConfig, LatexConfig, RssConfig, SeoConfig,
    SiteInfoConfig,
};

/// Generate typography.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Typography configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Every key is optional, omitted keys keep the defaults shown here.\n\n");

    let sections = [
        SiteInfoConfig::template_with_header(),
        AppearanceConfig::template_with_header(),
        SeoConfig::template_with_header(),
        RssConfig::template_with_header(),
        CommentConfig::template_with_header(),
        AnalyticsConfig::template_with_header(),
        LatexConfig::template_with_header(),
    ];
    out.push_str(&sections.join("\n"));

    out
}

/// Write the default config to `path`, refusing to replace an existing file.
pub fn write_config(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Edit it directly or remove it to start over.",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, SiteConfig, ThemeMode};
    use tempfile::TempDir;

    #[test]
    fn test_template_has_every_section() {
        let template = generate_config_template();
        for header in [
            "[site]",
            "[appearance]",
            "[appearance.colorsLight]",
            "[appearance.colorsDark]",
            "[appearance.fonts]",
            "[seo]",
            "[rss]",
            "[comment]",
            "[analytics]",
            "[latex]",
        ] {
            assert!(template.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let (config, ignored) = SiteConfig::parse_with_ignored(&generate_config_template()).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");

        let defaults = SiteConfig::default();
        assert_eq!(config.site.title, defaults.site.title);
        assert_eq!(config.site.nav_links, defaults.site.nav_links);
        assert_eq!(config.site.footer, defaults.site.footer);
        assert_eq!(config.appearance.theme, ThemeMode::System);
        assert_eq!(config.appearance.colors_dark, defaults.appearance.colors_dark);
        assert_eq!(config.appearance.fonts, defaults.appearance.fonts);
        assert!(config.rss.full_text);
        assert!(!config.comment.is_enabled());
        assert!(config.analytics.google().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_lines_per_field_kind() {
        // commented examples for optional providers, defaults for the rest
        let comment = CommentConfig::template();
        assert!(comment.contains("# disqus = { shortname = \"my-blog\" }\n"));
        assert!(!comment.lines().any(|l| l.starts_with("disqus")));

        let rss = RssConfig::template();
        assert!(rss.contains("fullText = true"));

        let appearance = AppearanceConfig::template_with_header();
        assert!(appearance.contains("# CSS `font-family` stacks.\n[appearance.fonts]\n"));
        assert_eq!(SeoConfig::TEMPLATE_SECTION, "seo");
        assert_eq!(SiteInfoConfig::FIELDS.page_size.as_str(), "site.pageSize");
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog").join(CONFIG_FILE);
        write_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Typography configuration file"));
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\ntitle = \"Mine\"\n").unwrap();

        assert!(write_config(&path).is_err());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[site]\ntitle = \"Mine\"\n"
        );
    }
}
