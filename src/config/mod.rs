//! Site configuration management for `typography.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site] identity, links, footer placeholders
//! │   ├── appearance/# [appearance] theme, locale, palettes, fonts
//! │   ├── seo        # [seo]
//! │   ├── rss        # [rss]
//! │   ├── comment    # [comment]
//! │   ├── analytics  # [analytics]
//! │   └── latex      # [latex]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every key is optional: the file is a partial override, and anything it
//! leaves out falls back to the built-in default of the innermost section.
//! Lists replace the default list rather than extending it.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AnalyticsConfig, AppearanceConfig, CommentConfig, CommentProvider, LatexConfig, LinkConfig,
    RssConfig, SeoConfig, SiteInfoConfig, ThemeMode,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{cli::Cli, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "typography.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing typography.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Keys present in the file that no section recognizes (internal use only)
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    /// Identity, navigation and footer
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Theme mode, locale, palettes and fonts
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Head metadata
    #[serde(default)]
    pub seo: SeoConfig,

    /// Feed behaviour
    #[serde(default)]
    pub rss: RssConfig,

    /// Comment widgets
    #[serde(default)]
    pub comment: CommentConfig,

    /// Tracking IDs
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Math rendering
    #[serde(default)]
    pub latex: LatexConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file, warns about unknown
    /// keys and validates the merged result.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_name = cli.config_path();

        let Some(path) = find_config_file(&config_name, &cwd) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run `typography init` to create one",
                config_name.display()
            )));
        };
        crate::debug!("config"; "using {}", path.display());

        let config = Self::from_path(&path)?;
        if !config.unknown_fields.is_empty() {
            Self::print_unknown_fields_warning(&config.unknown_fields, &path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;

        config.config_path = path.to_path_buf();
        config.unknown_fields = ignored;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Current year substituted into footer lines.
    pub fn footer_lines(&self, year: i32) -> Vec<String> {
        self.site.footer_lines(year)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for every section without printing them.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.appearance.validate(&mut diag);
        self.seo.validate(&mut diag);
        self.comment.validate(&mut diag);
        self.analytics.validate(&mut diag);

        if self.site.description.trim().is_empty() && self.site.subtitle.trim().is_empty() {
            diag.warn(
                SiteInfoConfig::FIELDS.description,
                "empty description and subtitle, the feed channel will have no summary",
            );
        }

        diag
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a partial config.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The blog configuration this theme was first set up with.
#[cfg(test)]
pub const SAMPLE_CONFIG: &str = include_str!("../../demos/typography.toml");

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_complete() {
        let config = SiteConfig::default();
        let diag = config.diagnostics();
        assert!(!diag.has_errors(), "{diag}");
        assert!(config.config_path.as_os_str().is_empty());
    }

    #[test]
    fn test_empty_file_merges_to_defaults() {
        let config = test_parse_config("");
        let defaults = SiteConfig::default();
        assert_eq!(config.site.title, defaults.site.title);
        assert_eq!(config.appearance.fonts, defaults.appearance.fonts);
        assert_eq!(config.rss.full_text, defaults.rss.full_text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_config() {
        let config = test_parse_config(SAMPLE_CONFIG);

        assert_eq!(config.site.title, "Notes and Ideas");
        assert_eq!(config.site.page_size, 5);
        assert_eq!(config.site.social_links.len(), 2);
        assert_eq!(config.site.nav_links[2], LinkConfig::new("About", "/about"));
        assert_eq!(config.appearance.theme, ThemeMode::System);
        assert_eq!(config.seo.twitter_handle(), Some("@justhuman567"));
        assert!(config.rss.full_text);
        assert!(!config.comment.is_enabled());
        assert!(config.analytics.google().is_none());
        assert!(config.latex.katex);

        let diag = config.diagnostics();
        assert!(!diag.has_errors(), "{diag}");
        // subtitle stands in for the empty description
        assert!(diag.warnings().is_empty(), "{diag}");
    }

    #[test]
    fn test_sample_file_loads_from_disk() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(CONFIG_FILE);
        let config = SiteConfig::from_path(&path).unwrap();

        assert!(config.unknown_fields.is_empty(), "{:?}", config.unknown_fields);
        assert_eq!(config.config_path, path);
        assert_eq!(config.site.website, "https://asquare.site");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warns_without_any_channel_summary() {
        let config = test_parse_config("[site]\ndescription = \"\"\nsubtitle = \" \"\n[rss]\nfullText = false");
        let diag = config.diagnostics();
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, SiteInfoConfig::FIELDS.description);

        let config = test_parse_config("[site]\ndescription = \"\"\nsubtitle = \"A web blog\"");
        assert!(config.diagnostics().warnings().is_empty());
    }

    #[test]
    fn test_partial_override_validates() {
        let config = test_parse_config("[site]\ntitle = \"Only a title\"\n[latex]\nkatex = true");
        assert_eq!(config.site.title, "Only a title");
        assert_eq!(config.site.page_size, SiteInfoConfig::default().page_size);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_across_sections() {
        let config = test_parse_config(
            "[site]\npageSize = 0\n[appearance]\nlocale = \"?\"\n[analytics]\ngoogleAnalyticsId = \"nope\"",
        );
        let diag = config.diagnostics();
        assert_eq!(diag.len(), 3);

        let err = config.validate().unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\npage_size = 3\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f == "site.page_size"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(SAMPLE_CONFIG).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\ntitle = \"From Disk\"\ntypo = 1").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.title, "From Disk");
        assert_eq!(config.config_path, path);
        assert_eq!(config.unknown_fields, vec!["site.typo".to_string()]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_serialize_keeps_camel_case_schema() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert!(json["site"]["pageSize"].is_u64());
        assert!(json["site"]["navLinks"].is_array());
        assert!(json["appearance"]["colorsLight"]["primary"].is_string());
        assert!(json["rss"]["fullText"].is_boolean());
        assert!(json["analytics"]["googleAnalyticsId"].is_string());
        assert!(json.get("config_path").is_none());
    }
}
