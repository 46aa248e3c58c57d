//! `[appearance]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [appearance]
//! theme = "system"
//! locale = "en-us"
//!
//! [appearance.colorsLight]
//! primary = "#2e405b"
//! background = "#ffffff"
//!
//! [appearance.colorsDark]
//! primary = "#FFFFFF"
//! background = "#232222"
//!
//! [appearance.fonts]
//! header = '"Source Han Serif SC",serif'
//! ui = '"Source Sans Pro",sans-serif'
//! ```

mod colors;
mod fonts;

pub use colors::{ColorsDarkConfig, ColorsLightConfig, Palette, is_css_color};
pub use fonts::{FontsConfig, font_families};

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::ConfigDiagnostics;

/// Color scheme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow `prefers-color-scheme`.
    #[default]
    System,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

/// Visual theme: color scheme, locale, palettes and fonts.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "appearance", rename_all = "camelCase")]
pub struct AppearanceConfig {
    #[config(inline_doc = "light | dark | system")]
    pub theme: ThemeMode,

    /// Language tag of the site content.
    #[config(inline_doc = "e.g. en-us, zh-cn")]
    pub locale: String,

    #[config(sub)]
    pub colors_light: ColorsLightConfig,

    #[config(sub)]
    pub colors_dark: ColorsDarkConfig,

    #[config(sub)]
    pub fonts: FontsConfig,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            locale: "en-us".into(),
            colors_light: ColorsLightConfig::default(),
            colors_dark: ColorsDarkConfig::default(),
            fonts: FontsConfig::default(),
        }
    }
}

impl AppearanceConfig {
    /// Locale in BCP 47 casing for `<html lang>` (`en-us` → `en-US`).
    pub fn html_lang(&self) -> String {
        self.locale
            .split(['-', '_'])
            .enumerate()
            .map(|(i, part)| match (i, part.len()) {
                (0, _) => part.to_ascii_lowercase(),
                (_, 2) => part.to_ascii_uppercase(),
                _ => part.to_string(),
            })
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        static RE_LOCALE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").unwrap()
        });

        if !RE_LOCALE.is_match(&self.locale) {
            diag.error_with_hint(
                Self::FIELDS.locale,
                format!("'{}' is not a language tag", self.locale),
                "use a tag like en-us or zh-cn",
            );
        }

        self.colors_light.validate(diag);
        self.colors_dark.validate(diag);
        self.fonts.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.appearance.theme, ThemeMode::System);
        assert_eq!(config.appearance.locale, "en-us");
        assert_eq!(config.appearance.colors_dark.primary, "#FFFFFF");
    }

    #[test]
    fn test_theme_mode() {
        let config = test_parse_config("[appearance]\ntheme = \"dark\"");
        assert_eq!(config.appearance.theme, ThemeMode::Dark);
        assert_eq!(config.appearance.theme.as_str(), "dark");

        let result = crate::config::SiteConfig::from_str("[appearance]\ntheme = \"sepia\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_palette_keeps_its_own_defaults() {
        let config = test_parse_config("[appearance.colorsDark]\nprimary = \"#eeeeee\"");
        assert_eq!(config.appearance.colors_dark.primary, "#eeeeee");
        assert_eq!(config.appearance.colors_dark.background, "#232222");
        assert_eq!(config.appearance.colors_light, ColorsLightConfig::default());
    }

    #[test]
    fn test_html_lang() {
        let mut appearance = AppearanceConfig::default();
        assert_eq!(appearance.html_lang(), "en-US");

        appearance.locale = "zh-Hans-cn".into();
        assert_eq!(appearance.html_lang(), "zh-Hans-CN");
    }

    #[test]
    fn test_validate_locale() {
        let mut appearance = AppearanceConfig::default();
        let mut diag = ConfigDiagnostics::new();
        appearance.validate(&mut diag);
        assert!(!diag.has_errors());

        appearance.locale = "english please".into();
        let mut diag = ConfigDiagnostics::new();
        appearance.validate(&mut diag);
        assert!(diag.has_error_for(AppearanceConfig::FIELDS.locale));
    }

    #[test]
    fn test_template_includes_palettes() {
        let template = AppearanceConfig::template_with_header();
        assert!(template.contains("[appearance]"));
        assert!(template.contains("theme = \"system\""));
        assert!(template.contains("[appearance.colorsLight]"));
        assert!(template.contains("[appearance.colorsDark]"));
        assert!(template.contains("[appearance.fonts]"));
    }
}
