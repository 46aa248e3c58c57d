//! Light and dark color palettes.

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Borrowed view over either palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<'a> {
    pub primary: &'a str,
    pub background: &'a str,
}

/// Palette used in light mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "appearance.colorsLight")]
pub struct ColorsLightConfig {
    /// Accent and text color.
    pub primary: String,
    /// Page background.
    pub background: String,
}

impl Default for ColorsLightConfig {
    fn default() -> Self {
        Self {
            primary: "#2e405b".into(),
            background: "#ffffff".into(),
        }
    }
}

impl ColorsLightConfig {
    pub fn palette(&self) -> Palette<'_> {
        Palette {
            primary: &self.primary,
            background: &self.background,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_color(&self.primary, Self::FIELDS.primary, diag);
        validate_color(&self.background, Self::FIELDS.background, diag);
    }
}

/// Palette used in dark mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "appearance.colorsDark")]
pub struct ColorsDarkConfig {
    /// Accent and text color.
    pub primary: String,
    /// Page background.
    pub background: String,
}

impl Default for ColorsDarkConfig {
    fn default() -> Self {
        Self {
            primary: "#FFFFFF".into(),
            background: "#232222".into(),
        }
    }
}

impl ColorsDarkConfig {
    pub fn palette(&self) -> Palette<'_> {
        Palette {
            primary: &self.primary,
            background: &self.background,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_color(&self.primary, Self::FIELDS.primary, diag);
        validate_color(&self.background, Self::FIELDS.background, diag);
    }
}

/// Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), named, or functional CSS color.
pub fn is_css_color(value: &str) -> bool {
    static RE_HEX: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^#(?:[0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap()
    });
    static RE_NAMED_OR_FN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:\([^()]+\))?$").unwrap());

    let value = value.trim();
    if value.starts_with('#') {
        RE_HEX.is_match(value)
    } else {
        RE_NAMED_OR_FN.is_match(value)
    }
}

fn validate_color(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !is_css_color(value) {
        diag.error_with_hint(
            field,
            format!("'{}' is not a CSS color", value),
            "use a hex color like #2e405b",
        );
    }
}
