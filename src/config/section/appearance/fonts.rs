//! Font stacks for headings and UI text.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// CSS `font-family` stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "appearance.fonts")]
pub struct FontsConfig {
    /// Stack for titles and headings.
    pub header: String,
    /// Stack for body and interface text.
    pub ui: String,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            header: r#""HiraMinProN-W6","Source Han Serif CN","Source Han Serif SC","Source Han Serif TC",serif"#.into(),
            ui: r#""Source Sans Pro","Roboto","Helvetica","Helvetica Neue","Source Han Sans SC","Source Han Sans TC","PingFang SC","PingFang HK","PingFang TC",sans-serif"#.into(),
        }
    }
}

impl FontsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if font_families(&self.header).is_empty() {
            diag.error(Self::FIELDS.header, "font stack is empty");
        }
        if font_families(&self.ui).is_empty() {
            diag.error(Self::FIELDS.ui, "font stack is empty");
        }
    }
}

/// Split a font stack into family names, unquoted.
pub fn font_families(stack: &str) -> Vec<&str> {
    stack
        .split(',')
        .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|f| !f.is_empty())
        .collect()
}
