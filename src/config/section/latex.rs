//! `[latex]` math rendering toggle.

use macros::Config;
use serde::{Deserialize, Serialize};

/// KaTeX stylesheet version injected when math rendering is on.
pub const KATEX_VERSION: &str = "0.16.11";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "latex")]
pub struct LatexConfig {
    #[config(inline_doc = "render $...$ math with KaTeX")]
    pub katex: bool,
}

impl LatexConfig {
    /// KaTeX stylesheet URL, only when math rendering is enabled.
    pub fn katex_stylesheet(&self) -> Option<String> {
        self.katex.then(|| {
            format!("https://cdn.jsdelivr.net/npm/katex@{KATEX_VERSION}/dist/katex.min.css")
        })
    }
}
