//! `[analytics]` tracking IDs. An empty ID disables that tracker.

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "analytics", rename_all = "camelCase")]
pub struct AnalyticsConfig {
    #[config(inline_doc = "G-XXXXXXXXXX, empty to disable")]
    pub google_analytics_id: String,

    #[config(inline_doc = "website UUID, empty to disable")]
    pub umami_analytics_id: String,

    /// Umami tracker script, change for self-hosted instances.
    pub umami_script_url: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            google_analytics_id: String::new(),
            umami_analytics_id: String::new(),
            umami_script_url: "https://analytics.umami.is/script.js".into(),
        }
    }
}

impl AnalyticsConfig {
    /// Google Analytics measurement ID, `None` when disabled.
    pub fn google(&self) -> Option<&str> {
        non_empty(&self.google_analytics_id)
    }

    /// Umami website ID, `None` when disabled.
    pub fn umami(&self) -> Option<&str> {
        non_empty(&self.umami_analytics_id)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        static RE_GA: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^(?:G|UA|GT|AW)-[A-Z0-9-]+$").unwrap());

        if let Some(id) = self.google()
            && !RE_GA.is_match(id)
        {
            diag.error_with_hint(
                Self::FIELDS.google_analytics_id,
                format!("'{}' is not a Google Analytics ID", id),
                "measurement IDs look like G-XXXXXXXXXX",
            );
        }

        if self.umami().is_some() && url::Url::parse(&self.umami_script_url).is_err() {
            diag.error(
                Self::FIELDS.umami_script_url,
                format!("'{}' is not a URL", self.umami_script_url),
            );
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
