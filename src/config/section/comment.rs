//! `[comment]` widget providers.
//!
//! Every provider is an optional table; a missing table disables it.
//!
//! ```toml
//! [comment.disqus]
//! shortname = "typography-astro"
//!
//! [comment.giscus]
//! repo = "me/blog"
//! repoId = "R_kgDO..."
//! category = "Announcements"
//! categoryId = "DIC_kwDO..."
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "comment")]
pub struct CommentConfig {
    #[config(example = "{ shortname = \"my-blog\" }")]
    pub disqus: Option<DisqusConfig>,

    #[config(example = "{ repo = \"me/blog\", repoId = \"\", category = \"\", categoryId = \"\" }")]
    pub giscus: Option<GiscusConfig>,

    #[config(example = "{ envId = \"https://twikoo.example.com\" }")]
    pub twikoo: Option<TwikooConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisqusConfig {
    pub shortname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiscusConfig {
    /// `owner/name` of the discussions repository.
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    #[serde(default = "GiscusConfig::default_mapping")]
    pub mapping: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl GiscusConfig {
    fn default_mapping() -> String {
        "pathname".into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwikooConfig {
    /// Environment ID or self-hosted endpoint.
    pub env_id: String,
}

/// An enabled comment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentProvider<'a> {
    Disqus(&'a DisqusConfig),
    Giscus(&'a GiscusConfig),
    Twikoo(&'a TwikooConfig),
}

impl CommentProvider<'_> {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Disqus(_) => "disqus",
            Self::Giscus(_) => "giscus",
            Self::Twikoo(_) => "twikoo",
        }
    }
}

impl CommentConfig {
    /// Enabled providers in fixed order: disqus, giscus, twikoo.
    pub fn active(&self) -> Vec<CommentProvider<'_>> {
        let mut providers = Vec::new();
        if let Some(disqus) = &self.disqus {
            providers.push(CommentProvider::Disqus(disqus));
        }
        if let Some(giscus) = &self.giscus {
            providers.push(CommentProvider::Giscus(giscus));
        }
        if let Some(twikoo) = &self.twikoo {
            providers.push(CommentProvider::Twikoo(twikoo));
        }
        providers
    }

    pub fn is_enabled(&self) -> bool {
        self.disqus.is_some() || self.giscus.is_some() || self.twikoo.is_some()
    }

    /// Enabled providers must carry their required keys.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(disqus) = &self.disqus
            && disqus.shortname.trim().is_empty()
        {
            diag.error(Self::FIELDS.disqus, "shortname is empty");
        }

        if let Some(giscus) = &self.giscus {
            if !is_repo_slug(&giscus.repo) {
                diag.error_with_hint(
                    Self::FIELDS.giscus,
                    format!("repo '{}' is not in owner/name form", giscus.repo),
                    "e.g. repo = \"me/blog\"",
                );
            }
            for (key, value) in [("repoId", &giscus.repo_id), ("categoryId", &giscus.category_id)]
            {
                if value.trim().is_empty() {
                    diag.error(Self::FIELDS.giscus, format!("{key} is empty"));
                }
            }
        }

        if let Some(twikoo) = &self.twikoo
            && twikoo.env_id.trim().is_empty()
        {
            diag.error(Self::FIELDS.twikoo, "envId is empty");
        }
    }
}

fn is_repo_slug(repo: &str) -> bool {
    matches!(repo.split_once('/'), Some((owner, name))
        if !owner.is_empty() && !name.is_empty() && !name.contains('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_all_disabled_by_default() {
        let config = test_parse_config("[comment]");
        assert!(!config.comment.is_enabled());
        assert!(config.comment.active().is_empty());
    }

    #[test]
    fn test_active_order() {
        let config = test_parse_config(
            r#"[comment.twikoo]
envId = "https://twikoo.example.com"

[comment.disqus]
shortname = "typography-astro"
"#,
        );
        let names: Vec<_> = config.comment.active().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["disqus", "twikoo"]);
    }

    #[test]
    fn test_giscus_defaults_and_validation() {
        let config = test_parse_config(
            r#"[comment.giscus]
repo = "me/blog"
repoId = "R_1"
category = "General"
categoryId = "DIC_1"
"#,
        );
        let giscus = config.comment.giscus.as_ref().unwrap();
        assert_eq!(giscus.mapping, "pathname");
        assert!(giscus.lang.is_none());

        let mut diag = ConfigDiagnostics::new();
        config.comment.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_missing_keys() {
        let config = test_parse_config(
            r#"[comment.disqus]
shortname = ""

[comment.giscus]
repo = "blog"
repoId = ""
category = "General"
categoryId = "DIC_1"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.comment.validate(&mut diag);
        assert!(diag.has_error_for(CommentConfig::FIELDS.disqus));
        assert!(diag.has_error_for(CommentConfig::FIELDS.giscus));
        assert_eq!(diag.len(), 3);
    }
}
