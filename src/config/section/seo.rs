//! `[seo]` section: values passed through to the page `<head>`.
//!
//! # Example
//!
//! ```toml
//! [seo]
//! twitter = "@justhuman567"
//! meta = [{ name = "google-site-verification", content = "abc123" }]
//! link = [{ rel = "me", href = "https://mastodon.social/@me" }]
//! ```

use macros::Config;
use regex::Regex;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::{fmt, sync::LazyLock};

use crate::config::ConfigDiagnostics;

/// Attributes of a single `<meta>` or `<link>` tag, in the order written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAttrs(Vec<(String, String)>);

impl TagAttrs {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for TagAttrs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TagAttrs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = TagAttrs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of string attributes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TagAttrs, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut attrs: Vec<(String, String)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((k, v)) = map.next_entry::<String, String>()? {
                    // a repeated key keeps its first position, last value
                    match attrs.iter_mut().find(|(name, _)| *name == k) {
                        Some((_, value)) => *value = v,
                        None => attrs.push((k, v)),
                    }
                }
                Ok(TagAttrs(attrs))
            }
        }

        deserializer.deserialize_map(AttrsVisitor)
    }
}

/// SEO metadata injected into every page head.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "seo")]
pub struct SeoConfig {
    /// Twitter/X handle for `twitter:site` and `twitter:creator`.
    #[config(inline_doc = "e.g. @handle, empty to omit")]
    pub twitter: String,

    /// Extra `<meta>` tags.
    #[config(example = "[{ name = \"google-site-verification\", content = \"...\" }]")]
    pub meta: Vec<TagAttrs>,

    /// Extra `<link>` tags.
    #[config(example = "[{ rel = \"me\", href = \"https://mastodon.social/@me\" }]")]
    pub link: Vec<TagAttrs>,
}

impl SeoConfig {
    /// Twitter handle if configured.
    pub fn twitter_handle(&self) -> Option<&str> {
        let handle = self.twitter.trim();
        (!handle.is_empty()).then_some(handle)
    }

    /// Validate SEO configuration.
    ///
    /// # Checks
    /// - `twitter` is empty or an `@handle`
    /// - meta entries carry `content` (or are a `charset` declaration)
    /// - link entries carry `rel` and `href`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        static RE_HANDLE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]{1,15}$").unwrap());

        if let Some(handle) = self.twitter_handle()
            && !RE_HANDLE.is_match(handle)
        {
            diag.error_with_hint(
                Self::FIELDS.twitter,
                format!("'{}' is not a twitter handle", handle),
                "use the @name form, e.g. \"@justhuman567\"",
            );
        }

        for (i, attrs) in self.meta.iter().enumerate() {
            if !attrs.contains_key("content") && !attrs.contains_key("charset") {
                diag.error(
                    Self::FIELDS.meta,
                    format!("entry {} has no `content` attribute", i + 1),
                );
            }
        }

        for (i, attrs) in self.link.iter().enumerate() {
            for required in ["rel", "href"] {
                if !attrs.contains_key(required) {
                    diag.error(
                        Self::FIELDS.link,
                        format!("entry {} has no `{}` attribute", i + 1, required),
                    );
                }
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
        assert!(config.seo.twitter_handle().is_none());
        assert!(config.seo.meta.is_empty());
        assert!(config.seo.link.is_empty());
    }

    #[test]
    fn test_tags_parse() {
        let config = test_parse_config(
            r#"[seo]
twitter = "@justhuman567"
meta = [{ name = "google-site-verification", content = "abc" }]
link = [{ rel = "me", href = "https://mastodon.social/@me" }]
"#,
        );
        assert_eq!(config.seo.twitter_handle(), Some("@justhuman567"));
        assert_eq!(config.seo.meta[0].get("content"), Some("abc"));
        assert_eq!(config.seo.link[0].get("rel"), Some("me"));

        let mut diag = ConfigDiagnostics::new();
        config.seo.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_attrs_keep_written_order() {
        let config = test_parse_config(
            r#"[seo]
meta = [{ property = "fb:app_id", content = "123", name = "x" }]
link = [{ rel = "preconnect", href = "https://fonts.example.com", crossorigin = "" }]
"#,
        );
        let meta: Vec<_> = config.seo.meta[0].iter().map(|(k, _)| k).collect();
        assert_eq!(meta, ["property", "content", "name"]);
        let link: Vec<_> = config.seo.link[0].iter().map(|(k, _)| k).collect();
        assert_eq!(link, ["rel", "href", "crossorigin"]);

        let json = serde_json::to_string(&config.seo.link[0]).unwrap();
        assert!(json.starts_with(r#"{"rel":"preconnect","href""#), "{json}");
    }

    #[test]
    fn test_non_string_attribute_rejected() {
        let err = crate::config::SiteConfig::from_str("[seo]\nmeta = [{ name = \"n\", content = 1 }]");
        assert!(err.is_err());
    }

    #[test]
    fn test_validate_problems() {
        let config = test_parse_config(
            r#"[seo]
twitter = "justhuman567"
meta = [{ name = "robots" }, { charset = "utf-8" }]
link = [{ rel = "icon" }]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.seo.validate(&mut diag);
        assert!(diag.has_error_for(SeoConfig::FIELDS.twitter));
        assert!(diag.has_error_for(SeoConfig::FIELDS.meta));
        assert!(diag.has_error_for(SeoConfig::FIELDS.link));
        assert_eq!(diag.len(), 3);
    }
}
