//! Social and navigation link entries.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A labelled link, rendered as a menu item or a social icon.
///
/// ```toml
/// navLinks = [{ name = "Archive", href = "/archive" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub name: String,
    pub href: String,
}

impl LinkConfig {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    /// Points at another origin (`https://…`, `mailto:…`).
    pub fn is_external(&self) -> bool {
        is_absolute_url(&self.href)
    }

    /// Path inside this site (`/about`).
    pub fn is_site_relative(&self) -> bool {
        self.href.starts_with('/') && !self.href.starts_with("//")
    }
}

/// Whether `href` parses as an absolute URL with a scheme.
pub fn is_absolute_url(href: &str) -> bool {
    url::Url::parse(href).is_ok()
}

/// Check every entry has a label and a well-formed href.
pub fn validate_links(links: &[LinkConfig], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        if link.name.trim().is_empty() {
            diag.error(field, format!("entry {} has an empty name", i + 1));
        }
        if link.href.trim().is_empty() {
            diag.error(field, format!("entry {} (`{}`) has an empty href", i + 1, link.name));
        } else if !link.is_external() && !link.is_site_relative() {
            diag.error_with_hint(
                field,
                format!(
                    "entry {} (`{}`): href '{}' is neither a URL nor a site path",
                    i + 1,
                    link.name,
                    link.href
                ),
                "use an absolute URL like https://github.com/me or a path like /about",
            );
        }
    }
}
