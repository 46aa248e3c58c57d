//! Navigation menu and social link lists.

use crate::config::{LinkConfig, SiteConfig};
use crate::utils::html::{escape, escape_attr};

/// A resolved link, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub name: &'a str,
    /// Site paths carry the website's base path (`/blog/about`).
    pub href: String,
    pub external: bool,
}

impl<'a> NavItem<'a> {
    fn resolve(link: &'a LinkConfig, base_path: &str) -> Self {
        let href = if link.is_site_relative() {
            format!("{}{}", base_path, link.href)
        } else {
            link.href.clone()
        };
        Self {
            name: &link.name,
            href,
            external: link.is_external(),
        }
    }

    fn to_html(&self) -> String {
        let target = if self.external {
            r#" target="_blank" rel="noopener""#
        } else {
            ""
        };
        format!(
            r#"<li><a href="{}"{}>{}</a></li>"#,
            escape_attr(&self.href),
            target,
            escape(self.name)
        )
    }
}

/// Navigation entries in configured order.
pub fn nav_items(config: &SiteConfig) -> Vec<NavItem<'_>> {
    resolve_all(&config.site.nav_links, &config.site.base_path())
}

/// Social entries in configured order.
pub fn social_items(config: &SiteConfig) -> Vec<NavItem<'_>> {
    resolve_all(&config.site.social_links, &config.site.base_path())
}

fn resolve_all<'a>(links: &'a [LinkConfig], base_path: &str) -> Vec<NavItem<'a>> {
    links
        .iter()
        .map(|link| NavItem::resolve(link, base_path))
        .collect()
}

/// `<ul class="nav">` with one item per navigation link.
pub fn render_nav(config: &SiteConfig) -> String {
    render_list("nav", &nav_items(config))
}

/// `<ul class="social">` with one item per social link.
pub fn render_social(config: &SiteConfig) -> String {
    render_list("social", &social_items(config))
}

fn render_list(class: &str, items: &[NavItem<'_>]) -> String {
    let mut out = format!(r#"<ul class="{class}">"#);
    for item in items {
        out.push_str(&item.to_html());
    }
    out.push_str("</ul>");
    out
}
