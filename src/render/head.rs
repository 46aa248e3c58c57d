//! `<head>` content derived from the configuration.
//!
//! Injected elements, in order: title, color-scheme and description meta,
//! Open Graph and Twitter Card defaults, user `[seo]` meta and link tags,
//! the feed link, the KaTeX stylesheet, the theme style block, and analytics
//! scripts. Trackers with an empty ID produce no tags at all.

use std::fmt;

use crate::config::{AppearanceConfig, SiteConfig, ThemeMode, section::Palette};
use crate::feed::FEED_FILE;
use crate::utils::html::{escape, escape_attr, is_void_element};

/// One element destined for `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub tag: &'static str,
    /// Attributes in emission order. An empty value renders as a bare name.
    pub attrs: Vec<(String, String)>,
    /// Raw text content for `title`, `script` and `style`.
    pub body: Option<String>,
}

impl HeadTag {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            body: None,
        }
    }

    pub fn meta(name: &str, content: &str) -> Self {
        Self::new("meta").attr("name", name).attr("content", content)
    }

    /// Open Graph tags use `property` instead of `name`.
    pub fn property(property: &str, content: &str) -> Self {
        Self::new("meta")
            .attr("property", property)
            .attr("content", content)
    }

    pub fn link(rel: &str, href: &str) -> Self {
        Self::new("link").attr("rel", rel).attr("href", href)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for HeadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, r#" {}="{}""#, name, escape_attr(value))?;
            }
        }
        f.write_str(">")?;

        if is_void_element(self.tag) {
            return Ok(());
        }
        match (self.tag, &self.body) {
            ("title", Some(body)) => f.write_str(&escape(body))?,
            (_, Some(body)) => f.write_str(body)?,
            (_, None) => {}
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Every head element for the site, in emission order.
pub fn head_tags(config: &SiteConfig) -> Vec<HeadTag> {
    let site = &config.site;
    let mut tags = Vec::new();

    if !site.title.is_empty() {
        tags.push(HeadTag::new("title").body(&site.title));
    }
    tags.push(HeadTag::meta(
        "color-scheme",
        color_scheme(config.appearance.theme),
    ));
    if !site.description.is_empty() {
        tags.push(HeadTag::meta("description", &site.description));
    }

    // Open Graph / Twitter Card defaults
    tags.push(HeadTag::property("og:type", "website"));
    tags.push(HeadTag::property("og:site_name", &site.title));
    tags.push(HeadTag::property(
        "og:locale",
        &config.appearance.html_lang().replace('-', "_"),
    ));
    tags.push(HeadTag::meta("twitter:card", "summary_large_image"));
    if let Some(handle) = config.seo.twitter_handle() {
        tags.push(HeadTag::meta("twitter:site", handle));
        tags.push(HeadTag::meta("twitter:creator", handle));
    }

    for attrs in &config.seo.meta {
        tags.push(from_attrs("meta", attrs));
    }
    for attrs in &config.seo.link {
        tags.push(from_attrs("link", attrs));
    }

    if let Some(href) = site.absolute_url(FEED_FILE) {
        tags.push(
            HeadTag::link("alternate", &href)
                .attr("type", "application/rss+xml")
                .attr("title", &site.title),
        );
    }

    if let Some(href) = config.latex.katex_stylesheet() {
        tags.push(HeadTag::link("stylesheet", &href).attr("crossorigin", "anonymous"));
    }

    tags.push(HeadTag::new("style").body(theme_style(&config.appearance)));

    if let Some(id) = config.analytics.google() {
        tags.push(
            HeadTag::new("script")
                .attr("async", "")
                .attr(
                    "src",
                    format!("https://www.googletagmanager.com/gtag/js?id={id}"),
                )
                .body(""),
        );
        tags.push(HeadTag::new("script").body(gtag_snippet(id)));
    }
    if let Some(id) = config.analytics.umami() {
        tags.push(
            HeadTag::new("script")
                .attr("defer", "")
                .attr("src", &config.analytics.umami_script_url)
                .attr("data-website-id", id),
        );
    }

    tags
}

/// Head elements joined into one HTML fragment, one tag per line.
pub fn render_head(config: &SiteConfig) -> String {
    head_tags(config)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

const fn color_scheme(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
        ThemeMode::System => "light dark",
    }
}

fn from_attrs(tag: &'static str, attrs: &crate::config::section::TagAttrs) -> HeadTag {
    attrs
        .iter()
        .fold(HeadTag::new(tag), |tag, (name, value)| tag.attr(name, value))
}

fn gtag_snippet(id: &str) -> String {
    // JSON string literal doubles as a JS string literal
    let id = serde_json::to_string(id).unwrap_or_default();
    format!(
        "window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}gtag('js',new Date());gtag('config',{id});"
    )
}

/// CSS custom properties for palettes and fonts.
///
/// `light` and `dark` modes pin one palette on `:root`. `system` starts from
/// the light palette, follows `prefers-color-scheme`, and honours an explicit
/// `.dark` class on the root element.
pub fn theme_style(appearance: &AppearanceConfig) -> String {
    let light = appearance.colors_light.palette();
    let dark = appearance.colors_dark.palette();
    let fonts = format!(
        "--font-header:{};--font-ui:{};",
        css_value(&appearance.fonts.header),
        css_value(&appearance.fonts.ui)
    );

    match appearance.theme {
        ThemeMode::Light => format!(":root{{{}{fonts}}}", palette_vars(light)),
        ThemeMode::Dark => format!(":root{{{}{fonts}}}", palette_vars(dark)),
        ThemeMode::System => format!(
            ":root{{{}{fonts}}}@media (prefers-color-scheme: dark){{:root{{{}}}}}:root.dark{{{}}}",
            palette_vars(light),
            palette_vars(dark),
            palette_vars(dark)
        ),
    }
}

fn palette_vars(palette: Palette<'_>) -> String {
    format!(
        "--color-primary:{};--color-background:{};",
        css_value(palette.primary),
        css_value(palette.background)
    )
}

/// Keep a value from closing the `<style>` element.
fn css_value(value: &str) -> String {
    value.trim().replace('<', "\\3c ")
}
