//! Footer template placeholders.
//!
//! Footer lines are HTML snippets with three placeholders:
//!
//! | Placeholder | Replaced by      |
//! |-------------|------------------|
//! | `%year`     | current year     |
//! | `%website`  | `site.website`   |
//! | `%author`   | `site.author`    |
//!
//! A placeholder is `%` followed by a run of ASCII letters, so `%yearly`
//! is an unknown placeholder rather than `%year` + `ly`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z]+)").unwrap());

/// Known footer placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Year,
    Website,
    Author,
}

impl Placeholder {
    pub const ALL: [Self; 3] = [Self::Year, Self::Website, Self::Author];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "year" => Some(Self::Year),
            "website" => Some(Self::Website),
            "author" => Some(Self::Author),
            _ => None,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Year => "%year",
            Self::Website => "%website",
            Self::Author => "%author",
        }
    }
}

/// Values substituted into footer templates.
#[derive(Debug, Clone, Copy)]
pub struct FooterContext<'a> {
    pub year: i32,
    pub website: &'a str,
    pub author: &'a str,
}

/// Substitute every known placeholder in one pass.
///
/// Substituted values are never re-scanned, and unknown placeholders are
/// left untouched.
pub fn substitute(template: &str, ctx: &FooterContext<'_>) -> String {
    RE_PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            match Placeholder::from_name(&caps[1]) {
                Some(Placeholder::Year) => ctx.year.to_string(),
                Some(Placeholder::Website) => ctx.website.to_string(),
                Some(Placeholder::Author) => ctx.author.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Placeholders in `template` that are not one of the documented three.
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    RE_PLACEHOLDER
        .captures_iter(template)
        .filter(|caps| Placeholder::from_name(&caps[1]).is_none())
        .map(|caps| caps[0].to_string())
        .collect()
}
