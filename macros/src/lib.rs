//! Proc macros for the typography site configuration.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site", rename_all = "camelCase")]
//! /// Site identity and navigation.
//! pub struct SiteInfoConfig {
//!     /// Site title shown in the header and browser tab.
//!     pub title: String,
//!
//!     /// Posts per listing page.
//!     #[config(inline_doc = "must be positive")]
//!     pub page_size: u32,
//!
//!     #[config(example = "{ shortname = \"my-blog\" }")]
//!     pub disqus: Option<DisqusConfig>,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.page_size -> FieldPath("site.pageSize")
//! // - SiteInfoConfig::template() -> TOML body with comments
//! // - SiteInfoConfig::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (required)
//! - `#[config(rename_all = "camelCase")]` - key casing, mirrors serde
//!
//! Field-level:
//! - `#[config(sub)]` - Nested config section, emitted with its own header
//! - `#[config(inline_doc = "x")]` - Trailing `# x` comment
//! - `#[config(example = "x")]` - Commented-out example value
//!
//! Fields without `example` are written with their `Default` value.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
