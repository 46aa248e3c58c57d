//! Configuration section definitions.
//!
//! Each module corresponds to a section in `typography.toml`:
//!
//! | Module       | TOML Section     | Purpose                                |
//! |--------------|------------------|----------------------------------------|
//! | `site`       | `[site]`         | Identity, links, footer                |
//! | `appearance` | `[appearance]`   | Theme mode, locale, colors, fonts      |
//! | `seo`        | `[seo]`          | Head meta/link tags, twitter handle    |
//! | `rss`        | `[rss]`          | Feed full text toggle                  |
//! | `comment`    | `[comment]`      | Comment widget providers               |
//! | `analytics`  | `[analytics]`    | Tracking IDs                           |
//! | `latex`      | `[latex]`        | KaTeX toggle                           |

mod analytics;
pub mod appearance;
mod comment;
mod latex;
mod rss;
mod seo;
pub mod site;

pub use analytics::AnalyticsConfig;
pub use appearance::{
    AppearanceConfig, ColorsDarkConfig, ColorsLightConfig, FontsConfig, Palette, ThemeMode,
};
pub use comment::{CommentConfig, CommentProvider, DisqusConfig, GiscusConfig, TwikooConfig};
pub use latex::{KATEX_VERSION, LatexConfig};
pub use rss::RssConfig;
pub use seo::{SeoConfig, TagAttrs};
pub use site::{LinkConfig, SiteInfoConfig};
