//! Fragments a site generator embeds into pages.
//!
//! | Module   | Output                                              |
//! |----------|-----------------------------------------------------|
//! | `footer` | footer lines with `%year`/`%website`/`%author` set  |
//! | `nav`    | navigation menu and social link lists, in order     |
//! | `head`   | meta/link/script/style tags for `<head>`            |
//!
//! Nothing here renders whole pages: each function returns a string or a
//! list of tag descriptors built purely from the configuration.

pub mod footer;
pub mod head;
pub mod nav;

pub use footer::{render_footer, render_footer_html};
pub use head::{HeadTag, head_tags, render_head, theme_style};
pub use nav::{NavItem, nav_items, render_nav, render_social, social_items};
