//! Footer rendering.

use crate::config::SiteInfoConfig;

/// Footer lines for `year`, in configured order.
///
/// Lines are HTML snippets and are emitted verbatim after substitution.
pub fn render_footer(site: &SiteInfoConfig, year: i32) -> Vec<String> {
    site.footer_lines(year)
}

/// Footer lines wrapped in a `<footer>` element, one `<p>` per line.
pub fn render_footer_html(site: &SiteInfoConfig, year: i32) -> String {
    let mut out = String::from("<footer>");
    for line in render_footer(site, year) {
        out.push_str("<p>");
        out.push_str(&line);
        out.push_str("</p>");
    }
    out.push_str("</footer>");
    out
}
