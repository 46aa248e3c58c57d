//! `typography check`: report on a config that already loaded and validated.

use anyhow::{Result, bail};

use crate::config::{ConfigError, SiteConfig, cfg};
use crate::{debug, debug_do, log};

/// Report the config status, failing on unknown keys when `strict`.
///
/// Validation errors never reach this point: loading already rejected them.
pub fn check_config(strict: bool) -> Result<()> {
    report(&cfg(), strict)
}

fn report(config: &SiteConfig, strict: bool) -> Result<()> {
    if strict && !config.unknown_fields.is_empty() {
        bail!(ConfigError::Validation(format!(
            "unknown fields: {}",
            config.unknown_fields.join(", ")
        )));
    }

    let warnings = config.diagnostics().warnings().len() + config.unknown_fields.len();
    let name = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());

    match warnings {
        0 => log!("check"; "{} is valid", name),
        1 => log!("check"; "{} is valid, 1 warning", name),
        n => log!("check"; "{} is valid, {} warnings", name, n),
    }

    debug_do! {
        let providers: Vec<_> = config.comment.active().iter().map(|p| p.name()).collect();
        let comments = if providers.is_empty() { "off".to_string() } else { providers.join(", ") };
        debug!("check"; "theme: {}, locale: {}", config.appearance.theme.as_str(), config.appearance.locale);
        debug!("check"; "nav links: {}, social links: {}", config.site.nav_links.len(), config.site.social_links.len());
        debug!("check"; "comments: {}", comments);
        debug!("check"; "google analytics: {}, umami: {}", config.analytics.google().is_some(), config.analytics.umami().is_some());
        debug!("check"; "rss full text: {}, katex: {}", config.rss.full_text, config.latex.katex);
    }

    Ok(())
}
