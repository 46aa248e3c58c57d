//! `typography show`: print the effective config with defaults merged in.

use anyhow::{Context, Result};

use super::args::ShowFormat;
use crate::config::{SiteConfig, cfg};

const TOML_ERR: &str = "Failed to serialize config as TOML";
const JSON_ERR: &str = "Failed to serialize config as JSON";

pub fn show_config(format: ShowFormat, pretty: bool) -> Result<()> {
    println!("{}", render_config(&cfg(), format, pretty)?);
    Ok(())
}

fn render_config(config: &SiteConfig, format: ShowFormat, pretty: bool) -> Result<String> {
    let out = match (format, pretty) {
        (ShowFormat::Toml, true) => toml::to_string_pretty(config).context(TOML_ERR)?,
        (ShowFormat::Toml, false) => toml::to_string(config).context(TOML_ERR)?,
        (ShowFormat::Json, true) => serde_json::to_string_pretty(config).context(JSON_ERR)?,
        (ShowFormat::Json, false) => serde_json::to_string(config).context(JSON_ERR)?,
    };
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SAMPLE_CONFIG, test_parse_config};

    #[test]
    fn test_show_json_uses_config_keys() {
        let config = test_parse_config("[site]\ntitle = \"Blog\"");
        let json = render_config(&config, ShowFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["site"]["title"], "Blog");
        // defaults are filled in
        assert_eq!(value["site"]["pageSize"], 6);
        assert_eq!(value["rss"]["fullText"], true);
        assert_eq!(value["appearance"]["colorsLight"]["primary"], "#2e405b");
        // internal fields never leak
        assert!(value.get("config_path").is_none());
    }

    #[test]
    fn test_show_toml_reparses() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let toml = render_config(&config, ShowFormat::Toml, true).unwrap();

        let reparsed = test_parse_config(&toml);
        assert_eq!(reparsed.site.nav_links, config.site.nav_links);
        assert_eq!(reparsed.site.footer, config.site.footer);
        assert_eq!(reparsed.appearance.fonts, config.appearance.fonts);
        assert!(reparsed.latex.katex);
    }
}
