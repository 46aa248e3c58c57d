//! `footer`, `head` and `nav`: print rendered fragments to stdout.

use anyhow::Result;

use crate::config::cfg;
use crate::render;
use crate::utils::date::current_year;

pub fn print_footer(year: Option<i32>) -> Result<()> {
    let config = cfg();
    let year = year.unwrap_or_else(current_year);
    for line in render::render_footer(&config.site, year) {
        println!("{line}");
    }
    Ok(())
}

pub fn print_head() -> Result<()> {
    println!("{}", render::render_head(&cfg()));
    Ok(())
}

pub fn print_nav() -> Result<()> {
    let config = cfg();
    println!("{}", render::render_nav(&config));
    println!("{}", render::render_social(&config));
    Ok(())
}
