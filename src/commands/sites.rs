use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use crate::core::profile;

pub fn execute() -> Result<()> {
    let stdout = io::stdout();
    write_sites(&mut stdout.lock())
}

/// One line per configured product: subcommand, product name and page URL
pub fn write_sites<W: Write>(out: &mut W) -> Result<()> {
    let profiles = profile::all();
    let width = profiles.iter().map(|p| p.name.len()).max().unwrap_or(0);

    for profile in &profiles {
        writeln!(
            out,
            "{:<width$}  {}  {}",
            profile.name.cyan().bold(),
            profile.product,
            profile.page_url.dimmed(),
            width = width
        )?;
    }

    Ok(())
}
