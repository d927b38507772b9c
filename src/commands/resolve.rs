use anyhow::{anyhow, Result};
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use crate::core::page::PageFetcher;
use crate::core::profile::{self, SiteProfile};
use crate::core::resolver::{resolve_site, ResolvedUrl, Resolver};
use crate::error::LinkError;

/// Resolve the named product over the network.
///
/// Returns the process exit code: 0 with the URL on stdout, or 1 with a
/// message on stderr for every kind of failure.
pub fn execute(name: &str) -> Result<i32> {
    let profile = profile::find(name).ok_or_else(|| anyhow!("Unknown product: {}", name))?;

    let outcome = resolve_site(&profile);

    colored::control::set_override(stderr_color(
        std::env::var_os("NO_COLOR").is_some(),
        io::stderr().is_terminal(),
    ));

    let stdout = io::stdout();
    let stderr = io::stderr();
    report(outcome, &mut stdout.lock(), &mut stderr.lock())
}

/// Same as [`execute`] with an injected fetcher and output streams
pub fn run<W: Write, E: Write>(
    profile: &SiteProfile,
    fetcher: &dyn PageFetcher,
    out: &mut W,
    err: &mut E,
) -> Result<i32> {
    let outcome = Resolver::new(fetcher, profile).resolve();
    report(outcome, out, err)
}

/// Errors are the only coloured output, so colour follows stderr, not stdout
fn stderr_color(no_color: bool, stderr_is_tty: bool) -> bool {
    !no_color && stderr_is_tty
}

fn report<W: Write, E: Write>(
    outcome: crate::Result<ResolvedUrl>,
    out: &mut W,
    err: &mut E,
) -> Result<i32> {
    match outcome {
        Ok(resolved) => {
            writeln!(out, "{}", resolved.url)?;
            out.flush()?;
            Ok(0)
        }
        Err(e) => {
            if let LinkError::NotFound { failures, .. } = &e {
                for failure in failures {
                    log::debug!("{}", failure);
                }
            }
            writeln!(err, "{} {}", "Error:".red().bold(), e)?;
            err.flush()?;
            Ok(1)
        }
    }
}
