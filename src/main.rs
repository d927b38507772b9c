use anyhow::Result;
use clap::{Arg, Command};

use maclink::commands;
use maclink::core::profile;

fn build_cli() -> Command {
    let mut cli = Command::new("maclink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the current macOS installer download link for a known product")
        .long_about("Print the current macOS installer download link for a known product\n\nUSAGE:\n    maclink <PRODUCT>\n\nThe URL is written to stdout as a single line. On failure a message is\nwritten to stderr and the exit code is 1.\n\nSet RUST_LOG=debug to trace every tier of the search.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::Version),
        )
        .subcommand(Command::new("sites").about("List the products that can be resolved"))
        .subcommand(Command::new("version").about("Shows version information"));

    for site in profile::all() {
        cli = cli.subcommand(
            Command::new(site.name)
                .about(format!("Resolve the {} download link from {}", site.product, site.page_url)),
        );
    }

    cli
}

fn main() -> Result<()> {
    maclink::init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("sites", _)) => commands::sites(),
        Some(("version", _)) => commands::version(),
        Some((name, _)) => {
            let code = commands::resolve(name)?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        None => Ok(()),
    }
}
