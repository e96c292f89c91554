//! docguard - documentation build checks
//!
//! Runs the frontmatter allow-list and OpenAPI presence checks from the
//! command line, the same way a site build would invoke them.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::Reporter;

fn main() {
    let cli = Cli::parse();
    let root = cli.root.unwrap_or_default();
    let reporter = Reporter::new(cli.verbose);

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(root, args, reporter),
        Commands::Frontmatter(args) => commands::frontmatter::run(root, args, reporter),
        Commands::Openapi => commands::openapi::run(root, reporter),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("{help}");
        }
        std::process::exit(1);
    }
}
