//! CLI definitions using clap derive API
//!
//! Argument types for each command live in their own submodule:
//! - build: Build command arguments
//! - frontmatter: Frontmatter command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod frontmatter;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use frontmatter::FrontmatterArgs;

/// docguard - documentation build checks
///
/// Enforce the frontmatter allow-list and the required OpenAPI spec before a site build.
#[derive(Parser, Debug)]
#[command(
    name = "docguard",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build-time checks for documentation sites",
    long_about = "docguard runs the checks a documentation build depends on: Markdown pages may \
                  only use the title, description and hide frontmatter keys, and \
                  docs/reference/openapi/openapi.yaml must exist.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  docguard build                    \x1b[90m# Run every check over the site\x1b[0m\n   \
                  docguard frontmatter docs/a.md    \x1b[90m# Check specific pages\x1b[0m\n   \
                  docguard openapi                  \x1b[90m# Check the OpenAPI spec is present\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "DOCGUARD_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the site build lifecycle checks over every page
    Build(BuildArgs),

    /// Check the frontmatter of specific pages
    Frontmatter(FrontmatterArgs),

    /// Check that the OpenAPI spec is present
    Openapi,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_cli_parsing_build() {
        let cli = Cli::try_parse_from(["docguard", "build"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.config, None);
                assert!(!args.dirty);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parsing_build_options() {
        let cli =
            Cli::try_parse_from(["docguard", "build", "--config", "site.yml", "--dirty"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.config, Some(PathBuf::from("site.yml")));
                assert!(args.dirty);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parsing_frontmatter() {
        let cli = Cli::try_parse_from(["docguard", "frontmatter", "a.md", "b.md"]).unwrap();
        match cli.command {
            Commands::Frontmatter(args) => {
                assert_eq!(args.files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
            }
            _ => panic!("Expected Frontmatter command"),
        }
    }

    #[test]
    fn test_cli_frontmatter_requires_files() {
        assert!(Cli::try_parse_from(["docguard", "frontmatter"]).is_err());
    }

    #[test]
    fn test_cli_parsing_openapi() {
        let cli = Cli::try_parse_from(["docguard", "openapi"]).unwrap();
        assert!(matches!(cli.command, Commands::Openapi));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["docguard", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["docguard", "-v", "-C", "/tmp/site", "openapi"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/site")));
    }

    #[test]
    fn test_cli_completions_ignores_case() {
        let cli = Cli::try_parse_from(["docguard", "completions", "ZSH"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs {
                shell: clap_complete::Shell::Zsh
            })
        ));
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["docguard", "completions", "tcsh"]).is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["docguard", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
