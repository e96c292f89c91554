use clap::Parser;
use std::path::PathBuf;

/// Arguments for the frontmatter command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a single page:\n    docguard frontmatter docs/index.md\n\n\
                  Check several pages:\n    docguard frontmatter docs/guide/*.md")]
pub struct FrontmatterArgs {
    /// Markdown pages to check, relative to the root
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
