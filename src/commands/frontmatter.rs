//! Frontmatter command implementation
//!
//! Checks the given pages only; the OpenAPI spec and the site config are not
//! consulted.

use std::path::PathBuf;

use docguard::error::Result;
use docguard::{BuildConfig, Hooks, Page};

use crate::cli::FrontmatterArgs;
use crate::commands::helpers::read_page;
use crate::ui::Reporter;

/// Run frontmatter command
pub fn run(root: PathBuf, args: FrontmatterArgs, reporter: Reporter) -> Result<()> {
    let hooks = Hooks::new(root);
    let config = BuildConfig::default();

    for file in &args.files {
        read_page(&hooks, &Page::new(file), &config, reporter)?;
    }

    reporter.success(format!("{} page(s) checked", args.files.len()));
    Ok(())
}
