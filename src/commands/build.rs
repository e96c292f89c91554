//! Build command implementation
//!
//! Drives the lifecycle a site build goes through: startup, configuration,
//! then one page-read event per Markdown page under the docs directory.
//! Stops at the first failure.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use docguard::config::DEFAULT_CONFIG_FILE;
use docguard::error::{self, Result};
use docguard::{BuildConfig, Hooks, Page};

use crate::cli::BuildArgs;
use crate::commands::helpers::read_page;
use crate::ui::Reporter;

/// File extensions a site build treats as Markdown pages
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkdn", "mkd"];

/// Run build command
pub fn run(root: PathBuf, args: BuildArgs, reporter: Reporter) -> Result<()> {
    let hooks = Hooks::new(root);

    hooks.on_startup("build", args.dirty)?;
    reporter.step("startup", "OpenAPI spec present");

    let config = load_config(hooks.root(), args.config)?;
    let config = hooks.on_config(config)?;
    reporter.step("config", config.site_name.as_deref().unwrap_or("(unnamed site)"));

    let docs_dir = config.docs_path();
    if !docs_dir.is_dir() {
        return Err(error::config::docs_dir_not_found(
            docs_dir.display().to_string(),
        ));
    }

    let pages = collect_pages(&docs_dir)?;
    reporter.step("pages", format!("{} in {}", pages.len(), docs_dir.display()));
    for page in &pages {
        read_page(&hooks, page, &config, reporter)?;
    }

    reporter.success(format!("{} page(s) checked", pages.len()));
    Ok(())
}

/// Load the explicit config file, or `mkdocs.yml` if present
fn load_config(root: &Path, explicit: Option<PathBuf>) -> Result<BuildConfig> {
    match explicit {
        Some(path) => BuildConfig::load(&root.join(path)),
        None => BuildConfig::load_or_default(&root.join(DEFAULT_CONFIG_FILE)),
    }
}

/// Markdown pages under `docs_dir`, in file name order
fn collect_pages(docs_dir: &Path) -> Result<Vec<Page>> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(docs_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        let src_path = entry
            .path()
            .strip_prefix(docs_dir)
            .unwrap_or(entry.path())
            .to_path_buf();
        pages.push(Page::new(src_path).with_abs_src_path(entry.path()));
    }
    Ok(pages)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}
