//! Page handling shared by the build and frontmatter commands

use docguard::error::{self, Result};
use docguard::{BuildConfig, Hooks, Page};

use crate::ui::Reporter;

/// Run the page-read hook, then load the page the way a site build would.
///
/// The hook leaves unreadable pages alone, so the read failure is reported
/// here instead.
pub fn read_page(
    hooks: &Hooks,
    page: &Page,
    config: &BuildConfig,
    reporter: Reporter,
) -> Result<()> {
    let replacement = hooks.on_page_read_source(page, config).into_result()?;
    if replacement.is_none() {
        let path = hooks.root().join(page.source_path());
        std::fs::read_to_string(&path).map_err(|e| {
            error::fs::page_read_failed(path.display().to_string(), e.to_string())
        })?;
    }
    reporter.page_ok(page.source_path());
    Ok(())
}
