//! OpenAPI command implementation

use std::path::PathBuf;

use docguard::Hooks;
use docguard::error::Result;
use docguard::openapi::spec_path;

use crate::ui::Reporter;

/// Run openapi command
pub fn run(root: PathBuf, reporter: Reporter) -> Result<()> {
    Hooks::new(root).on_startup("openapi", false)?;
    reporter.success(format!("OpenAPI spec found at {}", spec_path().display()));
    Ok(())
}
