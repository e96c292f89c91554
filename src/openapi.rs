//! Required OpenAPI spec presence check.
//!
//! The reference section renders `docs/reference/openapi/openapi.yaml`; a build
//! without it must fail before any page is processed.

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

const SPEC_DIRS: [&str; 3] = ["docs", "reference", "openapi"];
const SPEC_FILE: &str = "openapi.yaml";

/// Relative location of the required spec, `docs/reference/openapi/openapi.yaml`.
pub fn spec_path() -> PathBuf {
    SPEC_DIRS.iter().collect::<PathBuf>().join(SPEC_FILE)
}

/// Check that the spec exists relative to the working directory.
pub fn ensure_openapi_spec() -> Result<()> {
    check(&spec_path())
}

/// Check that the spec exists under `root`.
///
/// Content is irrelevant; an empty file passes. Anything that is not a
/// readable regular file, including a directory at that path, counts as
/// missing.
pub fn ensure_openapi_spec_at(root: &Path) -> Result<()> {
    check(&root.join(spec_path()))
}

fn check(candidate: &Path) -> Result<()> {
    if candidate.is_file() {
        Ok(())
    } else {
        Err(error::openapi::missing(spec_path().display().to_string()))
    }
}
