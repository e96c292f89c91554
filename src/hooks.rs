//! Lifecycle callbacks for a documentation site build.
//!
//! A site build calls these at three points: once at startup, once when the
//! configuration is final, and once per page when its source is read. The
//! OpenAPI presence check runs at both of the first two points, since a host
//! may skip the startup event; running it twice is harmless.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{DocguardError, Result};
use crate::{frontmatter, openapi};

/// A page as the build sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path as declared by the build, usually relative
    pub src_path: PathBuf,

    /// Resolved absolute path, when the build knows it
    pub abs_src_path: Option<PathBuf>,
}

impl Page {
    pub fn new(src_path: impl Into<PathBuf>) -> Self {
        Self {
            src_path: src_path.into(),
            abs_src_path: None,
        }
    }

    #[must_use]
    pub fn with_abs_src_path(mut self, abs_src_path: impl Into<PathBuf>) -> Self {
        self.abs_src_path = Some(abs_src_path.into());
        self
    }

    /// Absolute path if known, otherwise the declared one.
    pub fn source_path(&self) -> &Path {
        self.abs_src_path.as_deref().unwrap_or(&self.src_path)
    }
}

/// What the build should do with a page after a callback ran
#[derive(Debug)]
pub enum HookOutcome {
    /// Load the page normally
    Unchanged,
    /// Use this text as the page source instead
    Replace(String),
    /// Stop the build
    Abort(DocguardError),
}

impl HookOutcome {
    /// `Ok(None)` to keep the source, `Ok(Some(text))` to replace it.
    pub fn into_result(self) -> Result<Option<String>> {
        match self {
            HookOutcome::Unchanged => Ok(None),
            HookOutcome::Replace(text) => Ok(Some(text)),
            HookOutcome::Abort(err) => Err(err),
        }
    }
}

impl From<Result<()>> for HookOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => HookOutcome::Unchanged,
            Err(err) => HookOutcome::Abort(err),
        }
    }
}

/// Callbacks bound to a project root.
///
/// Relative paths, both the OpenAPI spec and pages without an absolute
/// source path, are resolved against the root. An empty root means the
/// working directory.
#[derive(Debug, Clone, Default)]
pub struct Hooks {
    root: PathBuf,
}

impl Hooks {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Startup event. Neither argument affects the check.
    pub fn on_startup(&self, _command: &str, _dirty: bool) -> Result<()> {
        self.check_openapi()
    }

    /// Configuration event; hands the configuration back untouched.
    pub fn on_config(&self, config: BuildConfig) -> Result<BuildConfig> {
        self.check_openapi()?;
        Ok(config)
    }

    /// Page source event. Never rewrites the page.
    pub fn on_page_read_source(&self, page: &Page, _config: &BuildConfig) -> HookOutcome {
        let path = self.root.join(page.source_path());
        frontmatter::validate_file(&path).into()
    }

    fn check_openapi(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            openapi::ensure_openapi_spec()
        } else {
            openapi::ensure_openapi_spec_at(&self.root)
        }
    }
}
