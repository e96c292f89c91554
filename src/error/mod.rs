//! Error types and handling for docguard
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`frontmatter`]: Page frontmatter violations
//! - [`openapi`]: Missing OpenAPI spec
//! - [`config`]: Site configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod frontmatter;
pub mod fs;
pub mod openapi;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for docguard operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocguardError {
    // Frontmatter errors
    #[error("YAML parse error in frontmatter of '{path}':\n{reason}")]
    #[diagnostic(
        code(docguard::frontmatter::parse_failed),
        help("Fix the YAML between the leading '---' lines. See docs/getting-started/quickstart.md.")
    )]
    FrontmatterParseFailed { path: String, reason: String },

    #[error("Frontmatter of '{path}' must be a mapping, found {found}")]
    #[diagnostic(
        code(docguard::frontmatter::not_mapping),
        help("Frontmatter is a set of `key: value` lines. See docs/getting-started/quickstart.md.")
    )]
    FrontmatterNotMapping { path: String, found: String },

    #[error(
        "Unknown frontmatter key(s) in '{path}': {keys:?}\nPermitted keys are: {permitted:?}"
    )]
    #[diagnostic(
        code(docguard::frontmatter::unknown_keys),
        help("See docs/getting-started/quickstart.md to add a new key via an authoring-guide amendment.")
    )]
    UnknownFrontmatterKeys {
        path: String,
        keys: Vec<String>,
        permitted: Vec<String>,
    },

    // OpenAPI errors
    #[error("Required OpenAPI spec not found at '{path}'")]
    #[diagnostic(
        code(docguard::openapi::missing),
        help("Create {path} before building the site.\nSee docs/getting-started/quickstart.md for authoring guidance.")
    )]
    OpenApiSpecMissing { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(docguard::config::not_found),
        help("Pass --config with the path to your mkdocs.yml")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(docguard::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(docguard::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Docs directory not found: {path}")]
    #[diagnostic(
        code(docguard::config::docs_dir_not_found),
        help("Set `docs_dir` in mkdocs.yml or run from the project root (see --root)")
    )]
    DocsDirNotFound { path: String },

    // File system errors
    #[error("Failed to read page: {path}: {reason}")]
    #[diagnostic(code(docguard::fs::page_read_failed))]
    PageReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(docguard::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DocguardError {
    fn from(err: std::io::Error) -> Self {
        fs::io_error(err.to_string())
    }
}

impl From<walkdir::Error> for DocguardError {
    fn from(err: walkdir::Error) -> Self {
        fs::io_error(err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DocguardError>;
