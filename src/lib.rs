//! docguard - build-time checks for documentation sites
//!
//! Two independent checks, exposed as site build lifecycle callbacks:
//! - [`frontmatter`]: pages may only declare allow-listed frontmatter keys
//! - [`openapi`]: `docs/reference/openapi/openapi.yaml` must exist
//!
//! [`hooks::Hooks`] binds both to the points where a build calls them.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod hooks;
pub mod openapi;

pub use config::BuildConfig;
pub use error::{DocguardError, Result};
pub use hooks::{HookOutcome, Hooks, Page};
