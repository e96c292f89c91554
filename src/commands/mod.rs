//! Command implementations for the docguard CLI

pub mod build;
pub mod completions;
pub mod frontmatter;
pub mod helpers;
pub mod openapi;
pub mod version;
