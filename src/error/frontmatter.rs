//! Frontmatter errors

use super::DocguardError;
use crate::frontmatter::PERMITTED_KEYS;

/// Creates a frontmatter parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DocguardError {
    DocguardError::FrontmatterParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a frontmatter not-a-mapping error
pub fn not_mapping(path: impl Into<String>, found: impl Into<String>) -> DocguardError {
    DocguardError::FrontmatterNotMapping {
        path: path.into(),
        found: found.into(),
    }
}

/// Creates an unknown keys error; the permitted keys are filled in sorted.
pub fn unknown_keys(path: impl Into<String>, keys: Vec<String>) -> DocguardError {
    let mut permitted: Vec<String> = PERMITTED_KEYS.iter().map(|k| (*k).to_string()).collect();
    permitted.sort();
    DocguardError::UnknownFrontmatterKeys {
        path: path.into(),
        keys,
        permitted,
    }
}
