//! Configuration errors

use super::DocguardError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> DocguardError {
    DocguardError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DocguardError {
    DocguardError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DocguardError {
    DocguardError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a docs directory not found error
pub fn docs_dir_not_found(path: impl Into<String>) -> DocguardError {
    DocguardError::DocsDirNotFound { path: path.into() }
}
