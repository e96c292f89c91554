//! OpenAPI spec errors

use super::DocguardError;

/// Creates a missing OpenAPI spec error
pub fn missing(path: impl Into<String>) -> DocguardError {
    DocguardError::OpenApiSpecMissing { path: path.into() }
}
