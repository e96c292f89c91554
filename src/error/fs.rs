//! File system errors

use super::DocguardError;

/// Creates a page read failed error
pub fn page_read_failed(path: impl Into<String>, reason: impl Into<String>) -> DocguardError {
    DocguardError::PageReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> DocguardError {
    DocguardError::IoError {
        message: message.into(),
    }
}
