//! Error type tests
//!
//! Tests for DocguardError and its constructors.

#![allow(clippy::unwrap_used)]

use super::DocguardError;
use super::{config, frontmatter, fs, openapi};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

macro_rules! test_error_code {
    ($test_name:ident, $err:expr, $code:expr) => {
        #[test]
        fn $test_name() {
            let err = $err;
            assert_eq!(err.code().map(|c| c.to_string()), Some($code.to_string()));
        }
    };
}

test_error_contains!(
    test_parse_failed_message,
    frontmatter::parse_failed("docs/a.md", "did not find expected node content"),
    "YAML parse error in frontmatter of 'docs/a.md'",
    "did not find expected node content"
);

test_error_contains!(
    test_not_mapping_message,
    frontmatter::not_mapping("docs/a.md", "a list"),
    "docs/a.md",
    "must be a mapping",
    "a list"
);

test_error_contains!(
    test_unknown_keys_message,
    frontmatter::unknown_keys("docs/a.md", vec!["author".to_string()]),
    "Unknown frontmatter key(s) in 'docs/a.md': [\"author\"]",
    "Permitted keys are: [\"description\", \"hide\", \"title\"]"
);

test_error_contains!(
    test_openapi_missing_message,
    openapi::missing("docs/reference/openapi/openapi.yaml"),
    "Required OpenAPI spec not found at 'docs/reference/openapi/openapi.yaml'"
);

test_error_contains!(
    test_config_not_found_message,
    config::not_found("mkdocs.yml"),
    "Configuration file not found: mkdocs.yml"
);

test_error_contains!(
    test_config_parse_failed_message,
    config::parse_failed("mkdocs.yml", "bad indent"),
    "mkdocs.yml",
    "bad indent"
);

test_error_contains!(
    test_docs_dir_not_found_message,
    config::docs_dir_not_found("site/docs"),
    "Docs directory not found: site/docs"
);

test_error_contains!(
    test_page_read_failed_message,
    fs::page_read_failed("docs/a.md", "No such file or directory"),
    "Failed to read page: docs/a.md"
);

test_error_code!(
    test_unknown_keys_code,
    frontmatter::unknown_keys("a.md", vec![]),
    "docguard::frontmatter::unknown_keys"
);

test_error_code!(
    test_parse_failed_code,
    frontmatter::parse_failed("a.md", "x"),
    "docguard::frontmatter::parse_failed"
);

test_error_code!(
    test_openapi_missing_code,
    openapi::missing("x"),
    "docguard::openapi::missing"
);

#[test]
fn test_unknown_keys_help_points_to_authoring_guide() {
    let err = frontmatter::unknown_keys("a.md", vec!["author".to_string()]);
    let help = err.help().unwrap().to_string();
    assert!(help.contains("docs/getting-started/quickstart.md"));
}

#[test]
fn test_openapi_missing_help_names_path() {
    let err = openapi::missing("docs/reference/openapi/openapi.yaml");
    let help = err.help().unwrap().to_string();
    assert!(help.contains("Create docs/reference/openapi/openapi.yaml before building the site."));
    assert!(help.contains("docs/getting-started/quickstart.md"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DocguardError = io_err.into();
    assert!(matches!(err, DocguardError::IoError { .. }));
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_walkdir_error_conversion() {
    let temp = tempfile::TempDir::new().unwrap();
    let walk_err = walkdir::WalkDir::new(temp.path().join("missing"))
        .into_iter()
        .find_map(std::result::Result::err)
        .unwrap();
    let err: DocguardError = walk_err.into();
    assert!(matches!(err, DocguardError::IoError { .. }));
}
