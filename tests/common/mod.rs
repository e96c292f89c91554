//! Common test utilities for docguard integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Frontmatter that only uses permitted keys
#[allow(dead_code)]
pub const CLEAN_PAGE: &str = "---\ntitle: Hello\nhide:\n  - toc\n---\nBody text\n";

/// A temporary documentation project
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with the OpenAPI spec and an index page in place
    #[allow(dead_code)]
    pub fn with_site() -> Self {
        let workspace = Self::new();
        workspace.write_openapi_spec();
        workspace.write_file("docs/index.md", CLEAN_PAGE);
        workspace
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write `docs/reference/openapi/openapi.yaml`
    #[allow(dead_code)]
    pub fn write_openapi_spec(&self) {
        self.write_file(
            "docs/reference/openapi/openapi.yaml",
            "openapi: 3.1.0\ninfo:\n  title: API\n  version: 1.0.0\npaths: {}\n",
        );
    }

    /// Remove a file from the project
    #[allow(dead_code)]
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }
}

/// docguard command running inside `root`
#[allow(deprecated)]
pub fn docguard_cmd_for(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docguard").expect("docguard binary is built");
    cmd.current_dir(root).env_remove("DOCGUARD_ROOT");
    cmd
}
