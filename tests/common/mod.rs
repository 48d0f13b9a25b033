//! Common test utilities for deploycheck integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Latest-alias wheel path used by the fixture configuration
pub const WHEEL: &str = "docs/assets/wheels/pkg-latest-py3-none-any.whl";

/// Notebook path used by the fixture configuration
pub const NOTEBOOK: &str = "docs/notebooks/kernels.py";

/// Fixture configuration: one wheel, one notebook with two required patterns
pub const CONFIG: &str = r#"artifacts:
  - path: docs/assets/wheels/pkg-latest-py3-none-any.whl
descriptors:
  - path: docs/notebooks/kernels.py
    patterns:
      - 'micropip.install(wheel_url)'
      - 'urljoin(base_href, '
stage:
  package: pkg
"#;

/// Notebook text that satisfies the fixture configuration
pub const NOTEBOOK_SOURCE: &str = r#"import marimo

app = marimo.App()


@app.cell
async def _():
    import sys
    if sys.platform == "emscripten":
        import micropip
        from urllib.parse import urljoin
        wheel_url = urljoin(base_href, "assets/wheels/pkg-latest-py3-none-any.whl")
        await micropip.install(wheel_url)
    return
"#;

/// A temporary project root for integration tests
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project that passes the fixture configuration
    pub fn deployable() -> Self {
        let project = Self::new();
        project.write_file("deploycheck.yaml", CONFIG);
        project.write_bytes(WHEEL, b"0123456789");
        project.write_file(NOTEBOOK, NOTEBOOK_SOURCE);
        project
    }

    /// Write a text file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    /// Write a binary file in the project
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a zip archive with the given entry names
    pub fn write_wheel(&self, path: &str, entries: &[&str]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let file = std::fs::File::create(&file_path).expect("Failed to create wheel");
        let mut zip = zip::ZipWriter::new(file);
        for entry in entries {
            zip.start_file(*entry, zip::write::FileOptions::default())
                .expect("Failed to start wheel entry");
            zip.write_all(b"# content\n")
                .expect("Failed to write wheel entry");
        }
        zip.finish().expect("Failed to finish wheel");
    }

    /// Remove a file from the project
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// deploycheck binary isolated from the caller's environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn deploycheck_cmd() -> Command {
    let mut cmd = Command::cargo_bin("deploycheck").unwrap();
    cmd.env_remove("DEPLOYCHECK_ROOT").env_remove("RUST_LOG");
    cmd
}
