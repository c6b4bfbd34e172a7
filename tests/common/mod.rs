#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the term-plot binary.
#[macro_export]
macro_rules! term_plot {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("term-plot"))
    };
}

/// A config that differs from the defaults in every field.
pub const COLUMN_CONFIG: &str = r#"
[chart]
kind = "column"
max_width = 120
max_height = 12

[style]
highlight = "green"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.term-plot.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".term-plot.toml", content);
    }
}
