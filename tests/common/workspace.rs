//! Temporary directory with helpers for writing inputs and reading outputs.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw bytes and return the full path.
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("Failed to read output")
    }

    pub fn read_string(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("Failed to read output")
    }
}
