//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree lives either directly in a fresh temp dir or in a named
/// subdirectory of one, so tests can control the root's name and inspect its
/// parent. Everything is cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
    root: PathBuf,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();
        Self { dir, root }
    }

    /// Create a temporary directory whose tree root is a subdirectory named `name`.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// Get the path to the tree root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Get the directory containing the tree root.
    pub fn parent(&self) -> &Path {
        if self.root == self.dir.path() {
            self.dir.path().parent().unwrap_or(self.dir.path())
        } else {
            self.dir.path()
        }
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
