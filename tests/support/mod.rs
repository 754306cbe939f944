//! Test support utilities for secretpull integration tests.
//!
//! Provides an isolated working directory and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` set to the temp directory, so
/// tests can run in parallel without touching process-global state.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `secret.json` holding `raw`.
    pub fn with_secret(raw: &str) -> Self {
        let t = Self::new();
        t.write("secret.json", raw);
        t
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Absolute path of a file in the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
