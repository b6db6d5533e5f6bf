//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing gridly-cov CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Minimal valid config.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Returns a Command configured to run the gridly-cov binary from `dir`.
pub fn gridly_cov_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gridly-cov"));
    cmd.current_dir(dir)
        .env_remove("GRIDLY_COV_CONFIG")
        .env_remove("GRIDLY_COV_LOG");
    cmd
}

/// A throwaway cargo workspace with one library package.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Workspace holding a single package named `demo`.
    pub fn cargo() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\nedition = \"2021\"\n",
        )
        .unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(
            dir.path().join("src/lib.rs"),
            "pub fn answer() -> u32 {\n    42\n}\n",
        )
        .unwrap();
        // Stop config discovery at the project root
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `gridly-cov.toml` at the project root.
    pub fn config(&self, content: &str) {
        std::fs::write(self.path().join("gridly-cov.toml"), content).unwrap();
    }

    /// Write an arbitrary file under the project root.
    pub fn file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
