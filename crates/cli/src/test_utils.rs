// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::defaults::CONFIG_FILE;

/// Creates a temp directory with a minimal gridly-cov.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// LCOV record for one file: `(line, hits)` pairs and
/// `(line, block, branch, taken)` branch entries.
pub fn lcov_record(path: &str, lines: &[(u32, u64)], branches: &[(u32, u32, u32, Option<u64>)]) -> String {
    let mut out = format!("SF:{path}\n");
    for (line, hits) in lines {
        out.push_str(&format!("DA:{line},{hits}\n"));
    }
    for (line, block, branch, taken) in branches {
        let taken = taken.map_or_else(|| "-".to_string(), |t| t.to_string());
        out.push_str(&format!("BRDA:{line},{block},{branch},{taken}\n"));
    }
    out.push_str("end_of_record\n");
    out
}
