// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace resolution via `cargo metadata`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::error::{Error, Result};

/// The package being measured and where its workspace lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub package: String,
    /// Directory holding the package's `Cargo.toml`.
    pub package_dir: PathBuf,
    pub workspace_root: PathBuf,
    /// Manifest passed to every cargo invocation.
    pub manifest_path: PathBuf,
    pub target_directory: PathBuf,
    /// Manifest directories of the other workspace members.
    pub member_dirs: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_members: Vec<String>,
    workspace_root: PathBuf,
    target_directory: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    id: String,
    manifest_path: PathBuf,
}

/// The cargo executable: `$CARGO` when run under cargo, else `cargo`.
pub fn cargo() -> OsString {
    std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"))
}

/// Resolve `package` in the workspace found from `cwd` or `manifest_path`.
pub fn locate(package: &str, manifest_path: Option<&Path>, cwd: &Path) -> Result<Target> {
    let mut command = Command::new(cargo());
    command
        .args(["metadata", "--no-deps", "--format-version", "1"])
        .current_dir(cwd);
    if let Some(manifest) = manifest_path {
        command.arg("--manifest-path").arg(manifest);
    }
    tracing::debug!("running {:?}", command);

    let output = command.output().map_err(|source| Error::Spawn {
        command: "cargo metadata".to_string(),
        source,
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Metadata(stderr.trim().to_string()));
    }

    let json = String::from_utf8_lossy(&output.stdout);
    let mut target = parse_metadata(&json, package)?;
    if let Some(manifest) = manifest_path {
        target.manifest_path = cwd.join(manifest);
    }
    Ok(target)
}

/// Find `package` among the workspace members in `cargo metadata` output.
pub fn parse_metadata(json: &str, package: &str) -> Result<Target> {
    let metadata: Metadata =
        serde_json::from_str(json).map_err(|e| Error::Metadata(e.to_string()))?;

    let members: Vec<&Package> = metadata
        .packages
        .iter()
        .filter(|p| metadata.workspace_members.contains(&p.id))
        .collect();
    let found = members
        .iter()
        .find(|p| p.name == package)
        .ok_or_else(|| Error::PackageNotFound {
            name: package.to_string(),
            workspace: metadata.workspace_root.clone(),
        })?;

    let package_dir = found
        .manifest_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::Metadata(format!(
                "manifest path has no parent: {}",
                found.manifest_path.display()
            ))
        })?;

    let member_dirs = members
        .iter()
        .filter(|p| p.id != found.id)
        .filter_map(|p| p.manifest_path.parent())
        .map(Path::to_path_buf)
        .collect();

    tracing::debug!("package {} at {}", package, package_dir.display());
    Ok(Target {
        package: found.name.clone(),
        package_dir,
        manifest_path: metadata.workspace_root.join("Cargo.toml"),
        workspace_root: metadata.workspace_root,
        target_directory: metadata.target_directory,
        member_dirs,
    })
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
