// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `cargo llvm-cov` backend.
//!
//! Runs `cargo llvm-cov --no-report` so the test exit status is cargo's own,
//! then `cargo llvm-cov report --lcov` to export what was collected.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{CoverageTool, ToolContext};
use crate::config::defaults::{EXPORT_DIR, EXPORT_FILE};
use crate::error::{Error, Result};
use crate::status::TestStatus;
use crate::workspace::{Target, cargo};

/// Drives `cargo llvm-cov`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LlvmCov;

impl LlvmCov {
    /// Where the LCOV export is written.
    pub fn export_path(target: &Target) -> PathBuf {
        target.target_directory.join(EXPORT_DIR).join(EXPORT_FILE)
    }

    /// Arguments to discard profile data from earlier runs.
    pub fn clean_args(ctx: &ToolContext<'_>) -> Vec<OsString> {
        let mut args = os_args(["llvm-cov", "clean", "--workspace"]);
        push_manifest(&mut args, ctx.target);
        args
    }

    /// Arguments for the instrumented test run. Every test target runs even
    /// when an earlier one fails.
    pub fn test_args(ctx: &ToolContext<'_>) -> Vec<OsString> {
        let mut args = os_args(["llvm-cov", "--no-report", "--no-fail-fast", "--package"]);
        args.push(OsString::from(&ctx.target.package));
        push_manifest(&mut args, ctx.target);
        if ctx.branch {
            args.push(OsString::from("--branch"));
        }
        if !ctx.test_args.is_empty() {
            args.push(OsString::from("--"));
            args.extend(ctx.test_args.iter().map(OsString::from));
        }
        args
    }

    /// Arguments for the LCOV export.
    pub fn report_args(ctx: &ToolContext<'_>, output: &Path) -> Vec<OsString> {
        let mut args = os_args(["llvm-cov", "report", "--lcov", "--output-path"]);
        args.push(output.as_os_str().to_os_string());
        push_manifest(&mut args, ctx.target);
        if ctx.branch {
            args.push(OsString::from("--branch"));
        }
        args
    }

    fn command(ctx: &ToolContext<'_>, args: Vec<OsString>) -> Command {
        let mut command = Command::new(cargo());
        command.args(args).current_dir(&ctx.target.workspace_root);
        tracing::debug!("running {:?}", command);
        command
    }
}

fn os_args<const N: usize>(args: [&str; N]) -> Vec<OsString> {
    args.into_iter().map(OsString::from).collect()
}

fn push_manifest(args: &mut Vec<OsString>, target: &Target) {
    args.push(OsString::from("--manifest-path"));
    args.push(target.manifest_path.as_os_str().to_os_string());
}

impl CoverageTool for LlvmCov {
    fn name(&self) -> &'static str {
        "cargo-llvm-cov"
    }

    fn install_hint(&self) -> &'static str {
        "cargo install cargo-llvm-cov"
    }

    fn available(&self, cwd: &Path) -> bool {
        Command::new(cargo())
            .args(["llvm-cov", "--version"])
            .current_dir(cwd)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn run_tests(&self, ctx: &ToolContext<'_>) -> Result<TestStatus> {
        // Stale profiles from an earlier run would leak into this report.
        match Self::command(ctx, Self::clean_args(ctx)).output() {
            Ok(output) if output.status.success() => {}
            Ok(output) => tracing::warn!(
                "cargo llvm-cov clean failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ),
            Err(e) => tracing::warn!("cargo llvm-cov clean failed: {e}"),
        }

        let status = Self::command(ctx, Self::test_args(ctx))
            .status()
            .map_err(|source| Error::Spawn {
                command: "cargo llvm-cov".to_string(),
                source,
            })?;
        Ok(TestStatus::from_exit_status(status))
    }

    fn export_lcov(&self, ctx: &ToolContext<'_>) -> Result<String> {
        let path = Self::export_path(ctx.target);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let output = Self::command(ctx, Self::report_args(ctx, &path))
            .output()
            .map_err(|source| Error::Spawn {
                command: "cargo llvm-cov report".to_string(),
                source,
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Report(stderr.trim().to_string()));
        }

        tracing::debug!("reading {}", path.display());
        Ok(std::fs::read_to_string(&path)?)
    }
}

#[cfg(test)]
#[path = "llvm_cov_tests.rs"]
mod tests;
