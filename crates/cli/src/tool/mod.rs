// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage tool integration.
//!
//! A [`CoverageTool`] runs the instrumented tests and exports what they
//! collected. [`LlvmCov`] drives `cargo llvm-cov`; tests substitute fakes.

mod llvm_cov;

use std::path::Path;

pub use llvm_cov::LlvmCov;

use crate::error::Result;
use crate::status::TestStatus;
use crate::workspace::{self, Target};

/// Everything a tool needs for one run.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub target: &'a Target,
    pub branch: bool,
    /// Passed to the test binaries after `--`.
    pub test_args: &'a [String],
}

/// A coverage backend.
pub trait CoverageTool {
    /// Tool name for messages.
    fn name(&self) -> &'static str;

    /// How to install the tool when it is missing.
    fn install_hint(&self) -> &'static str;

    /// Check if the tool can run from `cwd`.
    fn available(&self, cwd: &Path) -> bool;

    /// Resolve the package to measure.
    fn locate(&self, package: &str, manifest_path: Option<&Path>, cwd: &Path) -> Result<Target> {
        workspace::locate(package, manifest_path, cwd)
    }

    /// Run the package's tests with instrumentation and return their status.
    ///
    /// A failing test run is a status, not an error; errors mean the run
    /// could not start.
    fn run_tests(&self, ctx: &ToolContext<'_>) -> Result<TestStatus>;

    /// Export collected coverage as an LCOV document.
    fn export_lcov(&self, ctx: &ToolContext<'_>) -> Result<String>;
}
