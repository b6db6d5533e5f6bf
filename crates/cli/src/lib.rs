// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs a package's tests under coverage and reports per-module results.
//!
//! The sequence is linear: resolve the package, run its tests with
//! instrumentation, then report, exiting with the test run's own status.
//! See [`runner::CoverageRunner`].

pub mod cli;
pub mod config;
pub mod coverage;
pub mod discovery;
pub mod error;
pub mod guard;
pub mod lcov;
pub mod logging;
pub mod report;
pub mod runner;
pub mod signal;
pub mod status;
pub mod tool;
pub mod workspace;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ErrorCategory, Result};
pub use status::TestStatus;
