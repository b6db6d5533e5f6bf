// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the coverage runner.
//!
//! Test failures are not errors: they are a nonzero [`crate::status::TestStatus`].
//! Everything here is a tooling or configuration problem.

use std::path::PathBuf;

use thiserror::Error;

/// Coverage runner error.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read or parsed.
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The coverage tool is not installed.
    #[error("{tool} is not available (install it with `{install}`)")]
    ToolMissing {
        tool: &'static str,
        install: &'static str,
    },

    /// The package named for instrumentation is not a workspace member.
    #[error("package `{name}` not found in workspace {workspace}")]
    PackageNotFound { name: String, workspace: PathBuf },

    /// `cargo metadata` failed or returned something unexpected.
    #[error("failed to read workspace metadata: {0}")]
    Metadata(String),

    /// A child process could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The report export step exited unsuccessfully.
    #[error("coverage report step failed: {0}")]
    Report(String),

    /// The exported LCOV data could not be parsed.
    #[error("malformed coverage data at line {line}: {message}")]
    Lcov { line: usize, message: String },

    /// No coverage was collected for the package.
    #[error("no data to report")]
    NoData,

    /// The coverage tool failed unexpectedly.
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Which side of the run an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The test run never started: bad config, missing tool or package.
    Configuration,
    /// Produced while reporting; never changes the exit status.
    Reporting,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config { .. }
            | Error::ToolMissing { .. }
            | Error::PackageNotFound { .. }
            | Error::Metadata(_)
            | Error::Spawn { .. }
            | Error::Internal(_) => ErrorCategory::Configuration,
            Error::Report(_) | Error::Lcov { .. } | Error::NoData | Error::Io(_) => {
                ErrorCategory::Reporting
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
