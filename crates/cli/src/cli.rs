// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::config::Overrides;

/// Run the gridly test suite under coverage and print a per-module report.
///
/// With no arguments, tests and measures the `gridly` package with line
/// coverage. Exits with the test run's own status.
#[derive(Parser, Debug)]
#[command(name = "gridly-cov")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "GRIDLY_COV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Package to test and measure
    #[arg(short, long, value_name = "PACKAGE")]
    pub source: Option<String>,

    /// Measure branch coverage in addition to lines
    #[arg(long, overrides_with = "no_branch")]
    pub branch: bool,

    /// Measure line coverage only
    #[arg(long, overrides_with = "branch")]
    pub no_branch: bool,

    /// Report format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Path to the workspace Cargo.toml
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Arguments passed through to the test binaries
    #[arg(last = true, value_name = "TEST_ARGS")]
    pub test_args: Vec<String>,
}

impl Cli {
    /// Branch toggle from flags; `None` when neither flag is given.
    pub fn branch_override(&self) -> Option<bool> {
        if self.branch {
            Some(true)
        } else if self.no_branch {
            Some(false)
        } else {
            None
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            source: self.source.clone(),
            branch: self.branch_override(),
            output: self.output,
            manifest_path: self.manifest_path.clone(),
            test_args: self.test_args.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
