// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and resolution.
//!
//! Precedence: command-line flag, then config file, then the embedded
//! defaults in [`defaults`].

pub mod defaults;

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Top-level `gridly-cov.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version; must be 1.
    #[serde(default = "defaults::version")]
    pub version: u32,

    #[serde(default)]
    pub coverage: CoverageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            coverage: CoverageConfig::default(),
        }
    }
}

/// `[coverage]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageConfig {
    /// Package to test and instrument.
    #[serde(default = "defaults::source")]
    pub source: String,

    /// Track branch coverage in addition to lines.
    #[serde(default)]
    pub branch: bool,

    /// Glob patterns, relative to the package directory, left out of the report.
    #[serde(default = "defaults::omit")]
    pub omit: Vec<String>,

    #[serde(default)]
    pub output: OutputFormat,

    /// Extra arguments passed to the test binaries.
    #[serde(default)]
    pub test_args: Vec<String>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            source: defaults::source(),
            branch: false,
            omit: defaults::omit(),
            output: OutputFormat::default(),
            test_args: Vec::new(),
        }
    }
}

/// Values given on the command line. `None` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub branch: Option<bool>,
    pub output: Option<OutputFormat>,
    pub manifest_path: Option<PathBuf>,
    pub test_args: Vec<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: String,
    pub branch: bool,
    pub omit: Vec<String>,
    pub output: OutputFormat,
    pub manifest_path: Option<PathBuf>,
    pub test_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().resolve(Overrides::default())
    }
}

impl Config {
    /// Apply command-line overrides on top of this config.
    pub fn resolve(self, overrides: Overrides) -> Settings {
        let coverage = self.coverage;
        let test_args = if overrides.test_args.is_empty() {
            coverage.test_args
        } else {
            overrides.test_args
        };
        Settings {
            source: overrides.source.unwrap_or(coverage.source),
            branch: overrides.branch.unwrap_or(coverage.branch),
            omit: coverage.omit,
            output: overrides.output.unwrap_or(coverage.output),
            manifest_path: overrides.manifest_path,
            test_args,
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(&content, path)
}

/// Parse and validate config content. `path` is used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let invalid = |message: String| Error::Config {
        path: path.to_path_buf(),
        message,
    };

    let config: Config = toml::from_str(content).map_err(|e| invalid(e.message().to_string()))?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(invalid(format!(
            "unsupported version {} (expected {})",
            config.version,
            defaults::CONFIG_VERSION
        )));
    }
    if config.coverage.source.trim().is_empty() {
        return Err(invalid("coverage.source must not be empty".to_string()));
    }
    build_omit_set(&config.coverage.omit).map_err(|e| invalid(e.to_string()))?;

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Compile omit patterns into a matcher.
pub fn build_omit_set(patterns: &[String]) -> std::result::Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
