// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The coverage run command.

use std::path::Path;

use anyhow::Context;

use gridly_cov::cli::Cli;
use gridly_cov::config::{self, Config};
use gridly_cov::discovery::find_config;
use gridly_cov::report;
use gridly_cov::runner::CoverageRunner;
use gridly_cov::signal::Interrupt;
use gridly_cov::status::TestStatus;
use gridly_cov::tool::LlvmCov;

/// Resolve settings, run the tests, report, and return the status to exit with.
pub fn run(cli: &Cli) -> anyhow::Result<TestStatus> {
    let config = match std::env::current_dir()
        .context("failed to read working directory")
        .and_then(|cwd| load_config(cli, &cwd).map(|config| (cwd, config)))
    {
        Ok(loaded) => loaded,
        Err(e) => {
            // Nothing ran, so the report has no data
            tracing::error!("{e:#}");
            let formatter = report::formatter(cli.output.unwrap_or_default());
            println!("{}", formatter.format_empty().trim_end());
            return Ok(TestStatus::CONFIG_ERROR);
        }
    };
    let (cwd, config) = config;
    let settings = config.resolve(cli.overrides());
    tracing::debug!("settings: {:?}", settings);

    let interrupt = match Interrupt::install() {
        Ok(interrupt) => Some(interrupt),
        Err(e) => {
            tracing::warn!("failed to install interrupt handler: {e}");
            None
        }
    };

    let tool = LlvmCov;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = CoverageRunner::new(&tool, &settings)
        .with_interrupt(interrupt.as_ref())
        .run(&cwd, &mut out);

    Ok(outcome.status)
}

fn load_config(cli: &Cli, cwd: &Path) -> anyhow::Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(cwd.join(path)),
        None => find_config(cwd),
    };
    match path {
        Some(path) => Ok(config::load(&path)?),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}
