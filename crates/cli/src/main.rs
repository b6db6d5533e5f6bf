// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use clap::Parser;

use gridly_cov::cli::Cli;
use gridly_cov::logging;
use gridly_cov::status::TestStatus;

mod cmd_run;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cmd_run::run(&cli) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            tracing::error!("{e:#}");
            TestStatus::CONFIG_ERROR.exit_code()
        }
    }
}
