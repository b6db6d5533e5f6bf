// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-then-report sequence.
//!
//! The report step is armed in a [`ReportGuard`] before anything else
//! happens, so it runs exactly once whether the tests pass, fail, never
//! start, or the tool panics. The captured test status is never changed
//! by the report step.

use std::cell::OnceCell;
use std::io::Write;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use crate::config::Settings;
use crate::coverage::{CoverageReport, Scope};
use crate::error::{Error, Result};
use crate::guard::ReportGuard;
use crate::lcov::parse_lcov;
use crate::report;
use crate::signal::Interrupt;
use crate::status::TestStatus;
use crate::tool::{CoverageTool, ToolContext};
use crate::workspace::Target;

/// Result of one invocation.
#[derive(Debug)]
pub struct RunOutcome {
    /// Status to exit with.
    pub status: TestStatus,
    /// Why the test run could not start or finish.
    pub error: Option<Error>,
    /// Why the report could not be produced. Never affects `status`.
    pub report_error: Option<Error>,
}

/// Runs the tests of one package under coverage, then reports.
pub struct CoverageRunner<'a> {
    tool: &'a dyn CoverageTool,
    settings: &'a Settings,
    interrupt: Option<&'a Interrupt>,
}

impl<'a> CoverageRunner<'a> {
    pub fn new(tool: &'a dyn CoverageTool, settings: &'a Settings) -> Self {
        Self {
            tool,
            settings,
            interrupt: None,
        }
    }

    pub fn with_interrupt(mut self, interrupt: Option<&'a Interrupt>) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Run the tests, then write the report to `out`.
    pub fn run(&self, cwd: &Path, out: &mut dyn Write) -> RunOutcome {
        let target = OnceCell::new();
        let mut report_result = None;

        let result = {
            let guard = ReportGuard::arm(|| {
                report_result = Some(self.report(target.get(), out));
            });

            // Catch panics so the tool's failure becomes a status
            let result = catch_unwind(AssertUnwindSafe(|| self.execute(cwd, &target)))
                .unwrap_or_else(|_| Err(Error::Internal("coverage tool panicked".to_string())));
            if let Err(e) = &result {
                tracing::error!("{e}");
            }

            guard.finish();
            result
        };

        let report_error = match report_result {
            Some(Err(e)) => {
                match &e {
                    Error::NoData => tracing::debug!("{e}"),
                    _ => tracing::error!("{e}"),
                }
                Some(e)
            }
            _ => None,
        };

        let (status, error) = match result {
            Ok(status) => (status, None),
            Err(e) => (TestStatus::CONFIG_ERROR, Some(e)),
        };
        tracing::debug!("exiting with status {status}");

        RunOutcome {
            status,
            error,
            report_error,
        }
    }

    fn context<'t>(&'t self, target: &'t Target) -> ToolContext<'t> {
        ToolContext {
            target,
            branch: self.settings.branch,
            test_args: &self.settings.test_args,
        }
    }

    fn execute(&self, cwd: &Path, target: &OnceCell<Target>) -> Result<TestStatus> {
        if !self.tool.available(cwd) {
            return Err(Error::ToolMissing {
                tool: self.tool.name(),
                install: self.tool.install_hint(),
            });
        }

        let located = self.tool.locate(
            &self.settings.source,
            self.settings.manifest_path.as_deref(),
            cwd,
        )?;
        let target = target.get_or_init(|| located);

        tracing::info!(
            "running {} tests under {}{}",
            target.package,
            self.tool.name(),
            if self.settings.branch {
                " with branch coverage"
            } else {
                ""
            }
        );
        let status = self.tool.run_tests(&self.context(target))?;

        if self.interrupt.is_some_and(Interrupt::is_set) {
            tracing::warn!("interrupted; reporting coverage collected so far");
        }
        tracing::info!("tests finished with status {status}");
        Ok(status)
    }

    fn report(&self, target: Option<&Target>, out: &mut dyn Write) -> Result<()> {
        let formatter = report::formatter(self.settings.output);

        let Some(target) = target else {
            emit(out, &formatter.format_empty())?;
            return Err(Error::NoData);
        };

        let lcov = self.tool.export_lcov(&self.context(target))?;
        let data = parse_lcov(&lcov)?;
        let scope = Scope::new(
            &target.package_dir,
            &target.workspace_root,
            &self.settings.omit,
        )?
        .excluding(&target.member_dirs);
        let coverage = CoverageReport::build(&data, &scope, &target.package, self.settings.branch);

        if coverage.is_empty() {
            emit(out, &formatter.format_empty())?;
            return Err(Error::NoData);
        }

        let text = formatter
            .format(&coverage)
            .map_err(|e| Error::Report(e.to_string()))?;
        emit(out, &text)
    }
}

fn emit(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
