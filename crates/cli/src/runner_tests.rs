// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::Cell;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::ErrorCategory;
use crate::test_utils::lcov_record;

use super::*;

/// Coverage tool double with scripted results.
struct FakeTool {
    available: bool,
    status: i32,
    lcov: String,
    export_fails: bool,
    panics: bool,
    runs: Cell<u32>,
    exports: Cell<u32>,
    seen_branch: Cell<Option<bool>>,
}

impl FakeTool {
    fn new(status: i32) -> Self {
        Self {
            available: true,
            status,
            lcov: sample_lcov(),
            export_fails: false,
            panics: false,
            runs: Cell::new(0),
            exports: Cell::new(0),
            seen_branch: Cell::new(None),
        }
    }
}

impl CoverageTool for FakeTool {
    fn name(&self) -> &'static str {
        "fake-cov"
    }

    fn install_hint(&self) -> &'static str {
        "install fake-cov"
    }

    fn available(&self, _cwd: &Path) -> bool {
        self.available
    }

    fn locate(&self, package: &str, _manifest: Option<&Path>, _cwd: &Path) -> Result<Target> {
        if package != "gridly" {
            return Err(Error::PackageNotFound {
                name: package.to_string(),
                workspace: PathBuf::from("/work"),
            });
        }
        Ok(Target {
            package: package.to_string(),
            package_dir: PathBuf::from("/work/crates/gridly"),
            workspace_root: PathBuf::from("/work"),
            manifest_path: PathBuf::from("/work/Cargo.toml"),
            target_directory: PathBuf::from("/work/target"),
            member_dirs: vec![PathBuf::from("/work/crates/cli")],
        })
    }

    fn run_tests(&self, ctx: &ToolContext<'_>) -> Result<TestStatus> {
        self.runs.set(self.runs.get() + 1);
        self.seen_branch.set(Some(ctx.branch));
        if self.panics {
            panic!("fake tool crashed");
        }
        Ok(TestStatus::from_code(self.status))
    }

    fn export_lcov(&self, _ctx: &ToolContext<'_>) -> Result<String> {
        self.exports.set(self.exports.get() + 1);
        if self.export_fails {
            return Err(Error::Report("no profile data".to_string()));
        }
        Ok(self.lcov.clone())
    }
}

fn sample_lcov() -> String {
    format!(
        "{}{}{}",
        lcov_record(
            "/work/crates/gridly/src/location.rs",
            &[(1, 2), (2, 2), (3, 0)],
            &[(2, 0, 0, Some(2)), (2, 0, 1, Some(0))],
        ),
        lcov_record("/work/crates/gridly/src/direction.rs", &[(1, 1)], &[]),
        lcov_record("/work/crates/cli/src/main.rs", &[(1, 0)], &[]),
    )
}

fn settings(source: &str, branch: bool) -> Settings {
    Settings {
        source: source.to_string(),
        branch,
        ..Settings::default()
    }
}

fn run(tool: &FakeTool, settings: &Settings) -> (RunOutcome, String) {
    let mut out = Vec::new();
    let outcome = CoverageRunner::new(tool, settings).run(Path::new("/work"), &mut out);
    (outcome, String::from_utf8(out).unwrap())
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn passing_run_reports_statements_only() {
    let tool = FakeTool::new(0);
    let (outcome, output) = run(&tool, &settings("gridly", false));

    assert_eq!(outcome.status, TestStatus::PASSED);
    assert!(outcome.error.is_none());
    assert!(outcome.report_error.is_none());
    assert!(output.contains("Stmts   Miss  Cover   Missing"), "{output}");
    assert!(!output.contains("Branch"), "{output}");
    assert!(output.contains("crates/gridly/src/location.rs"), "{output}");
    assert_eq!(tool.seen_branch.get(), Some(false));
}

#[test]
fn failing_run_keeps_runner_status_and_still_reports() {
    let tool = FakeTool::new(1);
    let (outcome, output) = run(&tool, &settings("gridly", false));

    assert_eq!(outcome.status.code(), 1);
    assert!(outcome.error.is_none());
    assert_eq!(output.matches("TOTAL").count(), 1, "{output}");
}

#[test]
fn branch_run_adds_branch_columns() {
    let tool = FakeTool::new(0);
    let (outcome, output) = run(&tool, &settings("gridly", true));

    assert_eq!(outcome.status, TestStatus::PASSED);
    assert!(output.contains("Branch BrPart"), "{output}");
    assert!(output.contains("2[1/2]"), "{output}");
    assert_eq!(tool.seen_branch.get(), Some(true));
}

#[test]
fn unknown_package_is_config_error_with_empty_report() {
    let tool = FakeTool::new(0);
    let (outcome, output) = run(&tool, &settings("nonexistent", false));

    assert_eq!(outcome.status, TestStatus::CONFIG_ERROR);
    let error = outcome.error.unwrap();
    assert!(matches!(error, Error::PackageNotFound { .. }));
    assert_eq!(error.category(), ErrorCategory::Configuration);
    assert_eq!(output, "No data to report.\n");
    assert_eq!(tool.runs.get(), 0);
    assert_eq!(tool.exports.get(), 0);
    assert!(matches!(outcome.report_error, Some(Error::NoData)));
}

// =============================================================================
// FINALIZATION
// =============================================================================

#[test]
fn report_runs_exactly_once() {
    for status in [0, 1, 101] {
        let tool = FakeTool::new(status);
        let (outcome, _) = run(&tool, &settings("gridly", false));
        assert_eq!(outcome.status.code(), status);
        assert_eq!(tool.runs.get(), 1);
        assert_eq!(tool.exports.get(), 1);
    }
}

#[test]
fn missing_tool_is_config_error() {
    let tool = FakeTool {
        available: false,
        ..FakeTool::new(0)
    };
    let (outcome, output) = run(&tool, &settings("gridly", false));

    assert_eq!(outcome.status, TestStatus::CONFIG_ERROR);
    match outcome.error {
        Some(Error::ToolMissing { tool, install }) => {
            assert_eq!(tool, "fake-cov");
            assert_eq!(install, "install fake-cov");
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(output, "No data to report.\n");
}

#[test]
fn report_failure_does_not_mask_test_failure() {
    let tool = FakeTool {
        export_fails: true,
        ..FakeTool::new(1)
    };
    let (outcome, output) = run(&tool, &settings("gridly", false));

    assert_eq!(outcome.status.code(), 1);
    assert!(outcome.error.is_none());
    let report_error = outcome.report_error.unwrap();
    assert!(matches!(report_error, Error::Report(_)));
    assert_eq!(report_error.category(), ErrorCategory::Reporting);
    assert!(output.is_empty());
}

#[test]
fn report_failure_does_not_mask_success() {
    let tool = FakeTool {
        lcov: "SF:/work/crates/gridly/src/lib.rs\nDA:x,1\n".to_string(),
        ..FakeTool::new(0)
    };
    let (outcome, _) = run(&tool, &settings("gridly", false));

    assert_eq!(outcome.status, TestStatus::PASSED);
    assert!(matches!(outcome.report_error, Some(Error::Lcov { .. })));
}

#[test]
fn panicking_tool_still_reports() {
    let tool = FakeTool {
        panics: true,
        ..FakeTool::new(0)
    };
    let (outcome, output) = run(&tool, &settings("gridly", false));

    assert_eq!(outcome.status, TestStatus::CONFIG_ERROR);
    assert!(matches!(outcome.error, Some(Error::Internal(_))));
    assert_eq!(tool.exports.get(), 1);
    assert!(output.contains("TOTAL"), "{output}");
}

#[test]
fn interrupted_run_reports_and_keeps_signal_status() {
    let tool = FakeTool::new(130);
    let interrupt = Interrupt::default();
    interrupt.trigger();
    let settings = settings("gridly", false);

    let mut out = Vec::new();
    let outcome = CoverageRunner::new(&tool, &settings)
        .with_interrupt(Some(&interrupt))
        .run(Path::new("/work"), &mut out);

    assert_eq!(outcome.status.code(), 130);
    assert_eq!(tool.exports.get(), 1);
    assert!(String::from_utf8(out).unwrap().contains("TOTAL"));
}

// =============================================================================
// SCOPE
// =============================================================================

#[test]
fn files_outside_package_are_not_reported() {
    let tool = FakeTool::new(0);
    let (_, output) = run(&tool, &settings("gridly", false));
    assert!(!output.contains("crates/cli"), "{output}");
}

#[test]
fn omit_patterns_drop_files() {
    let tool = FakeTool::new(0);
    let settings = Settings {
        omit: vec!["src/direction.rs".to_string()],
        ..settings("gridly", false)
    };
    let (_, output) = run(&tool, &settings);
    assert!(!output.contains("direction.rs"), "{output}");
    assert!(output.contains("location.rs"), "{output}");
}

#[test]
fn nothing_in_scope_prints_no_data() {
    let tool = FakeTool {
        lcov: lcov_record("/elsewhere/src/lib.rs", &[(1, 1)], &[]),
        ..FakeTool::new(0)
    };
    let (outcome, output) = run(&tool, &settings("gridly", false));
    assert_eq!(outcome.status, TestStatus::PASSED);
    assert_eq!(output, "No data to report.\n");
    assert!(matches!(outcome.report_error, Some(Error::NoData)));
}

#[test]
fn json_output_is_parseable() {
    let tool = FakeTool::new(0);
    let settings = Settings {
        output: OutputFormat::Json,
        ..settings("gridly", true)
    };
    let (_, output) = run(&tool, &settings);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["meta"]["branch_coverage"], true);
    assert!(value["files"]["crates/gridly/src/location.rs"].is_object());
}
