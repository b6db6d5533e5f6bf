//! Behavioral specs for command-line handling and exit codes.

use crate::prelude::*;

// =============================================================================
// HELP AND VERSION
// =============================================================================

#[test]
fn help_exits_successfully() {
    let temp = Project::cargo();
    gridly_cov_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("gridly-cov"))
        .stdout(predicates::str::contains("--branch"))
        .stdout(predicates::str::contains("--source"));
}

#[test]
fn version_exits_successfully() {
    let temp = Project::cargo();
    gridly_cov_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_output_format_is_usage_error() {
    let temp = Project::cargo();
    gridly_cov_cmd(temp.path())
        .args(["--output", "html"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("html"));
}

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

/// Either the coverage tool is missing or the package is not in the
/// workspace; both are configuration errors and nothing is collected.
#[test]
fn unknown_package_exits_2_with_empty_report() {
    let temp = Project::cargo();
    gridly_cov_cmd(temp.path())
        .args(["--source", "no-such-package"])
        .assert()
        .code(2)
        .stdout("No data to report.\n");
}

#[test]
fn empty_report_follows_output_format() {
    let temp = Project::cargo();
    gridly_cov_cmd(temp.path())
        .args(["--source", "no-such-package", "--output", "json"])
        .assert()
        .code(2)
        .stdout(predicates::str::contains(r#""files": {}"#));
}

/// A working directory removed out from under the process still gets the
/// empty report.
#[cfg(unix)]
#[test]
fn missing_working_directory_exits_2_with_empty_report() {
    let temp = Project::cargo();
    let gone = temp.path().join("gone");
    std::fs::create_dir(&gone).unwrap();
    let binary = assert_cmd::cargo::cargo_bin!("gridly-cov");

    let mut cmd = std::process::Command::new("sh");
    cmd.current_dir(temp.path())
        .arg("-c")
        .arg(r#"cd gone && rmdir ../gone && exec "$0""#)
        .arg(binary)
        .env_remove("GRIDLY_COV_CONFIG")
        .env_remove("GRIDLY_COV_LOG");
    cmd.assert()
        .code(2)
        .stdout("No data to report.\n")
        .stderr(predicates::str::contains("working directory"));
}
