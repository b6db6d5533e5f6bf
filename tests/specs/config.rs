//! Behavioral specs for config loading and validation.
//!
//! Invalid config is a configuration error: exit 2, nothing collected.

use crate::prelude::*;

#[test]
fn unsupported_version_fails() {
    let temp = Project::cargo();
    temp.config("version = 2\n");

    gridly_cov_cmd(temp.path())
        .assert()
        .code(2)
        .stdout("No data to report.\n")
        .stderr(predicates::str::contains("unsupported version 2"));
}

#[test]
fn unknown_config_key_fails() {
    let temp = Project::cargo();
    temp.config(&format!("{MINIMAL_CONFIG}\n[coverage]\nsources = \"gridly\"\n"));

    gridly_cov_cmd(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

#[test]
fn invalid_omit_glob_fails() {
    let temp = Project::cargo();
    temp.config(&format!("{MINIMAL_CONFIG}\n[coverage]\nomit = [\"[\"]\n"));

    gridly_cov_cmd(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("gridly-cov.toml"));
}

#[test]
fn config_flag_points_at_file() {
    let temp = Project::cargo();
    temp.file("ci/coverage.toml", "version = 7\n");

    gridly_cov_cmd(temp.path())
        .args(["--config", "ci/coverage.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 7"));
}

#[test]
fn config_env_var_points_at_file() {
    let temp = Project::cargo();
    temp.file("ci/coverage.toml", "version = 9\n");

    gridly_cov_cmd(temp.path())
        .env("GRIDLY_COV_CONFIG", temp.path().join("ci/coverage.toml"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 9"));
}

#[test]
fn config_is_discovered_from_subdirectory() {
    let temp = Project::cargo();
    temp.config("version = 3\n");
    temp.file("src/nested/keep.txt", "");

    gridly_cov_cmd(&temp.path().join("src/nested"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 3"));
}

#[test]
fn missing_config_file_fails() {
    let temp = Project::cargo();

    gridly_cov_cmd(temp.path())
        .args(["--config", "absent.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("absent.toml"));
}
