// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use similar_asserts::assert_eq;

use super::*;
use crate::coverage::Scope;
use crate::lcov::parse_lcov;
use crate::test_utils::lcov_record;

fn sample_report(branch: bool) -> CoverageReport {
    let content = format!(
        "{}{}",
        lcov_record(
            "/work/crates/gridly/src/location.rs",
            &[(1, 4), (2, 4)],
            &[],
        ),
        lcov_record(
            "/work/crates/gridly/src/direction.rs",
            &[(1, 1), (2, 0), (3, 0)],
            &[(1, 0, 0, Some(1)), (1, 0, 1, Some(0))],
        ),
    );
    let data = parse_lcov(&content).unwrap();
    let scope = Scope::new(Path::new("/work/crates/gridly"), Path::new("/work"), &[]).unwrap();
    CoverageReport::build(&data, &scope, "gridly", branch)
}

#[test]
fn statement_table() {
    let output = TextFormatter.format(&sample_report(false)).unwrap();
    assert_eq!(
        output,
        "\
Name                            Stmts   Miss  Cover   Missing
-------------------------------------------------------------
crates/gridly/src/direction.rs      3      2    33%   2-3
crates/gridly/src/location.rs       2      0   100%
-------------------------------------------------------------
TOTAL                               5      2    60%
"
    );
}

#[test]
fn branch_table_adds_columns_and_partial_lines() {
    let output = TextFormatter.format(&sample_report(true)).unwrap();
    assert_eq!(
        output,
        "\
Name                            Stmts   Miss Branch BrPart  Cover   Missing
---------------------------------------------------------------------------
crates/gridly/src/direction.rs      3      2      2      1    40%   1[1/2], 2-3
crates/gridly/src/location.rs       2      0      0      0   100%
---------------------------------------------------------------------------
TOTAL                               5      2      2      1    57%
"
    );
}

#[test]
fn short_names_pad_to_total_width() {
    let data = parse_lcov(&lcov_record("/p/a.rs", &[(1, 1)], &[])).unwrap();
    let scope = Scope::new(Path::new("/p"), Path::new("/p"), &[]).unwrap();
    let report = CoverageReport::build(&data, &scope, "p", false);
    let output = TextFormatter.format(&report).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert!(lines[0].starts_with("Name   Stmts"), "{}", lines[0]);
    assert!(lines[4].starts_with("TOTAL      1"), "{}", lines[4]);
}

#[test]
fn empty_output() {
    assert_eq!(TextFormatter.format_empty(), "No data to report.\n");
}
