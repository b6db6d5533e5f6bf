// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::{Value, json};

use crate::coverage::{Counts, CoverageReport, FileSummary};

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

fn summary(counts: &Counts, percent: u64, branch: bool) -> Value {
    let mut summary = json!({
        "num_statements": counts.statements,
        "covered_lines": counts.covered_statements(),
        "missing_lines": counts.missing,
        "percent_covered": percent,
    });
    if branch {
        summary["num_branches"] = json!(counts.branches);
        summary["covered_branches"] = json!(counts.covered_branches);
        summary["num_partial_branches"] = json!(counts.partial_branches);
    }
    summary
}

fn file_entry(file: &FileSummary, branch: bool) -> Value {
    let mut entry = json!({
        "summary": summary(&file.counts, file.percent(branch), branch),
        "missing_lines": file.missing_lines,
    });
    if branch {
        let partial: Vec<Value> = file
            .partial_lines
            .iter()
            .map(|(line, taken, total)| json!({ "line": line, "taken": taken, "total": total }))
            .collect();
        entry["partial_branches"] = Value::Array(partial);
    }
    entry
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &CoverageReport) -> anyhow::Result<String> {
        let mut files = serde_json::Map::new();
        for file in &report.files {
            files.insert(file.name.clone(), file_entry(file, report.branch));
        }

        let output = json!({
            "meta": {
                "source": report.source,
                "branch_coverage": report.branch,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            },
            "files": files,
            "totals": summary(&report.totals, report.percent(), report.branch),
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_empty(&self) -> String {
        r#"{"files": {}}"#.to_string()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
