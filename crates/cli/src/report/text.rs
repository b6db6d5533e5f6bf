// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use crate::coverage::{Counts, CoverageReport};

use super::ReportFormatter;

/// Text format report formatter.
pub struct TextFormatter;

/// Width of each numeric column.
const COLUMN_WIDTH: usize = 7;

/// Gap before the "Missing" column.
const MISSING_GAP: &str = "   ";

impl TextFormatter {
    fn headers(branch: bool) -> &'static [&'static str] {
        if branch {
            &["Stmts", "Miss", "Branch", "BrPart", "Cover"]
        } else {
            &["Stmts", "Miss", "Cover"]
        }
    }

    fn values(counts: &Counts, percent: u64, branch: bool) -> Vec<String> {
        let mut values = vec![counts.statements.to_string(), counts.missing.to_string()];
        if branch {
            values.push(counts.branches.to_string());
            values.push(counts.partial_branches.to_string());
        }
        values.push(format!("{percent}%"));
        values
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &CoverageReport) -> anyhow::Result<String> {
        let name_width = report
            .files
            .iter()
            .map(|f| f.name.len())
            .chain(["Name".len(), "TOTAL".len()])
            .max()
            .unwrap_or(0);

        let mut header = format!("{:<name_width$}", "Name");
        for title in Self::headers(report.branch) {
            write!(header, "{title:>COLUMN_WIDTH$}")?;
        }
        write!(header, "{MISSING_GAP}Missing")?;
        let rule = "-".repeat(header.len());

        let mut output = String::new();
        writeln!(output, "{header}")?;
        writeln!(output, "{rule}")?;

        for file in &report.files {
            let mut row = format!("{:<name_width$}", file.name);
            for value in Self::values(&file.counts, file.percent(report.branch), report.branch) {
                write!(row, "{value:>COLUMN_WIDTH$}")?;
            }
            if !file.missing_text.is_empty() {
                write!(row, "{MISSING_GAP}{}", file.missing_text)?;
            }
            writeln!(output, "{row}")?;
        }

        writeln!(output, "{rule}")?;
        let mut total = format!("{:<name_width$}", "TOTAL");
        for value in Self::values(&report.totals, report.percent(), report.branch) {
            write!(total, "{value:>COLUMN_WIDTH$}")?;
        }
        writeln!(output, "{total}")?;

        Ok(output)
    }

    fn format_empty(&self) -> String {
        "No data to report.\n".to_string()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
