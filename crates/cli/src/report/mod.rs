// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage report output.
//!
//! Formats a [`CoverageReport`] as a text table or JSON.

mod json;
mod text;

use crate::cli::OutputFormat;
use crate::coverage::CoverageReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for formatting a coverage report into various output formats.
pub trait ReportFormatter {
    /// Format the report into the target format.
    fn format(&self, report: &CoverageReport) -> anyhow::Result<String>;

    /// Return output for when no coverage was collected.
    fn format_empty(&self) -> String;
}

/// Formatter for an output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
