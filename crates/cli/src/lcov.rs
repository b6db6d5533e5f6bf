// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! LCOV tracefile parsing.
//!
//! Only the records needed for a per-module report are read: `SF` (source
//! file), `DA` (line hits), `BRDA` (branch outcomes) and `end_of_record`.
//! Function and summary records (`FN*`, `LF`, `LH`, `BRF`, `BRH`) are
//! recomputed from the detail records and ignored here. Repeated records for
//! the same file are merged by summing hits.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// One branch outcome, as identified by LCOV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BranchId {
    pub line: u32,
    pub block: u32,
    pub branch: u32,
}

/// Coverage for one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCoverage {
    /// Hit count per instrumented line.
    pub lines: BTreeMap<u32, u64>,
    /// Times each branch outcome was taken; `None` when its block never ran.
    pub branches: BTreeMap<BranchId, Option<u64>>,
}

impl FileCoverage {
    fn merge_line(&mut self, line: u32, hits: u64) {
        *self.lines.entry(line).or_insert(0) += hits;
    }

    fn merge_branch(&mut self, id: BranchId, taken: Option<u64>) {
        let entry = self.branches.entry(id).or_insert(None);
        *entry = match (*entry, taken) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };
    }
}

/// Parsed tracefile, keyed by source path as written in `SF`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageData {
    pub files: BTreeMap<PathBuf, FileCoverage>,
}

impl CoverageData {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Parse an LCOV tracefile.
pub fn parse_lcov(content: &str) -> Result<CoverageData> {
    let mut data = CoverageData::default();
    let mut current: Option<(PathBuf, FileCoverage)> = None;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = |message: &str| Error::Lcov {
            line: line_no,
            message: message.to_string(),
        };

        if line == "end_of_record" {
            let (path, file) = current
                .take()
                .ok_or_else(|| malformed("end_of_record without SF"))?;
            merge_file(&mut data, path, file);
            continue;
        }

        let Some((tag, value)) = line.split_once(':') else {
            continue;
        };

        match tag {
            "SF" => {
                if let Some((path, file)) = current.take() {
                    merge_file(&mut data, path, file);
                }
                current = Some((PathBuf::from(value), FileCoverage::default()));
            }
            "DA" => {
                let (_, file) = current
                    .as_mut()
                    .ok_or_else(|| malformed("DA outside of a record"))?;
                let mut fields = value.split(',');
                let line_number = parse_field(fields.next(), "DA line", line_no)?;
                let hits = parse_field(fields.next(), "DA count", line_no)?;
                file.merge_line(line_number, hits);
            }
            "BRDA" => {
                let (_, file) = current
                    .as_mut()
                    .ok_or_else(|| malformed("BRDA outside of a record"))?;
                let mut fields = value.split(',');
                let id = BranchId {
                    line: parse_field(fields.next(), "BRDA line", line_no)?,
                    block: parse_field(fields.next(), "BRDA block", line_no)?,
                    branch: parse_field(fields.next(), "BRDA branch", line_no)?,
                };
                let taken = match fields.next().map(str::trim) {
                    Some("-") => None,
                    other => Some(parse_field(other, "BRDA taken", line_no)?),
                };
                file.merge_branch(id, taken);
            }
            _ => {}
        }
    }

    // Tolerate a final record missing its terminator.
    if let Some((path, file)) = current {
        merge_file(&mut data, path, file);
    }

    Ok(data)
}

fn merge_file(data: &mut CoverageData, path: PathBuf, file: FileCoverage) {
    let entry = data.files.entry(path).or_default();
    for (line, hits) in file.lines {
        entry.merge_line(line, hits);
    }
    for (id, taken) in file.branches {
        entry.merge_branch(id, taken);
    }
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, what: &str, line: usize) -> Result<T> {
    let field = field.ok_or_else(|| Error::Lcov {
        line,
        message: format!("missing {what}"),
    })?;
    field.trim().parse().map_err(|_| Error::Lcov {
        line,
        message: format!("invalid {what}: {field:?}"),
    })
}

#[cfg(test)]
#[path = "lcov_tests.rs"]
mod tests;
