// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-module coverage summaries.
//!
//! Turns parsed LCOV data into report rows: files are scoped to the
//! instrumented package, omitted by glob, and summarized into statement and
//! branch counts with a compact "Missing" column.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use globset::GlobSet;

use crate::config::build_omit_set;
use crate::error::{Error, Result};
use crate::lcov::{CoverageData, FileCoverage};

/// Which files belong in the report.
#[derive(Debug, Clone)]
pub struct Scope {
    package_dir: PathBuf,
    workspace_root: PathBuf,
    omit: GlobSet,
    /// Other workspace members nested inside `package_dir`, relative to it.
    nested: Vec<PathBuf>,
}

impl Scope {
    /// `package_dir` bounds the report; names are shown relative to
    /// `workspace_root`. `omit` globs match paths relative to `package_dir`.
    pub fn new(package_dir: &Path, workspace_root: &Path, omit: &[String]) -> Result<Self> {
        let omit = build_omit_set(omit).map_err(|e| Error::Config {
            path: package_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            package_dir: package_dir.to_path_buf(),
            workspace_root: workspace_root.to_path_buf(),
            omit,
            nested: Vec::new(),
        })
    }

    /// Exclude other packages' directories. Only those nested inside
    /// `package_dir` matter; the rest are already out of scope.
    pub fn excluding(mut self, member_dirs: &[PathBuf]) -> Self {
        self.nested = member_dirs
            .iter()
            .filter_map(|dir| dir.strip_prefix(&self.package_dir).ok())
            .filter(|rel| !rel.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();
        self
    }

    /// Display name for a covered file, or `None` if it is out of scope.
    pub fn display_name(&self, path: &Path) -> Option<String> {
        let path = if path.is_relative() {
            self.workspace_root.join(path)
        } else {
            path.to_path_buf()
        };
        let within = path
            .strip_prefix(&self.package_dir)
            .map(Path::to_path_buf)
            .or_else(|_| {
                let canonical = path.canonicalize().map_err(|_| ())?;
                let package_dir = self.package_dir.canonicalize().map_err(|_| ())?;
                canonical
                    .strip_prefix(package_dir)
                    .map(Path::to_path_buf)
                    .map_err(|_| ())
            })
            .ok()?;

        if self.nested.iter().any(|dir| within.starts_with(dir)) {
            return None;
        }
        if self.omit.is_match(&within) {
            return None;
        }

        let shown = path
            .strip_prefix(&self.workspace_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.package_dir.join(&within));
        Some(slash_path(&shown))
    }
}

fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Counts shared by file rows and the total row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub statements: u64,
    pub missing: u64,
    pub branches: u64,
    pub partial_branches: u64,
    pub covered_branches: u64,
}

impl Counts {
    pub fn covered_statements(&self) -> u64 {
        self.statements - self.missing
    }

    /// Whole percent covered. Branch outcomes count when `branch` is set.
    pub fn percent(&self, branch: bool) -> u64 {
        if branch {
            display_percent(
                self.covered_statements() + self.covered_branches,
                self.statements + self.branches,
            )
        } else {
            display_percent(self.covered_statements(), self.statements)
        }
    }

    fn add(&mut self, other: &Counts) {
        self.statements += other.statements;
        self.missing += other.missing;
        self.branches += other.branches;
        self.partial_branches += other.partial_branches;
        self.covered_branches += other.covered_branches;
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub counts: Counts,
    pub missing_lines: Vec<u32>,
    /// `(line, taken, total)` for executed lines with untaken branch outcomes.
    pub partial_lines: Vec<(u32, u64, u64)>,
    /// Rendered "Missing" column.
    pub missing_text: String,
}

impl FileSummary {
    pub fn from_coverage(name: String, file: &FileCoverage, branch: bool) -> Self {
        let statements: Vec<u32> = file.lines.keys().copied().collect();
        let missed: BTreeSet<u32> = file
            .lines
            .iter()
            .filter(|(_, hits)| **hits == 0)
            .map(|(line, _)| *line)
            .collect();

        let mut counts = Counts {
            statements: statements.len() as u64,
            missing: missed.len() as u64,
            ..Counts::default()
        };

        let mut partial_lines = Vec::new();
        if branch {
            // line -> (taken outcomes, total outcomes, any outcome executed)
            let mut per_line: BTreeMap<u32, (u64, u64, bool)> = BTreeMap::new();
            for (id, taken) in &file.branches {
                let entry = per_line.entry(id.line).or_default();
                entry.1 += 1;
                if let Some(count) = taken {
                    entry.2 = true;
                    if *count > 0 {
                        entry.0 += 1;
                    }
                }
            }
            for (line, (taken, total, reached)) in per_line {
                counts.branches += total;
                counts.covered_branches += taken;
                let executed = file.lines.get(&line).map_or(reached, |hits| *hits > 0);
                if executed && taken < total {
                    counts.partial_branches += 1;
                    partial_lines.push((line, taken, total));
                }
            }
        }

        let missing_text = format_missing(&statements, &missed, &partial_lines);
        Self {
            name,
            counts,
            missing_lines: missed.into_iter().collect(),
            partial_lines,
            missing_text,
        }
    }

    pub fn percent(&self, branch: bool) -> u64 {
        self.counts.percent(branch)
    }
}

/// Report for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub source: String,
    pub branch: bool,
    /// Sorted by name.
    pub files: Vec<FileSummary>,
    pub totals: Counts,
}

impl CoverageReport {
    pub fn build(data: &CoverageData, scope: &Scope, source: &str, branch: bool) -> Self {
        let mut files: Vec<FileSummary> = data
            .files
            .iter()
            .filter_map(|(path, file)| {
                let name = scope.display_name(path);
                if name.is_none() {
                    tracing::debug!("out of scope: {}", path.display());
                }
                name.map(|name| FileSummary::from_coverage(name, file, branch))
            })
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));

        let mut totals = Counts::default();
        for file in &files {
            totals.add(&file.counts);
        }

        Self {
            source: source.to_string(),
            branch,
            files,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn percent(&self) -> u64 {
        self.totals.percent(self.branch)
    }
}

/// Whole percent, rounded, but never 100 unless complete or 0 unless nothing ran.
pub fn display_percent(covered: u64, total: u64) -> u64 {
    if total == 0 || covered >= total {
        return 100;
    }
    if covered == 0 {
        return 0;
    }
    let rounded = (covered * 200 + total) / (total * 2);
    rounded.clamp(1, 99)
}

/// Render the "Missing" column.
///
/// Missed statements collapse into ranges over consecutive *statements*
/// (non-statement lines between them do not break a range). Partial branch
/// lines are written `L[t/n]`. Entries are ordered by line.
pub fn format_missing(
    statements: &[u32],
    missed: &BTreeSet<u32>,
    partial_lines: &[(u32, u64, u64)],
) -> String {
    let mut entries: Vec<(u32, String)> = Vec::new();

    let mut run: Option<(u32, u32)> = None;
    for &line in statements {
        if missed.contains(&line) {
            run = Some(match run {
                Some((start, _)) => (start, line),
                None => (line, line),
            });
        } else if let Some((start, end)) = run.take() {
            entries.push((start, range_text(start, end)));
        }
    }
    if let Some((start, end)) = run {
        entries.push((start, range_text(start, end)));
    }

    for &(line, taken, total) in partial_lines {
        entries.push((line, format!("{line}[{taken}/{total}]")));
    }
    entries.sort_by_key(|(line, _)| *line);

    entries
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(", ")
}

fn range_text(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
