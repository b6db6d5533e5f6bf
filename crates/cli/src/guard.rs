// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-once report finalization.
//!
//! [`ReportGuard`] holds the report step from before the test run starts.
//! It runs when the guard is finished or dropped, including while
//! unwinding, and never more than once.

/// Runs its closure exactly once: on [`finish`](ReportGuard::finish) or drop.
#[must_use = "the report runs when the guard is dropped"]
pub struct ReportGuard<F: FnOnce()> {
    report: Option<F>,
}

impl<F: FnOnce()> ReportGuard<F> {
    pub fn arm(report: F) -> Self {
        Self {
            report: Some(report),
        }
    }

    /// Run the report now.
    pub fn finish(mut self) {
        self.fire();
    }

    pub fn is_armed(&self) -> bool {
        self.report.is_some()
    }

    fn fire(&mut self) {
        if let Some(report) = self.report.take() {
            report();
        }
    }
}

impl<F: FnOnce()> Drop for ReportGuard<F> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            tracing::warn!("unwinding; reporting coverage collected so far");
        }
        self.fire();
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
