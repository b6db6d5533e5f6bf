// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exit status captured from the test run.

use std::fmt;
use std::process::{ExitCode, ExitStatus};

/// Status of the test run, carried unmodified to the process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestStatus(i32);

impl TestStatus {
    pub const PASSED: TestStatus = TestStatus(0);

    /// The test run could not start (config, tool or package problem).
    pub const CONFIG_ERROR: TestStatus = TestStatus(2);

    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// Map a child's exit status. Death by signal N becomes `128 + N`.
    pub fn from_exit_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self(128 + signal);
            }
        }
        Self(1)
    }

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == 0
    }

    /// Process exit code. Codes that truncate to zero still report failure.
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_byte())
    }

    /// The low byte the process exits with.
    pub fn exit_byte(self) -> u8 {
        match (self.0 & 0xff) as u8 {
            0 if self.0 != 0 => 1,
            byte => byte,
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
