// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interrupt handling.
//!
//! SIGINT and SIGTERM are recorded instead of terminating the runner. The
//! test process receives the terminal's SIGINT itself; once it exits the
//! report still runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set once an interrupt has been received.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    /// Install the process-wide handler. May only succeed once per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let interrupt = Self::default();
        let flag = Arc::clone(&interrupt.0);
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })?;
        Ok(interrupt)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}
