// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! These are the values embedded in the binary; running `gridly-cov` with no
//! arguments and no config file uses exactly these.

/// Config file name looked up from the working directory to the git root.
pub const CONFIG_FILE: &str = "gridly-cov.toml";

/// The only supported config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Package whose tests are run and whose sources are measured.
pub const SOURCE: &str = "gridly";

/// Directory under the cargo target dir holding the exported LCOV file.
pub const EXPORT_DIR: &str = "gridly-cov";

/// Exported LCOV file name.
pub const EXPORT_FILE: &str = "lcov.info";

/// Files inside the package that are not part of its source tree.
pub fn omit() -> Vec<String> {
    vec![
        "tests/**".to_string(),
        "benches/**".to_string(),
        "examples/**".to_string(),
    ]
}

pub(super) fn source() -> String {
    SOURCE.to_string()
}

pub(super) fn version() -> u32 {
    CONFIG_VERSION
}
