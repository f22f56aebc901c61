// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by permfix are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

use std::path::PathBuf;

/// `PERMFIX_PATH` — colon-separated override for the package search path.
pub const PERMFIX_PATH: &str = "PERMFIX_PATH";

/// `PERMFIX_LOG_FILE` — override for the audit log location.
pub const PERMFIX_LOG_FILE: &str = "PERMFIX_LOG_FILE";

/// `PERMFIX_PATH` — the package search path, split on `:`.
///
/// Empty segments are dropped. `None` when the variable is unset.
pub fn search_path() -> Option<Vec<String>> {
    let raw = std::env::var(PERMFIX_PATH).ok()?;
    Some(
        raw.split(':')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// `PERMFIX_LOG_FILE` — the audit log location.
pub fn log_file() -> Option<PathBuf> {
    std::env::var(PERMFIX_LOG_FILE).ok().map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
