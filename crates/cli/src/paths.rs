// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search-path collection and filtering for scan roots.

use std::path::PathBuf;

use crate::env;

/// Path prefixes excluded from scanning.
///
/// The test is a literal string prefix, not a path-segment one, so
/// `/mnt2` is excluded along with `/mnt/data`.
pub const SKIP_PREFIXES: &[&str] = &["/home", "/mnt"];

/// Roots scanned when `PERMFIX_PATH` is not set.
pub const DEFAULT_SEARCH_PATH: &[&str] =
    &["/usr/local/lib", "/usr/lib", "/usr/libexec", "/opt"];

/// The ordered search path for this run.
///
/// Read from `PERMFIX_PATH` when set, otherwise the built-in defaults.
pub fn search_path() -> Vec<String> {
    env::search_path().unwrap_or_else(|| {
        DEFAULT_SEARCH_PATH.iter().map(|s| s.to_string()).collect()
    })
}

/// Filter a search path down to the roots to scan.
///
/// Order and duplicates are preserved; a root appearing twice is walked
/// twice.
pub fn scan_roots<I, S>(search_path: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    search_path
        .into_iter()
        .filter(|path| !is_skipped(path.as_ref()))
        .map(|path| PathBuf::from(path.as_ref()))
        .collect()
}

/// Whether a root is excluded by the skip-prefix list.
pub fn is_skipped(path: &str) -> bool {
    SKIP_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
