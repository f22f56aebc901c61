// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive directory traversal producing entry/kind pairs.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::policy::EntryKind;

/// Enumerate every directory and file under `root`, top-down.
///
/// The root itself is not yielded; traversal starts with the root's
/// children and visits each directory before its descendants. A root
/// that does not exist or cannot be read yields zero entries, and
/// per-entry traversal errors are skipped the same way.
///
/// Symbolic links get the traversal primitive's default treatment: they
/// are not followed, and a link entry is classified as a file.
pub fn walk(root: &Path) -> impl Iterator<Item = (PathBuf, EntryKind)> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| {
            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            (entry.into_path(), kind)
        })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
