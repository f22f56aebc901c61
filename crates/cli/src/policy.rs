// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission policy table: acceptable and canonical mode bits per kind.

/// Permission bits considered by the policy (the low 12 bits of a mode).
pub const MODE_MASK: u32 = 0o7777;

/// Kind of filesystem entry encountered during traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A directory.
    Directory,
    /// Anything that is not a directory, symlinks included.
    File,
}

/// Acceptable and canonical permission values for one entry kind.
#[derive(Clone, Copy, Debug)]
pub struct PermissionPolicy {
    /// Mode values treated as already correct and left untouched.
    pub acceptable: &'static [u32],
    /// Target mode applied to a non-conforming entry.
    pub canonical: u32,
}

impl PermissionPolicy {
    /// Whether the given mode bits are already compliant.
    ///
    /// Exact match against the acceptable set. An entry with extra bits
    /// set (setuid, setgid, sticky) never matches, even when the lower
    /// bits agree.
    pub fn accepts(&self, mode: u32) -> bool {
        self.acceptable.contains(&(mode & MODE_MASK))
    }
}

const DIRECTORY_POLICY: PermissionPolicy = PermissionPolicy {
    acceptable: &[0o755],
    canonical: 0o755,
};

// Some installed files are intentionally executable, so two values are
// acceptable here.
const FILE_POLICY: PermissionPolicy = PermissionPolicy {
    acceptable: &[0o755, 0o644],
    canonical: 0o644,
};

/// Lookup table from entry kind to permission policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolicyTable;

impl PolicyTable {
    /// The policy applied to entries of the given kind.
    pub fn for_kind(&self, kind: EntryKind) -> PermissionPolicy {
        match kind {
            EntryKind::Directory => DIRECTORY_POLICY,
            EntryKind::File => FILE_POLICY,
        }
    }
}

/// Render mode bits the way they appear in log lines (4-digit octal).
pub fn format_mode(mode: u32) -> String {
    format!("{:04o}", mode & MODE_MASK)
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
