// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compare-and-correct engine: walks scan roots and applies the policy
//! table, in query mode (count only) or fix mode (rewrite and log).

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use permfix_audit::AuditLog;
use thiserror::Error;

use crate::policy::{format_mode, EntryKind, PolicyTable, MODE_MASK};
use crate::walker::walk;

/// Failure to construct an auditor.
#[derive(Debug, Error)]
pub enum AuditorBuildError {
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of evaluating a single entry against its policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Current mode is in the acceptable set; nothing to do.
    Compliant,
    /// Mode was outside the acceptable set. Counted whether or not a
    /// corrective chmod succeeded.
    Affected,
    /// The entry disappeared between listing and checking; skipped.
    Vanished,
}

/// Per-run tallies reported by fix mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixSummary {
    /// Directories whose mode was outside the acceptable set.
    pub directories: u64,
    /// Files whose mode was outside the acceptable set.
    pub files: u64,
}

impl FixSummary {
    /// Combined tally.
    pub fn total(&self) -> u64 {
        self.directories + self.files
    }

    /// Write the three-line run summary.
    ///
    /// The trailing space on the total line is part of the output
    /// contract.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "Affected number of directories : {}", self.directories)?;
        writeln!(writer, "Affected number of files : {}", self.files)?;
        writeln!(writer, "Total number affected: {} ", self.total())
    }
}

/// Walks scan roots and audits or repairs permission bits.
///
/// The audit log is injected at construction and shared for the
/// lifetime of the run.
#[derive(Debug)]
pub struct PermissionAuditor {
    policies: PolicyTable,
    log: AuditLog,
}

impl PermissionAuditor {
    /// Create an auditor recording to the given log.
    pub fn new(log: AuditLog) -> Self {
        Self {
            policies: PolicyTable,
            log,
        }
    }

    /// Create an auditor appending to the log file at `path`.
    pub fn with_log_file(path: &Path) -> Result<Self, AuditorBuildError> {
        let log = AuditLog::open(path).map_err(|source| AuditorBuildError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(log))
    }

    /// The injected audit log.
    pub fn log(&self) -> &AuditLog {
        &self.log
    }

    /// Count the entries under `roots` whose mode is outside the
    /// acceptable set. Nothing is mutated.
    pub fn query(&self, roots: &[PathBuf]) -> u64 {
        let mut total = 0;
        for root in roots {
            for (path, kind) in walk(root) {
                if self.evaluate(&path, kind, false) == Outcome::Affected {
                    total += 1;
                }
            }
        }
        total
    }

    /// Rewrite every non-conforming entry under `roots` to its
    /// canonical mode, tallying directories and files separately.
    ///
    /// Ends the run with a completion record in the log.
    pub fn fix(&self, roots: &[PathBuf]) -> FixSummary {
        let mut summary = FixSummary::default();
        for root in roots {
            for (path, kind) in walk(root) {
                if self.evaluate(&path, kind, true) == Outcome::Affected {
                    match kind {
                        EntryKind::Directory => summary.directories += 1,
                        EntryKind::File => summary.files += 1,
                    }
                }
            }
        }
        self.log.info("=== DONE ===");
        summary
    }

    /// Evaluate one entry against the policy for its kind, optionally
    /// applying the canonical mode.
    ///
    /// A chmod failure is logged and swallowed; the entry still counts
    /// as affected. The tallies mean "entries needing correction", not
    /// "entries corrected".
    pub fn evaluate(&self, path: &Path, kind: EntryKind, apply_fix: bool) -> Outcome {
        let current = match fs::metadata(path) {
            Ok(meta) => meta.permissions().mode() & MODE_MASK,
            Err(_) => {
                self.log.warning(format_args!(
                    "** Skipping {} from checking (not exist)",
                    path.display()
                ));
                return Outcome::Vanished;
            }
        };

        let policy = self.policies.for_kind(kind);
        if policy.accepts(current) {
            return Outcome::Compliant;
        }

        if apply_fix {
            self.log.info(format_args!(
                "Fixing permission for {}. Permissions before {} and after {}",
                path.display(),
                format_mode(current),
                format_mode(policy.canonical)
            ));
            if let Err(e) =
                fs::set_permissions(path, fs::Permissions::from_mode(policy.canonical))
            {
                self.log.error(format_args!(
                    "Failed while trying to change attributes of {}: {}",
                    path.display(),
                    e
                ));
            }
        }
        Outcome::Affected
    }
}

#[cfg(test)]
#[path = "auditor_tests.rs"]
mod tests;
