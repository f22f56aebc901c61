// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the permission repair tool.

use clap::Parser;

/// Audit and repair filesystem permissions on package installation
/// directories.
///
/// Directories and files installed while a hardened umask was in force
/// are left too restrictive for regular users. This tool walks the
/// configured search path and either reports how many entries carry
/// non-standard permission bits or rewrites them to the canonical
/// values, logging every change.
#[derive(Parser, Debug, Clone)]
#[command(name = "permfix", version, about)]
pub struct Cli {
    /// Apply the canonical permissions to every non-conforming entry
    #[arg(short = 'f', long, conflicts_with = "query")]
    pub fix: bool,

    /// Print the number of entries with wrong permissions and exit
    #[arg(short = 'q', long)]
    pub query: bool,
}

/// Run mode selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Rewrite non-conforming entries and print the run summary.
    Fix,
    /// Count non-conforming entries without touching anything.
    Query,
}

impl Cli {
    /// The requested mode, or `None` when no mode flag was given.
    pub fn mode(&self) -> Option<RunMode> {
        match (self.fix, self.query) {
            (true, _) => Some(RunMode::Fix),
            (_, true) => Some(RunMode::Query),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
