// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission repair binary entry point.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use permfix::auditor::PermissionAuditor;
use permfix::cli::{Cli, RunMode};
use permfix::output::print_error;
use permfix::{env, paths, privilege};

/// Audit log location when `PERMFIX_LOG_FILE` is not set.
const DEFAULT_LOG_FILE: &str = "/tmp/permfix.log";

fn main() {
    let cli = Cli::parse();

    if !privilege::is_root() {
        println!("You must be root to run this command. Aborting..");
        std::process::exit(2);
    }

    let Some(mode) = cli.mode() else {
        let _ = Cli::command().print_help();
        return;
    };

    let log_path = env::log_file().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let auditor = match PermissionAuditor::with_log_file(&log_path) {
        Ok(auditor) => auditor,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    let roots = paths::scan_roots(paths::search_path());

    match mode {
        RunMode::Query => {
            println!("{}", auditor.query(&roots));
        }
        RunMode::Fix => {
            println!("All information will be logged to {}", log_path.display());
            let summary = auditor.fix(&roots);
            if let Err(e) = summary.write_to(&mut std::io::stdout()) {
                print_error(e);
                std::process::exit(1);
            }
        }
    }
}
