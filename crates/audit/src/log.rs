// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit log implementation.

use crate::level::Level;
use chrono::Local;
use parking_lot::Mutex;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Process-wide audit log for a permission repair run.
///
/// Every record is kept in memory for inspection and, when the log was
/// opened with a file sink, appended to disk as one line in the format
/// `<LEVEL> <timestamp> - <message>`. The file is opened once in append
/// mode and shared for the lifetime of the run.
#[derive(Debug)]
pub struct AuditLog {
    records: Arc<Mutex<Vec<String>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl AuditLog {
    /// Create a new in-memory audit log with no file sink.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Open an audit log that appends to the file at `path`.
    ///
    /// The file is created if missing. A single missing parent directory
    /// level is created; deeper missing paths are an error.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a message at the given level.
    pub fn record(&self, level: Level, message: impl Display) {
        let now = Local::now();
        let line = format!(
            "{} {},{:03} - {}",
            level,
            now.format("%Y-%m-%d %H:%M:%S"),
            now.timestamp_subsec_millis(),
            message
        );

        self.records.lock().push(line.clone());

        // Write to the file sink if configured; one flush per record.
        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            let _ = writeln!(w, "{}", line);
            let _ = w.flush();
        }
    }

    /// Record at INFO level.
    pub fn info(&self, message: impl Display) {
        self.record(Level::Info, message);
    }

    /// Record at WARNING level.
    pub fn warning(&self, message: impl Display) {
        self.record(Level::Warning, message);
    }

    /// Record at ERROR level.
    pub fn error(&self, message: impl Display) {
        self.record(Level::Error, message);
    }

    /// All records so far, as rendered lines.
    pub fn records(&self) -> Vec<String> {
        self.records.lock().clone()
    }

    /// Records at the given level.
    pub fn records_at(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|line| line.starts_with(level.as_str()))
            .cloned()
            .collect()
    }

    /// The total number of records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AuditLog {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
