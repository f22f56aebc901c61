// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_level_names() {
    assert_eq!(Level::Info.as_str(), "INFO");
    assert_eq!(Level::Warning.as_str(), "WARNING");
    assert_eq!(Level::Error.as_str(), "ERROR");
}

#[test]
fn test_display_matches_name() {
    assert_eq!(Level::Info.to_string(), "INFO");
    assert_eq!(Level::Warning.to_string(), "WARNING");
    assert_eq!(Level::Error.to_string(), "ERROR");
}

#[test]
fn test_severity_ordering() {
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
}
