// SPDX-FileCopyrightText: 2025 sql-style-lint contributors
// SPDX-License-Identifier: MIT

use sql_style_lint::error::{
    config_error, file_read_error, invalid_pattern_error, unsupported_dialect_error,
    validation_error
};

#[test]
fn test_file_read_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/query.sql", io_error);
    assert!(error.to_string().contains("/path/to/query.sql"));
}

#[test]
fn test_config_error() {
    let error = config_error("Invalid configuration value");
    assert!(!error.to_string().is_empty());
}

#[test]
fn test_validation_error_plain() {
    let error = validation_error("sqlite", "Unexpected token");
    let msg = error.to_string();
    assert!(msg.contains("Invalid SQL (sqlite)"));
    assert!(msg.contains("Unexpected token"));
}

#[test]
fn test_validation_error_with_position() {
    let error = validation_error("postgres", "Expected: expression at Line: 3, Column 25");
    let msg = error.to_string();
    assert!(msg.contains("line 3"));
    assert!(msg.contains("column 25"));
}

#[test]
fn test_validation_error_large_position() {
    let error = validation_error("mysql", "Error at Line: 999, Column 12345");
    let _msg = error.to_string();
}

#[test]
fn test_unsupported_dialect_error_lists_supported() {
    let error = unsupported_dialect_error("oracle", &["sqlite", "mysql"]);
    let msg = error.to_string();
    assert!(msg.contains("oracle"));
    assert!(msg.contains("sqlite, mysql"));
}

#[test]
fn test_invalid_pattern_error() {
    let error = invalid_pattern_error("[unclosed", "unclosed character class");
    let msg = error.to_string();
    assert!(msg.contains("[unclosed"));
    assert!(msg.contains("unclosed character class"));
}
