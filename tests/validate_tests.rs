// SPDX-FileCopyrightText: 2025 sql-style-lint contributors
// SPDX-License-Identifier: MIT

use sql_style_lint::{
    rules::LintRunner,
    validate::{SUPPORTED_DIALECTS, SqlDialect, validate}
};

#[test]
fn test_valid_query_passes() {
    assert!(validate("SELECT id, name FROM users;", SqlDialect::Sqlite).is_ok());
}

#[test]
fn test_invalid_query_rejected_with_message() {
    let err = validate("SELECT (((", SqlDialect::Sqlite).expect_err("should reject");
    assert!(err.to_string().contains("Invalid SQL"));
}

#[test]
fn test_all_supported_dialect_names_resolve() {
    for name in SUPPORTED_DIALECTS {
        assert!(SqlDialect::from_name(name).is_ok(), "dialect {}", name);
    }
}

#[test]
fn test_dialect_name_round_trip() {
    for name in SUPPORTED_DIALECTS {
        let dialect = SqlDialect::from_name(name).unwrap();
        assert_eq!(dialect.name(), name);
    }
}

#[test]
fn test_dialect_name_case_insensitive() {
    assert_eq!(SqlDialect::from_name("POSTGRES").unwrap(), SqlDialect::Postgres);
}

#[test]
fn test_unknown_dialect_descriptive_error() {
    let err = SqlDialect::from_name("oracle").expect_err("should reject");
    let msg = err.to_string();
    assert!(msg.contains("oracle"));
    assert!(msg.contains("sqlite"));
    assert!(msg.contains("bigquery"));
}

#[test]
fn test_validation_failure_does_not_suppress_findings() {
    let sql = "selec * from";
    assert!(validate(sql, SqlDialect::Sqlite).is_err());

    // Lint runs independently and still reports.
    let report = LintRunner::new().lint(sql);
    assert!(!report.findings.is_empty());
}

#[test]
fn test_dialects_differ() {
    // T-SQL TOP syntax parses under tsql but not under postgres.
    let sql = "SELECT TOP 5 id FROM users;";
    assert!(validate(sql, SqlDialect::Tsql).is_ok());
    assert!(validate(sql, SqlDialect::Postgres).is_err());
}
