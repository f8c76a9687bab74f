// SPDX-FileCopyrightText: 2025 sql-style-lint contributors
// SPDX-License-Identifier: MIT

use sql_style_lint::{
    config::RulesConfig,
    rules::{LintReport, LintRunner, Severity},
    text::split_lines
};

fn lint(sql: &str) -> LintReport {
    LintRunner::new().lint(sql)
}

fn rule_ids(report: &LintReport) -> Vec<String> {
    report.findings.iter().map(|f| f.rule_id.to_string()).collect()
}

#[test]
fn test_empty_input_no_findings() {
    assert!(lint("").findings.is_empty());
}

#[test]
fn test_whitespace_only_no_findings() {
    assert!(lint("   \n\t\n  ").findings.is_empty());
}

#[test]
fn test_missing_semicolon_flagged_on_last_line() {
    let sql = "SELECT id\nFROM users";
    let report = lint(sql);
    let finding = report
        .findings
        .iter()
        .find(|f| f.rule_id == "L001")
        .expect("L001 finding");
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(finding.line, split_lines(sql).len());
    assert_eq!(finding.col, 1);
    assert_eq!(finding.suggestion.as_deref(), Some("Add trailing ';'"));
}

#[test]
fn test_trailing_semicolon_ok() {
    let report = lint("SELECT id FROM users;");
    assert!(!rule_ids(&report).contains(&"L001".to_string()));
}

#[test]
fn test_semicolon_after_trailing_whitespace_ok() {
    let report = lint("SELECT id FROM users;   \n");
    assert!(!rule_ids(&report).contains(&"L001".to_string()));
}

#[test]
fn test_select_star_flagged() {
    let report = lint("SELECT * FROM users;");
    let finding = report
        .findings
        .iter()
        .find(|f| f.rule_id == "L002")
        .expect("L002 finding");
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.line, 1);
    assert_eq!(finding.col, 1);
}

#[test]
fn test_select_star_case_insensitive() {
    let report = lint("select  *\nfrom users;");
    assert!(rule_ids(&report).contains(&"L002".to_string()));
}

#[test]
fn test_select_star_column_of_first_select() {
    let report = lint("    select * from users;");
    let finding = report
        .findings
        .iter()
        .find(|f| f.rule_id == "L002")
        .expect("L002 finding");
    assert_eq!(finding.col, 5);
}

#[test]
fn test_explicit_columns_ok() {
    let report = lint("SELECT id, name FROM users;");
    assert!(!rule_ids(&report).contains(&"L002".to_string()));
}

#[test]
fn test_lowercase_keyword_flagged() {
    let report = lint("select id FROM users;");
    let finding = report
        .findings
        .iter()
        .find(|f| f.rule_id == "L003")
        .expect("L003 finding");
    assert_eq!(finding.severity, Severity::Info);
    assert_eq!(finding.message, "Keyword 'select' should be UPPERCASE");
    assert_eq!(finding.suggestion.as_deref(), Some("Use 'SELECT'"));
    assert_eq!(finding.col, 1);
}

#[test]
fn test_mixed_case_keyword_flagged() {
    let report = lint("Select id FROM users;");
    assert!(rule_ids(&report).contains(&"L003".to_string()));
}

#[test]
fn test_uppercase_keywords_ok() {
    let report = lint("SELECT id FROM users WHERE id = 1;");
    assert!(!rule_ids(&report).contains(&"L003".to_string()));
}

#[test]
fn test_keyword_on_each_line_reported_separately() {
    let report = lint("select id\nfrom users;");
    let count = report.findings.iter().filter(|f| f.rule_id == "L003").count();
    assert_eq!(count, 2);
}

#[test]
fn test_typo_selec_suggests_select() {
    let report = lint("SELEC id FROM t;");
    let finding = report
        .findings
        .iter()
        .find(|f| f.rule_id == "L004")
        .expect("L004 finding");
    assert_eq!(finding.severity, Severity::Error);
    assert!(finding.message.contains("'SELEC'"));
    assert!(finding.message.contains("'SELECT'"));
    assert_eq!(finding.suggestion.as_deref(), Some("Replace with SELECT"));
    assert_eq!(finding.line, 1);
    assert_eq!(finding.col, 1);
}

#[test]
fn test_typo_rule_ignores_short_words() {
    // "fro" is close to "from" but aliases of length < 3 are never checked;
    // "t1"-style aliases stay quiet.
    let report = lint("SELECT id FROM users AS u;");
    assert!(!rule_ids(&report).contains(&"L004".to_string()));
}

#[test]
fn test_typo_rule_ignores_exact_keywords() {
    let report = lint("SELECT DISTINCT id FROM users;");
    assert!(!rule_ids(&report).contains(&"L004".to_string()));
}

#[test]
fn test_typo_rule_ignores_ordinary_identifiers() {
    let report = lint("SELECT customer_name FROM customers;");
    assert!(!rule_ids(&report).contains(&"L004".to_string()));
}

#[test]
fn test_scenario_select_star_from_users() {
    // All built-ins enabled: L002 error, L001 warning, two L003 infos,
    // in that severity order.
    let report = lint("select * from users");
    let ids = rule_ids(&report);
    assert_eq!(ids, ["L002", "L001", "L003", "L003"]);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.info_count(), 2);
}

#[test]
fn test_scenario_clean_query_no_findings() {
    let report = lint("SELECT id, name FROM users;");
    assert!(report.findings.is_empty());
    assert!(report.max_severity().is_none());
}

#[test]
fn test_findings_sorted_by_severity_line_rule() {
    let report = lint("select id\nfrom users where selct = 1");
    for pair in report.findings.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let key_a = (std::cmp::Reverse(a.severity), a.line, a.rule_id.clone());
        let key_b = (std::cmp::Reverse(b.severity), b.line, b.rule_id.clone());
        assert!(key_a <= key_b, "findings out of order: {:?} then {:?}", a, b);
    }
}

#[test]
fn test_disabled_rule_produces_no_findings() {
    let config = RulesConfig {
        disabled: vec!["L003".to_string()],
        ..Default::default()
    };
    let runner = LintRunner::with_config(config);
    let report = runner.lint("select * from users");
    assert!(!rule_ids(&report).contains(&"L003".to_string()));
    assert!(rule_ids(&report).contains(&"L002".to_string()));
}

#[test]
fn test_disabled_rule_id_case_insensitive() {
    let config = RulesConfig {
        disabled: vec!["l001".to_string()],
        ..Default::default()
    };
    let runner = LintRunner::with_config(config);
    let report = runner.lint("SELECT id FROM users");
    assert!(!rule_ids(&report).contains(&"L001".to_string()));
}

#[test]
fn test_all_columns_within_bounds() {
    let sql = "select * from users\nwhere name like '%x'";
    let report = lint(sql);
    let line_count = split_lines(sql).len();
    for finding in &report.findings {
        assert!(finding.line >= 1 && finding.line <= line_count);
        assert!(finding.col >= 1);
    }
}
