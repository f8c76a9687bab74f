use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;

use super::{Finding, Rule, RuleInfo, Severity};
use crate::text::{SourceText, extract_words, is_keyword};

static SELECT_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bselect\s+\*").expect("valid literal pattern"));

/// Statements should end with a semicolon (L001)
pub struct TrailingSemicolon;

impl Rule for TrailingSemicolon {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "L001",
            name:     "Trailing semicolon",
            severity: Severity::Warning
        }
    }

    fn check(&self, text: &SourceText<'_>) -> Vec<Finding> {
        let trimmed = text.raw().trim();
        if trimmed.is_empty() || trimmed.ends_with(';') {
            return vec![];
        }
        let info = self.info();
        vec![Finding {
            rule_id:    CompactString::const_new(info.id),
            message:    "Statement should end with ';'".to_string(),
            severity:   info.severity,
            line:       text.line_count(),
            col:        1,
            suggestion: Some("Add trailing ';'".to_string())
        }]
    }
}

/// SELECT * is considered bad practice (L002)
pub struct NoSelectStar;

impl Rule for NoSelectStar {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "L002",
            name:     "No SELECT star",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &SourceText<'_>) -> Vec<Finding> {
        let info = self.info();
        let mut findings = vec![];
        for (i, line) in text.lines().iter().enumerate() {
            if SELECT_STAR.is_match(line) {
                // Column of the first `select` occurrence on the line,
                // matching the documented first-occurrence baseline.
                let col = line.to_lowercase().find("select").map_or(1, |p| p + 1);
                findings.push(Finding {
                    rule_id:    CompactString::const_new(info.id),
                    message:    "Avoid SELECT * (enumerate columns)".to_string(),
                    severity:   info.severity,
                    line:       i + 1,
                    col:        col.max(1),
                    suggestion: Some("List explicit columns".to_string())
                });
            }
        }
        findings
    }
}

/// Recognized keywords should be written in UPPERCASE (L003)
pub struct KeywordCasing;

impl Rule for KeywordCasing {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "L003",
            name:     "Keyword casing",
            severity: Severity::Info
        }
    }

    fn check(&self, text: &SourceText<'_>) -> Vec<Finding> {
        let info = self.info();
        let mut findings = vec![];
        for (i, line) in text.lines().iter().enumerate() {
            for word in extract_words(line) {
                if !is_keyword(&word.to_lowercase()) || word == word.to_uppercase() {
                    continue;
                }
                // First occurrence of the literal word; repeated words on
                // one line all report this column.
                let col = line.find(word).map_or(1, |p| p + 1);
                findings.push(Finding {
                    rule_id:    CompactString::const_new(info.id),
                    message:    format!("Keyword '{}' should be UPPERCASE", word),
                    severity:   info.severity,
                    line:       i + 1,
                    col:        col.max(1),
                    suggestion: Some(format!("Use '{}'", word.to_uppercase()))
                });
            }
        }
        findings
    }
}
