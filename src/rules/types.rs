//! Type definitions for the lint rule system.
//!
//! This module defines the core types used throughout the rule engine:
//! - [`Severity`] - Finding severity levels (Info, Warning, Error)
//! - [`Finding`] - Individual lint findings with location context
//! - [`LintReport`] - Complete lint results
//! - [`SkippedRule`] - Custom rules excluded from a pass

use std::str::FromStr;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, config_error};

/// Severity level of a lint finding.
///
/// Ordered from lowest to highest severity for sorting purposes.
/// Exit codes are determined by the highest severity finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational suggestion, does not affect exit code
    Info,
    /// Warning that may indicate a problem (exit code 1)
    Warning,
    /// Critical issue that must be addressed (exit code 2)
    Error
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

impl FromStr for Severity {
    type Err = AppError;

    /// Parse a severity name. Accepts `warn` as an alias for `warning`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(config_error(format!(
                "Unknown severity '{}' (expected error, warning, or info)",
                other
            )))
        }
    }
}

/// A single lint finding.
///
/// Findings are value objects: immutable once created, compared by field
/// equality, with no identity beyond their content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Rule identifier (`L001`..`L004` for built-ins, `CUST<n>` for custom)
    pub rule_id:    CompactString,
    /// Detailed description of the finding
    pub message:    String,
    /// Severity level of this finding
    pub severity:   Severity,
    /// 1-based line number within the input text
    pub line:       usize,
    /// 1-based column of the relevant token (never below 1)
    pub col:        usize,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>
}

/// Metadata about a built-in rule for identification and configuration.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Unique rule identifier (e.g., "L001")
    pub id:       &'static str,
    /// Human-readable rule name
    pub name:     &'static str,
    /// Severity this rule reports at
    pub severity: Severity
}

/// A custom rule excluded from a lint pass because its pattern failed to
/// compile. The rule contributes zero findings; other rules are unaffected.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRule {
    /// Generated custom rule identifier (`CUST<n>`)
    pub rule_id: CompactString,
    /// Regex compile error text
    pub error:   String
}

/// Complete lint report for one input.
///
/// Use [`error_count`](Self::error_count),
/// [`warning_count`](Self::warning_count), and [`info_count`](Self::info_count)
/// to get finding counts by severity.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// All findings, sorted by (severity, line, rule id)
    pub findings:      Vec<Finding>,
    /// Number of rules executed (built-in plus custom)
    pub rules_count:   usize,
    /// Custom rules skipped due to invalid patterns
    pub skipped_rules: Vec<SkippedRule>
}

impl LintReport {
    pub fn new(rules_count: usize) -> Self {
        Self {
            findings: Vec::new(),
            rules_count,
            skipped_rules: Vec::new()
        }
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Info)
            .count()
    }

    /// Highest severity present, or `None` for a clean report.
    pub fn max_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }
}
