//! User-defined regex rules.
//!
//! Custom rules are session-scoped: the store starts empty, rules are
//! appended by explicit add operations and removed by index, and nothing
//! persists beyond the session. Each pattern is compiled once, case
//! insensitively, at registration time; a pattern that fails to compile
//! stays in the store but is isolated at evaluation time and surfaces as a
//! [`SkippedRule`] instead of aborting the pass.

use compact_str::{CompactString, format_compact};
use regex::{Regex, RegexBuilder};

use super::{Finding, Severity, SkippedRule};
use crate::{
    error::{AppError, AppResult, invalid_pattern_error},
    text::SourceText
};

/// One user-defined rule: a case-insensitive regex, a verbatim message,
/// and the severity attached to every match.
#[derive(Debug, Clone)]
pub struct CustomRule {
    pattern:  String,
    message:  String,
    severity: Severity,
    compiled: Result<Regex, String>
}

impl CustomRule {
    pub fn new(
        pattern: impl Into<String>,
        message: impl Into<String>,
        severity: Severity
    ) -> Self {
        let pattern = pattern.into();
        let compiled = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| e.to_string());
        Self {
            pattern,
            message: message.into(),
            severity,
            compiled
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the pattern compiled and the rule will produce findings.
    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }

    /// Compile error text for broken rules.
    pub fn compile_error(&self) -> Option<&str> {
        self.compiled.as_ref().err().map(String::as_str)
    }
}

/// Ordered, session-scoped collection of custom rules.
///
/// Rule ids are `CUST<n>` with `n` the 1-based position in the store, so
/// ids shift after a removal; they are not stable across mutations within
/// a session.
#[derive(Debug, Clone, Default)]
pub struct CustomRuleStore {
    rules: Vec<CustomRule>
}

impl CustomRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    ///
    /// A pattern that fails to compile is still stored, keeping index
    /// assignment append-only and leaving isolation to evaluation time,
    /// but the compile error is returned so the caller can report it.
    pub fn add(
        &mut self,
        pattern: impl Into<String>,
        message: impl Into<String>,
        severity: Severity
    ) -> AppResult<()> {
        let rule = CustomRule::new(pattern, message, severity);
        let err = rule
            .compile_error()
            .map(|e| invalid_pattern_error(rule.pattern(), e));
        self.rules.push(rule);
        match err {
            Some(e) => Err(e),
            None => Ok(())
        }
    }

    /// Remove the rule at `index` (0-based), returning it.
    pub fn remove(&mut self, index: usize) -> AppResult<CustomRule> {
        if index >= self.rules.len() {
            return Err(AppError::bad_request(format!(
                "No custom rule at index {} ({} registered)",
                index,
                self.rules.len()
            )));
        }
        Ok(self.rules.remove(index))
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn rules(&self) -> &[CustomRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against the text in registration order.
    ///
    /// Returns the findings plus the rules skipped because their pattern
    /// never compiled. A broken rule never affects any other rule.
    pub fn evaluate(&self, text: &SourceText<'_>) -> (Vec<Finding>, Vec<SkippedRule>) {
        let mut findings = vec![];
        let mut skipped = vec![];
        for (idx, rule) in self.rules.iter().enumerate() {
            let rule_id: CompactString = format_compact!("CUST{}", idx + 1);
            let regex = match &rule.compiled {
                Ok(regex) => regex,
                Err(error) => {
                    skipped.push(SkippedRule {
                        rule_id,
                        error: error.clone()
                    });
                    continue;
                }
            };
            for (i, line) in text.lines().iter().enumerate() {
                if let Some(m) = regex.find(line) {
                    findings.push(Finding {
                        rule_id:    rule_id.clone(),
                        message:    rule.message.clone(),
                        severity:   rule.severity,
                        line:       i + 1,
                        col:        (m.start() + 1).max(1),
                        suggestion: None
                    });
                }
            }
        }
        (findings, skipped)
    }
}
