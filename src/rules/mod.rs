//! Lint rule engine for SQL text.
//!
//! This module provides the rule execution engine that checks SQL snippets
//! for style and correctness issues. Built-in rules are types implementing
//! the [`Rule`] trait; user-defined regex rules live in a
//! [`CustomRuleStore`] owned by the runner.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  SQL text   │────▶│  LintRunner  │────▶│ LintReport  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                  ┌─────────┴─────────┐
//!                  │ built-in rules +  │
//!                  │ custom rule store │
//!                  └───────────────────┘
//! ```
//!
//! The [`LintRunner`] runs every enabled built-in rule, then every custom
//! rule, concatenates the findings, clamps their positions into the input
//! bounds, and sorts them by `(severity, line, rule_id)` with errors first.
//! That ordering is a contract consumers rely on.
//!
//! # Rules
//!
//! - `L001` - Statement should end with `;`
//! - `L002` - Avoid `SELECT *`
//! - `L003` - Keywords should be UPPERCASE
//! - `L004` - Probable keyword typo
//! - `CUST<n>` - User-defined regex rules, in registration order
//!
//! # Configuration
//!
//! Built-in rules can be disabled and custom rules declared via
//! [`RulesConfig`]:
//!
//! ```toml
//! [rules]
//! disabled = ["L003"]
//!
//! [[rules.custom]]
//! pattern = "\\bdelete\\b"
//! message = "Avoid DELETE without WHERE"
//! severity = "error"
//! ```

mod custom;
mod style;
mod typo;
mod types;

pub use custom::{CustomRule, CustomRuleStore};
pub use types::{Finding, LintReport, RuleInfo, Severity, SkippedRule};

use crate::{config::RulesConfig, text::SourceText};

/// Trait for built-in lint rules.
///
/// Rules are stateless checks over one input text. They share nothing and
/// have no ordering dependency on each other; the runner owns ordering of
/// the combined findings.
pub trait Rule {
    /// Returns metadata about this rule.
    fn info(&self) -> RuleInfo;

    /// Checks the text and returns any findings, empty if it passes.
    fn check(&self, text: &SourceText<'_>) -> Vec<Finding>;
}

/// Lint orchestrator.
///
/// Holds the enabled built-in rules and the session's custom rule store,
/// and produces ordered [`LintReport`]s. Execution is synchronous and
/// bounded by input size; a failing custom rule never aborts the pass.
///
/// # Example
///
/// ```
/// use sql_style_lint::rules::LintRunner;
///
/// let runner = LintRunner::new();
/// let report = runner.lint("select * from users");
///
/// assert_eq!(report.findings[0].rule_id, "L002");
/// ```
pub struct LintRunner {
    rules:  Vec<Box<dyn Rule>>,
    custom: CustomRuleStore
}

impl Default for LintRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl LintRunner {
    /// Create a runner with all built-in rules enabled and no custom rules.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Create a runner from configuration: disabled built-ins are dropped
    /// and declared custom rules are registered in order.
    pub fn with_config(config: RulesConfig) -> Self {
        let all_rules: Vec<Box<dyn Rule>> = vec![
            Box::new(style::TrailingSemicolon),
            Box::new(style::NoSelectStar),
            Box::new(style::KeywordCasing),
            Box::new(typo::KeywordTypo),
        ];

        let rules: Vec<Box<dyn Rule>> = all_rules
            .into_iter()
            .filter(|r| {
                !config
                    .disabled
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(r.info().id))
            })
            .collect();

        let mut custom = CustomRuleStore::new();
        for rule in config.custom {
            // Broken patterns stay registered and surface per report as
            // skipped rules; the add error itself is not fatal here.
            let _ = custom.add(rule.pattern, rule.message, rule.severity);
        }

        Self { rules, custom }
    }

    /// The session's custom rule store.
    pub fn custom_rules(&self) -> &CustomRuleStore {
        &self.custom
    }

    /// Mutable access for add/remove operations.
    pub fn custom_rules_mut(&mut self) -> &mut CustomRuleStore {
        &mut self.custom
    }

    /// Run all enabled built-in rules plus the custom rules on `sql`.
    ///
    /// Always returns a best-effort complete report: broken custom rules
    /// are listed in [`LintReport::skipped_rules`] instead of failing it.
    pub fn lint(&self, sql: &str) -> LintReport {
        let text = SourceText::new(sql);
        let mut report = LintReport::new(self.rules.len() + self.custom.len());

        let mut findings: Vec<Finding> = self
            .rules
            .iter()
            .flat_map(|rule| rule.check(&text))
            .collect();

        // Custom rules have no enable toggle beyond being in the store.
        let (custom_findings, skipped) = self.custom.evaluate(&text);
        findings.extend(custom_findings);
        report.skipped_rules = skipped;

        // A correct rule never reports out of bounds; clamp instead of
        // propagating if one ever does.
        let line_count = text.line_count();
        for finding in &mut findings {
            finding.line = finding.line.clamp(1, line_count);
            finding.col = finding.col.max(1);
        }

        // Sort by severity (errors first), then line, then rule id.
        findings.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| a.line.cmp(&b.line))
                .then_with(|| a.rule_id.cmp(&b.rule_id))
        });

        report.findings = findings;
        report
    }
}
