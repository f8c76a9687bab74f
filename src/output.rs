use colored::Colorize;
use serde::Serialize;

use crate::rules::{Finding, LintReport, Severity};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Full lint outcome: syntax status plus the ordered findings.
///
/// Validation and linting are independent; a syntax error never suppresses
/// the findings, so both are always present here.
#[derive(Debug, Serialize)]
pub struct LintOutcome<'a> {
    /// Dialect the syntax check ran against
    pub dialect:      &'a str,
    /// Validator message, absent when the syntax is valid
    pub syntax_error: Option<&'a str>,
    /// The lint report
    pub report:       &'a LintReport
}

/// Format a lint outcome based on output options
pub fn format_lint_outcome(outcome: &LintOutcome<'_>, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(outcome).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(outcome).unwrap_or_default(),
        OutputFormat::Text => format_text_outcome(outcome, opts)
    }
}

fn format_text_outcome(outcome: &LintOutcome<'_>, opts: &OutputOptions) -> String {
    let mut out = String::new();

    match outcome.syntax_error {
        None => {
            let line = format!("Syntax OK ({})", outcome.dialect);
            if opts.colored {
                out.push_str(&line.green().to_string());
            } else {
                out.push_str(&line);
            }
            out.push('\n');
        }
        Some(err) => {
            let line = format!("Syntax error ({})", outcome.dialect);
            if opts.colored {
                out.push_str(&line.red().bold().to_string());
            } else {
                out.push_str(&line);
            }
            out.push('\n');
            out.push_str(&format!("  {}\n", err));
        }
    }
    out.push('\n');

    let report = outcome.report;
    if report.findings.is_empty() {
        out.push_str("No lint findings.\n");
    } else {
        for finding in &report.findings {
            out.push_str(&format_finding(finding, opts));
        }
        out.push('\n');
        out.push_str(&format!(
            "{} finding(s): {} error(s), {} warning(s), {} info\n",
            report.findings.len(),
            report.error_count(),
            report.warning_count(),
            report.info_count()
        ));
    }

    if opts.verbose && !report.skipped_rules.is_empty() {
        out.push('\n');
        for skipped in &report.skipped_rules {
            out.push_str(&format!(
                "Skipped {}: invalid pattern ({})\n",
                skipped.rule_id, skipped.error
            ));
        }
    }

    out
}

fn format_finding(finding: &Finding, opts: &OutputOptions) -> String {
    let severity = if opts.colored {
        match finding.severity {
            Severity::Error => finding.severity.to_string().red().bold().to_string(),
            Severity::Warning => finding.severity.to_string().yellow().to_string(),
            Severity::Info => finding.severity.to_string().cyan().to_string()
        }
    } else {
        finding.severity.to_string()
    };

    let mut line = format!(
        "{:>4}:{:<3} {:<5} {:<5} {}",
        finding.line, finding.col, severity, finding.rule_id, finding.message
    );
    if let Some(suggestion) = &finding.suggestion {
        line.push_str(&format!("  [{}]", suggestion));
    }
    line.push('\n');
    line
}
