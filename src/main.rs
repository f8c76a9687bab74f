//! # SQL Style Lint
//!
//! Style linter and auto-fixer for SQL snippets.
//!
//! `sql-style-lint` validates SQL syntax against a chosen dialect, runs a
//! set of deterministic style rules over the text, and can apply safe
//! auto-fixes (keyword case normalization, reindentation, trailing
//! semicolon insertion).
//!
//! # Architecture
//!
//! Linting has two independent phases that both always run:
//!
//! 1. **Syntax validation** - The text is handed to the `sqlparser` crate
//!    for the selected dialect. A parse failure is reported but never
//!    suppresses lint findings.
//!
//! 2. **Lint rules** - The rule engine runs four built-in rules plus any
//!    user-defined regex rules, and returns findings ordered by severity,
//!    line, and rule id (errors first).
//!
//! Auto-fixing is a separate pure transform: the external reformatter
//! (`sqlformat`) normalizes keyword case and indentation, then the
//! semicolon policy is applied to its output.
//!
//! # Quick Start
//!
//! ```bash
//! # Lint a file against the default dialect
//! sql-style-lint lint -i query.sql
//!
//! # Stream from stdin, validate as postgres, JSON output
//! echo "select * from users" | sql-style-lint lint -i - -d postgres -f json
//!
//! # Auto-fix in place of stdout
//! sql-style-lint fix -i query.sql > fixed.sql
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_LINT_DIALECT`)
//! 3. `.sql-style-lint.toml` in current directory
//! 4. `~/.config/sql-style-lint/config.toml`
//!
//! ## Example Configuration
//!
//! ```toml
//! [rules]
//! # Disable specific rules by ID
//! disabled = ["L003"]
//!
//! # Custom regex rules, matched case-insensitively per line
//! [[rules.custom]]
//! pattern = "\\bdelete\\b"
//! message = "Avoid DELETE without WHERE"
//! severity = "error"
//!
//! [fix]
//! uppercase = true
//! semicolon = true
//! indent_width = 2
//! ```
//!
//! # Rules
//!
//! | ID | Name | Severity | Description |
//! |----|------|----------|-------------|
//! | L001 | Trailing semicolon | warning | Statement should end with `;` |
//! | L002 | No SELECT star | error | Explicit column list preferred |
//! | L003 | Keyword casing | info | Keywords should be UPPERCASE |
//! | L004 | Keyword typo | error | Word is very close to a keyword |
//! | CUST&lt;n&gt; | Custom rule | configured | User-defined regex match |
//!
//! # Exit Codes
//!
//! The process exit code reflects the highest severity finding:
//!
//! - `0` - Success, no findings or only informational messages
//! - `1` - Warnings found
//! - `2` - Errors found
//!
//! # Modules
//!
//! - [`rules`] - Lint rule engine, built-in and custom rules
//! - [`validate`] - Dialect-aware syntax validation adapter
//! - [`fix`] - Auto-fix adapter over the external reformatter
//! - [`text`] - Line and token utilities
//! - [`config`] - Configuration loading and validation
//! - [`output`] - Result formatting (text, JSON, YAML)
//! - [`error`] - Error types and constructors

mod cli;
mod config;
mod error;
mod fix;
mod output;
mod rules;
mod text;
mod validate;

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process
};

use clap::Parser;

use crate::{
    cli::{Cli, Commands, Format},
    config::Config,
    error::{AppResult, file_read_error},
    fix::{FixOptions, autofix},
    output::{LintOutcome, OutputFormat, OutputOptions, format_lint_outcome},
    rules::{LintRunner, Severity},
    validate::{SqlDialect, validate}
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Lint {
            input,
            dialect,
            disabled,
            output_format,
            verbose,
            no_color
        } => {
            let sql = read_input(&input)?;

            // CLI dialect wins over config; default is sqlite.
            let sql_dialect = match dialect {
                Some(d) => d.into(),
                None => match &config.lint.dialect {
                    Some(name) => SqlDialect::from_name(name)?,
                    None => SqlDialect::default()
                }
            };

            let mut rules_config = config.rules;
            rules_config.disabled.extend(disabled);

            let output_opts = OutputOptions {
                format: match output_format {
                    Format::Text => OutputFormat::Text,
                    Format::Json => OutputFormat::Json,
                    Format::Yaml => OutputFormat::Yaml
                },
                colored: !no_color,
                verbose
            };

            // Validation and linting are independent: both always run,
            // and a syntax error never hides lint findings.
            let syntax_error = validate(&sql, sql_dialect).err().map(|e| e.to_string());

            let runner = LintRunner::with_config(rules_config);
            let report = runner.lint(&sql);

            let outcome = LintOutcome {
                dialect: sql_dialect.name(),
                syntax_error: syntax_error.as_deref(),
                report: &report
            };
            println!("{}", format_lint_outcome(&outcome, &output_opts));

            let exit_code = match report.max_severity() {
                Some(Severity::Error) => 2,
                Some(Severity::Warning) => 1,
                _ => 0
            };
            Ok(exit_code)
        }

        Commands::Fix {
            input,
            no_uppercase,
            no_semicolon,
            indent_width
        } => {
            let sql = read_input(&input)?;

            let opts = FixOptions {
                uppercase_keywords: config.fix.uppercase && !no_uppercase,
                ensure_semicolon:   config.fix.semicolon && !no_semicolon,
                indent_width:       indent_width.unwrap_or(config.fix.indent_width)
            };

            print!("{}", autofix(&sql, &opts));
            Ok(0)
        }
    }
}

/// Read SQL from a file path, or stdin when the path is "-".
fn read_input(path: &PathBuf) -> AppResult<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))
    }
}
