use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::validate::SqlDialect;

/// SQL Style Lint - Validate, lint, and auto-fix SQL snippets
#[derive(Parser, Debug)]
#[command(name = "sql-style-lint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate syntax and run lint rules
    Lint {
        /// Path to SQL file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// SQL dialect for syntax validation
        #[arg(short, long, value_enum, env = "SQL_LINT_DIALECT")]
        dialect: Option<Dialect>,

        /// Disable built-in rules by ID (repeatable)
        #[arg(long = "disable", value_name = "RULE_ID")]
        disabled: Vec<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Show skipped custom rules and extra detail
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Reformat SQL: keyword case, reindentation, trailing semicolon
    Fix {
        /// Path to SQL file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Keep keyword casing as written
        #[arg(long)]
        no_uppercase: bool,

        /// Do not append a trailing semicolon
        #[arg(long)]
        no_semicolon: bool,

        /// Indent width in spaces (default from config, else 2)
        #[arg(long)]
        indent_width: Option<u8>
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Dialect {
    Sqlite,
    Mysql,
    Postgres,
    Tsql,
    Snowflake,
    Bigquery
}

impl From<Dialect> for SqlDialect {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Sqlite => Self::Sqlite,
            Dialect::Mysql => Self::Mysql,
            Dialect::Postgres => Self::Postgres,
            Dialect::Tsql => Self::Tsql,
            Dialect::Snowflake => Self::Snowflake,
            Dialect::Bigquery => Self::Bigquery
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
