//! Syntax validation via the external SQL parser.
//!
//! The linter never parses SQL grammar itself; validation is delegated to
//! the `sqlparser` crate, dialect-aware, and reported independently of the
//! lint findings (an invalid snippet still gets linted).

use sqlparser::{
    dialect::{
        BigQueryDialect, Dialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
        SQLiteDialect, SnowflakeDialect
    },
    parser::Parser
};

use crate::error::{AppResult, unsupported_dialect_error, validation_error};

/// Names accepted by [`SqlDialect::from_name`], in display order.
pub const SUPPORTED_DIALECTS: [&str; 6] =
    ["sqlite", "mysql", "postgres", "tsql", "snowflake", "bigquery"];

/// SQL dialect used for syntax validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum SqlDialect {
    #[default]
    Sqlite,
    Mysql,
    Postgres,
    Tsql,
    Snowflake,
    Bigquery
}

impl SqlDialect {
    /// Resolve a dialect name from the fixed allow-list.
    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::Mysql),
            "postgres" => Ok(Self::Postgres),
            "tsql" => Ok(Self::Tsql),
            "snowflake" => Ok(Self::Snowflake),
            "bigquery" => Ok(Self::Bigquery),
            other => Err(unsupported_dialect_error(other, &SUPPORTED_DIALECTS))
        }
    }

    /// Lowercase dialect name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Tsql => "tsql",
            Self::Snowflake => "snowflake",
            Self::Bigquery => "bigquery"
        }
    }

    /// Convert to sqlparser dialect for validation.
    pub fn into_parser_dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Sqlite => Box::new(SQLiteDialect {}),
            Self::Mysql => Box::new(MySqlDialect {}),
            Self::Postgres => Box::new(PostgreSqlDialect {}),
            Self::Tsql => Box::new(MsSqlDialect {}),
            Self::Snowflake => Box::new(SnowflakeDialect {}),
            Self::Bigquery => Box::new(BigQueryDialect {})
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate SQL syntax against a dialect.
///
/// Returns `Ok(())` when the external parser accepts the text, or a
/// [`ValidationError`](crate::error::validation_error) carrying the
/// parser's message otherwise.
pub fn validate(sql: &str, dialect: SqlDialect) -> AppResult<()> {
    let parser_dialect = dialect.into_parser_dialect();
    Parser::parse_sql(parser_dialect.as_ref(), sql)
        .map(|_| ())
        .map_err(|e| validation_error(dialect.name(), e.to_string()))
}
