//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-style-lint.toml` in current directory
//! 4. `~/.config/sql-style-lint/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [lint]
//! dialect = "postgres"         # sqlite, mysql, postgres, tsql, snowflake, bigquery
//!
//! [rules]
//! disabled = ["L003"]
//!
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
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_LINT_DIALECT` | Default validation dialect |

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::{
    error::{AppResult, config_error},
    rules::Severity
};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lint:  LintConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub fix:   FixConfig
}

/// Lint defaults
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LintConfig {
    /// Default validation dialect name
    pub dialect: Option<String>
}

/// Rules configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesConfig {
    /// Disabled built-in rule IDs (`L001`..`L004`)
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Custom regex rules, registered in declaration order
    #[serde(default)]
    pub custom:   Vec<CustomRuleConfig>
}

/// One declarative custom rule
#[derive(Debug, Clone, Deserialize)]
pub struct CustomRuleConfig {
    /// Regex matched case-insensitively against each line
    pub pattern:  String,
    /// Message attached verbatim to every match
    pub message:  String,
    /// Severity of resulting findings
    pub severity: Severity
}

/// Auto-fix defaults
#[derive(Debug, Clone, Deserialize)]
pub struct FixConfig {
    #[serde(default = "default_true")]
    pub uppercase:    bool,
    #[serde(default = "default_true")]
    pub semicolon:    bool,
    #[serde(default = "default_indent")]
    pub indent_width: u8
}

fn default_true() -> bool {
    true
}

fn default_indent() -> u8 {
    2
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            uppercase:    true,
            semicolon:    true,
            indent_width: 2
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-style-lint.toml)
    /// 3. Config file in home directory (~/.config/sql-style-lint/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-style-lint")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".sql-style-lint.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        // Override with environment variables
        if let Ok(dialect) = env::var("SQL_LINT_DIALECT") {
            config.lint.dialect = Some(dialect);
        }

        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &PathBuf) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
