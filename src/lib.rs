//! # SQL Style Lint Library
//!
//! Style linting, syntax validation, and auto-fixing for SQL snippets.

pub mod cli;
pub mod config;
pub mod error;
pub mod fix;
pub mod output;
pub mod rules;
pub mod text;
pub mod validate;
