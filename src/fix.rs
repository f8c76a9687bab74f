//! Auto-fix adapter over the external reformatter.
//!
//! Fixing is a pure text-to-text transform, fully independent of linting:
//! the `sqlformat` crate handles keyword case normalization and
//! reindentation, and the semicolon policy is applied on top of its output.

use sqlformat::{FormatOptions, Indent, QueryParams};

/// Options for one auto-fix invocation.
#[derive(Debug, Clone, Copy)]
pub struct FixOptions {
    /// Normalize recognized keywords to UPPERCASE
    pub uppercase_keywords: bool,
    /// Append `;` when the reformatted text lacks a trailing one
    pub ensure_semicolon:   bool,
    /// Indent width in spaces for reindentation
    pub indent_width:       u8
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            uppercase_keywords: true,
            ensure_semicolon:   true,
            indent_width:       2
        }
    }
}

/// Reformat SQL and apply the semicolon policy.
///
/// Same input and options always yield the same output. The trailing
/// newline after an inserted `;` is part of the output format.
pub fn autofix(sql: &str, opts: &FixOptions) -> String {
    let formatted = sqlformat::format(
        sql,
        &QueryParams::None,
        FormatOptions {
            indent:                Indent::Spaces(opts.indent_width),
            uppercase:             opts.uppercase_keywords,
            lines_between_queries: 1
        }
    );

    if opts.ensure_semicolon {
        let mut fixed = formatted.trim_end().to_string();
        if !fixed.ends_with(';') {
            fixed.push(';');
        }
        // Trailing newline is part of the output format.
        fixed.push('\n');
        return fixed;
    }
    formatted
}
