pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create validation error for a rejected SQL snippet
pub fn validation_error(dialect: &str, message: impl Into<String>) -> AppError {
    let msg = message.into();
    AppError::bad_request(format_sql_error(
        &format!("Invalid SQL ({})", dialect),
        &msg
    ))
}

/// Create error for a dialect outside the supported set
pub fn unsupported_dialect_error(name: &str, supported: &[&str]) -> AppError {
    AppError::bad_request(format!(
        "Unsupported dialect '{}' (supported: {})",
        name,
        supported.join(", ")
    ))
}

/// Create error for a custom rule pattern that failed to compile
pub fn invalid_pattern_error(pattern: &str, message: impl Into<String>) -> AppError {
    AppError::bad_request(format!(
        "Invalid custom rule pattern '{}': {}",
        pattern,
        message.into()
    ))
}

/// Format SQL error with position highlighting
///
/// sqlparser reports positions as "... at Line: X, Column Y"; when present
/// they are pulled up into the first line of the message.
fn format_sql_error(prefix: &str, message: &str) -> String {
    if let Some(pos) = extract_position(message) {
        format!(
            "{} at line {}, column {}:\n  {}",
            prefix, pos.line, pos.column, message
        )
    } else {
        format!("{}:\n  {}", prefix, message)
    }
}

struct SqlPosition {
    line:   usize,
    column: usize
}

fn extract_position(message: &str) -> Option<SqlPosition> {
    let line_marker = "Line: ";
    let col_marker = ", Column ";

    let line_start = message.find(line_marker)?;
    let line_num_start = line_start + line_marker.len();
    let col_start = message[line_num_start..].find(col_marker)?;

    let line_str = &message[line_num_start..line_num_start + col_start];
    let col_num_start = line_num_start + col_start + col_marker.len();

    let col_end = message[col_num_start..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(message.len() - col_num_start);
    let col_str = &message[col_num_start..col_num_start + col_end];

    match (line_str.parse(), col_str.parse()) {
        (Ok(line), Ok(column)) => Some(SqlPosition { line, column }),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_position_found() {
        let msg = "Expected: identifier, found: EOF at Line: 2, Column 5";
        let pos = extract_position(msg).unwrap();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 5);
    }

    #[test]
    fn test_extract_position_missing() {
        assert!(extract_position("no position here").is_none());
    }
}
