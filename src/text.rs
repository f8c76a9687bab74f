//! Line and token utilities shared by the lint rules.
//!
//! Rules operate on a [`SourceText`], a borrowed view that bundles the raw
//! input with its line split so the split happens once per lint pass.

use smallvec::SmallVec;

/// Recognized SQL keywords, lowercase, sorted for binary search.
///
/// This is a closed set: the casing rule and the typo rule both consult it,
/// and the typo rule iterates it in this order, which makes candidate
/// selection deterministic.
pub const SQL_KEYWORDS: [&str; 39] = [
    "all",
    "and",
    "case",
    "create",
    "delete",
    "distinct",
    "else",
    "end",
    "exists",
    "from",
    "full",
    "group",
    "having",
    "in",
    "inner",
    "insert",
    "into",
    "is",
    "join",
    "left",
    "like",
    "limit",
    "null",
    "on",
    "or",
    "order",
    "outer",
    "over",
    "partition",
    "right",
    "select",
    "set",
    "table",
    "then",
    "union",
    "update",
    "when",
    "where",
    "with",
];

/// Check whether a lowercase word is a recognized SQL keyword.
pub fn is_keyword(word: &str) -> bool {
    SQL_KEYWORDS.binary_search(&word).is_ok()
}

/// Split text into lines.
///
/// Guarantees a non-empty result: empty input yields a single empty-string
/// element, so `line = lines.len()` is always a valid position.
pub fn split_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() { vec![""] } else { lines }
}

/// Extract all maximal runs of ASCII letters from a line, in order,
/// preserving original casing.
pub fn extract_words(line: &str) -> SmallVec<[&str; 8]> {
    let mut words = SmallVec::new();
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            words.push(&line[start..i]);
        } else {
            i += 1;
        }
    }
    words
}

/// Borrowed view of one lint input: raw text plus its line split.
#[derive(Debug)]
pub struct SourceText<'a> {
    raw:   &'a str,
    lines: Vec<&'a str>
}

impl<'a> SourceText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lines: split_lines(raw)
        }
    }

    /// The raw input text.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The split lines; never empty.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Number of lines; at least 1 even for empty input.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_sorted() {
        let mut sorted = SQL_KEYWORDS;
        sorted.sort_unstable();
        assert_eq!(sorted, SQL_KEYWORDS);
    }

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("select"));
        assert!(is_keyword("partition"));
        assert!(!is_keyword("SELECT"));
        assert!(!is_keyword("users"));
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_words_preserves_casing() {
        let words = extract_words("SELECT id, Name FROM t1");
        assert_eq!(words.as_slice(), ["SELECT", "id", "Name", "FROM", "t"]);
    }

    #[test]
    fn test_source_text_line_count_never_zero() {
        assert_eq!(SourceText::new("").line_count(), 1);
        assert_eq!(SourceText::new("a\nb").line_count(), 2);
    }
}
