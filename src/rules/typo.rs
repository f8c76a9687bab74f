//! Keyword typo detection (L004).
//!
//! Words that are not recognized keywords but are very close to one are
//! flagged as probable typos. Similarity is the Ratcliff/Obershelp ratio
//! (`2*M / (len(a) + len(b))` over recursively matched longest common
//! substrings), with a high 0.86 cutoff to keep noise from table and
//! column aliases out.

use compact_str::CompactString;

use super::{Finding, Rule, RuleInfo, Severity};
use crate::text::{SQL_KEYWORDS, SourceText, extract_words, is_keyword};

/// Acceptance threshold on the 0-1 similarity scale.
const TYPO_CUTOFF: f64 = 0.86;

/// Minimum word length considered; shorter words are usually aliases.
const MIN_WORD_LEN: usize = 3;

/// Probable misspelling of a recognized keyword
pub struct KeywordTypo;

impl Rule for KeywordTypo {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "L004",
            name:     "Keyword typo",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &SourceText<'_>) -> Vec<Finding> {
        let info = self.info();
        let mut findings = vec![];
        for (i, line) in text.lines().iter().enumerate() {
            for word in extract_words(line) {
                let low = word.to_lowercase();
                if low.len() < MIN_WORD_LEN || is_keyword(&low) {
                    continue;
                }
                let Some(keyword) = closest_keyword(&low) else {
                    continue;
                };
                let upper = keyword.to_uppercase();
                let col = line.find(word).map_or(1, |p| p + 1);
                findings.push(Finding {
                    rule_id:    CompactString::const_new(info.id),
                    message:    format!(
                        "Possible keyword typo '{}' (did you mean '{}')?",
                        word, upper
                    ),
                    severity:   info.severity,
                    line:       i + 1,
                    col:        col.max(1),
                    suggestion: Some(format!("Replace with {}", upper))
                });
            }
        }
        findings
    }
}

/// Best keyword candidate above the cutoff, or `None`.
///
/// Iterates the keyword table in its fixed order and keeps strictly better
/// candidates only, so ties resolve deterministically.
fn closest_keyword(word: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, f64)> = None;
    for keyword in SQL_KEYWORDS {
        let score = similarity(word, keyword);
        if score >= TYPO_CUTOFF && best.is_none_or(|(_, s)| score > s) {
            best = Some((keyword, score));
        }
    }
    best.map(|(k, _)| k)
}

/// Ratcliff/Obershelp similarity between two ASCII words.
pub(crate) fn similarity(a: &str, b: &str) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_len(a.as_bytes(), b.as_bytes()) as f64 / total as f64
}

/// Total matched characters: the longest common substring plus the
/// recursively matched pieces to its left and right.
fn matching_len(a: &[u8], b: &[u8]) -> usize {
    let (ai, bi, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_len(&a[..ai], &b[..bi]) + matching_len(&a[ai + len..], &b[bi + len..])
}

/// Earliest longest common substring of two byte slices as
/// `(start_in_a, start_in_b, length)`.
fn longest_common_run(a: &[u8], b: &[u8]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut len = 0;
            while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
                len += 1;
            }
            if len > best.2 {
                best = (i, j, len);
            }
        }
    }
    best
}
