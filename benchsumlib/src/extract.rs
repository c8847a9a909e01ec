//! Label/value extraction from a single line of benchmark output.
//!
//! A line matches when it ends in a run of ASCII digits. The value is that
//! trailing digit run; the label is the leading run of characters that are
//! neither a space nor a colon. Whatever sits between the two is ignored:
//!
//! ```text
//! alpha_fn        12      -> ("alpha_fn", 12)
//! svc: 100                -> ("svc", 100)
//! abc123                  -> ("abc", 123)
//! 999                     -> ("", 999)
//! no digits here          -> no match
//! ```
//!
//! The scan runs in two independent phases over the trimmed line rather than
//! through a backtracking pattern, so a label that ends in digits never steals
//! digits from the value.

use crate::value::Value;

/// One matched line: a grouping label and its trailing measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    /// Leading identifier-like token, possibly empty
    pub label: &'a str,
    /// Trailing integer measurement
    pub value: Value,
}

/// Extract a label and value from a line.
///
/// Surrounding whitespace is trimmed first. Returns `None` when the trimmed
/// line does not end in a digit.
///
/// # Example
///
/// ```rust
/// use benchsumlib::extract;
///
/// let record = extract("  beta_fn          7  ").unwrap();
/// assert_eq!(record.label, "beta_fn");
/// assert_eq!(record.value.as_u64(), Some(7));
///
/// assert!(extract("no digits here").is_none());
/// ```
pub fn extract(line: &str) -> Option<Record<'_>> {
    let line = line.trim();

    // Phase 1: trailing maximal digit run
    let digit_start = trailing_digits_start(line)?;

    // Phase 2: leading run without spaces or colons, clipped so the digits win
    let label_end = line
        .find(|c: char| c == ' ' || c == ':')
        .unwrap_or(line.len())
        .min(digit_start);

    Some(Record {
        label: &line[..label_end],
        value: Value::from_digits(&line[digit_start..]),
    })
}

/// Byte offset where the trailing run of ASCII digits begins.
fn trailing_digits_start(line: &str) -> Option<usize> {
    let run = line
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if run == 0 {
        None
    } else {
        Some(line.len() - run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(line: &str) -> Option<(String, String)> {
        extract(line).map(|r| (r.label.to_string(), r.value.as_digits().to_string()))
    }

    fn some(label: &str, value: &str) -> Option<(String, String)> {
        Some((label.to_string(), value.to_string()))
    }

    #[test]
    fn test_label_then_padded_value() {
        assert_eq!(pair("alpha_fn        12"), some("alpha_fn", "12"));
        assert_eq!(pair("beta_fn          7"), some("beta_fn", "7"));
    }

    #[test]
    fn test_colon_terminates_label() {
        assert_eq!(pair("svc: 100"), some("svc", "100"));
        assert_eq!(pair("svc:100"), some("svc", "100"));
    }

    #[test]
    fn test_middle_text_is_ignored() {
        assert_eq!(
            pair("bench_sort took about 1500 ns +/- 42"),
            some("bench_sort", "42")
        );
    }

    #[test]
    fn test_digits_only_line_has_empty_label() {
        assert_eq!(pair("999"), some("", "999"));
    }

    #[test]
    fn test_label_adjacent_to_digits() {
        // The digit run is maximal, the label stops where it begins
        assert_eq!(pair("abc123"), some("abc", "123"));
        assert_eq!(pair("v2_fn 8"), some("v2_fn", "8"));
        assert_eq!(pair("run42"), some("run", "42"));
    }

    #[test]
    fn test_leading_zeros_and_huge_values() {
        assert_eq!(pair("fn 0007"), some("fn", "7"));
        assert_eq!(
            pair("fn 123456789012345678901234567890"),
            some("fn", "123456789012345678901234567890")
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(pair("   gamma   5   \r"), some("gamma", "5"));
        assert_eq!(pair("\tdelta 6"), some("delta", "6"));
    }

    #[test]
    fn test_tab_does_not_end_label() {
        assert_eq!(pair("a\tb 3"), some("a\tb", "3"));
    }

    #[test]
    fn test_non_matching_lines() {
        assert_eq!(pair("no digits here"), None);
        assert_eq!(pair(""), None);
        assert_eq!(pair("    "), None);
        assert_eq!(pair("value 12 ms"), None);
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        assert_eq!(pair("fn ٣"), None);
        assert_eq!(pair("fn ٣4"), some("fn", "4"));
    }

    #[test]
    fn test_unicode_label() {
        assert_eq!(pair("größe: 10"), some("größe", "10"));
    }
}
