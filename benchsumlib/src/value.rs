//! Arbitrary-precision measurement values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// A non-negative integer measurement of unbounded size.
///
/// Stored as normalized decimal digits: no leading zeros, and zero is `"0"`.
/// Ordering is numeric, so a longer normalized digit string is always larger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value {
    digits: String,
}

impl Value {
    /// Build a value from a run of ASCII digits. Leading zeros are dropped.
    ///
    /// Callers guarantee `digits` is non-empty and all ASCII `0-9`.
    pub(crate) fn from_digits(digits: &str) -> Self {
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Self {
            digits: digits.to_string(),
        }
    }

    /// The normalized decimal digits.
    pub fn as_digits(&self) -> &str {
        &self.digits
    }

    /// The value as a `u64`, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pads like an integer: right-aligned unless the caller asks otherwise
        f.pad_integral(true, "", &self.digits)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_u64() {
            Some(v) => serializer.serialize_u64(v),
            None => serializer.serialize_str(&self.digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zeros_are_dropped() {
        assert_eq!(Value::from_digits("007").as_digits(), "7");
        assert_eq!(Value::from_digits("000").as_digits(), "0");
        assert_eq!(Value::from_digits("0"), Value::from(0));
    }

    #[test]
    fn test_numeric_ordering() {
        let mut values = vec![
            Value::from(100),
            Value::from_digits("0050"),
            Value::from(9),
            Value::from_digits("123456789012345678901234567890"),
            Value::from(50),
        ];
        values.sort();

        let digits: Vec<&str> = values.iter().map(Value::as_digits).collect();
        assert_eq!(
            digits,
            vec!["9", "50", "50", "100", "123456789012345678901234567890"]
        );
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(Value::from_digits("18446744073709551615").as_u64(), Some(u64::MAX));
        assert_eq!(Value::from_digits("18446744073709551616").as_u64(), None);
    }

    #[test]
    fn test_display_respects_width() {
        let v = Value::from(12);
        assert_eq!(format!("{}", v), "12");
        assert_eq!(format!("{:>6}", v), "    12");
        assert_eq!(format!("{:6}", v), "    12");
        assert_eq!(format!("{:<6}|", v), "12    |");
        assert_eq!(format!("{:>6}", Value::from(1234567)), "1234567");
    }

    #[test]
    fn test_serialize_small_and_huge() {
        let small = serde_json::to_string(&Value::from(42)).unwrap();
        assert_eq!(small, "42");

        let huge = Value::from_digits("99999999999999999999999");
        assert_eq!(
            serde_json::to_string(&huge).unwrap(),
            "\"99999999999999999999999\""
        );
    }
}
