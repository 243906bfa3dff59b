//! Turning raw user text into tree values.

use serde::{Deserialize, Serialize};

/// Bounds (inclusive) on the values accepted from users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: -10_000,
            max: 10_000,
        }
    }
}

impl ValueRange {
    /// A range from `min` to `max`, both included.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `value` is accepted.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Why a piece of text was not accepted as a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The text does not start with an integer.
    #[error("`{0}` is not a valid number")]
    NotANumber(String),
    /// The integer falls outside the accepted range.
    #[error("value {value} is out of range ({min}..={max})")]
    OutOfRange {
        /// The integer as written.
        value: String,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
}

/// Reads the integer at the start of `raw`.
///
/// Leading whitespace and a single sign are allowed, and anything after the digits is ignored, so
/// `" 42px"` reads as `42`.
///
/// # Examples
///
/// ```
/// use bst_viz::input::{parse_value, InputError, ValueRange};
///
/// let range = ValueRange::default();
/// assert_eq!(parse_value("42", &range), Ok(42));
/// assert_eq!(parse_value("  -7 apples", &range), Ok(-7));
/// assert!(matches!(parse_value("abc", &range), Err(InputError::NotANumber(_))));
/// assert!(matches!(parse_value("10001", &range), Err(InputError::OutOfRange { .. })));
/// ```
pub fn parse_value(raw: &str, range: &ValueRange) -> Result<i64, InputError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return Err(InputError::NotANumber(raw.to_owned()));
    }

    let literal = if negative {
        format!("-{digits}")
    } else {
        digits.to_owned()
    };
    let out_of_range = |value: String| InputError::OutOfRange {
        value,
        min: range.min,
        max: range.max,
    };

    // Digits that overflow `i64` are certainly out of range too.
    match literal.parse::<i64>() {
        Ok(value) if range.contains(value) => Ok(value),
        _ => Err(out_of_range(literal)),
    }
}
