//!
//! Digit extraction and validation.
//!
//! All the functions here work on any text, formatted or raw,
//! and never fail. The result is always a canonical [DigitSequence]:
//!
//! * only ascii digits
//! * starts with `7` if it is not empty. A leading `8` is replaced,
//!   any other leading digit gets a `7` prepended.
//! * at most [MAX_DIGITS] digits.
//!

use crate::PhoneError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of digits of a complete phone number, including the
/// country code.
pub const MAX_DIGITS: usize = 11;

/// Country code. Every non-empty digit sequence starts with it.
pub const COUNTRY_DIGIT: char = '7';

/// Trunk prefix that is accepted instead of the country code.
pub const TRUNK_DIGIT: char = '8';

/// Canonical digits of a phone number.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: String,
}

impl DigitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.digits.as_str()
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// All digits present.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.digits.len() == MAX_DIGITS && self.digits.starts_with(COUNTRY_DIGIT)
    }

    /// The digits in the given range, clipped to the existing digits.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.digits.len());
        let start = start.min(end);
        &self.digits[start..end]
    }

    /// Consume and return the digits.
    pub fn into_string(self) -> String {
        self.digits
    }
}

impl Display for DigitSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits)
    }
}

impl AsRef<str> for DigitSequence {
    fn as_ref(&self) -> &str {
        self.digits.as_str()
    }
}

impl From<DigitSequence> for String {
    fn from(value: DigitSequence) -> Self {
        value.digits
    }
}

/// Parses only complete numbers. See [canonical].
impl FromStr for DigitSequence {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical(s)
    }
}

/// Extract the canonical digits from any text.
///
/// ```
/// use rat_phone::normalize;
///
/// assert_eq!(normalize("8 999 123-45-67").as_str(), "79991234567");
/// assert_eq!(normalize("123").as_str(), "7123");
/// assert_eq!(normalize("no digits").as_str(), "");
/// ```
pub fn normalize(raw: &str) -> DigitSequence {
    let mut digits = String::with_capacity(MAX_DIGITS);
    for c in raw.chars().filter(char::is_ascii_digit) {
        if digits.is_empty() {
            match c {
                COUNTRY_DIGIT | TRUNK_DIGIT => digits.push(COUNTRY_DIGIT),
                c => {
                    digits.push(COUNTRY_DIGIT);
                    digits.push(c);
                }
            }
        } else {
            digits.push(c);
        }
        if digits.len() >= MAX_DIGITS {
            break;
        }
    }
    DigitSequence { digits }
}

/// The digits that should be stored for some text.
///
/// Same as [normalize], exists for the callers that only want
/// to clean up a value before sending it somewhere.
#[inline]
pub fn clean_digits(text: &str) -> DigitSequence {
    normalize(text)
}

/// Text contains a complete phone number.
///
/// Empty or whitespace-only text is never valid.
#[inline]
pub fn is_valid(text: &str) -> bool {
    clean_digits(text).is_complete()
}

/// The canonical digits of a complete phone number.
///
/// Fails with [PhoneError::Incomplete] and the number of digits found
/// if the text doesn't contain a complete number.
pub fn canonical(text: &str) -> Result<DigitSequence, PhoneError> {
    let digits = clean_digits(text);
    if digits.is_complete() {
        Ok(digits)
    } else {
        Err(PhoneError::Incomplete(digits.len()))
    }
}

/// Digit test used throughout the crate.
#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// [normalize] inserts a country digit that is not part of the raw text.
pub(crate) fn adds_country_digit(raw: &str) -> bool {
    raw.chars()
        .find(|c| is_digit(*c))
        .is_some_and(|c| c != COUNTRY_DIGIT && c != TRUNK_DIGIT)
}
