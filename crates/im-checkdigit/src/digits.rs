//! Digit strings and check digit symbols

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

/// Separators stripped by [`normalize`]
pub const DEFAULT_SEPARATORS: [char; 2] = ['-', ' '];

/// Remove every occurrence of the given separator characters.
///
/// Nothing else is stripped: whitespace survives unless it is listed.
pub fn strip_separators(input: &str, separators: &[char]) -> String {
    input.chars().filter(|c| !separators.contains(c)).collect()
}

/// Remove hyphens and spaces
pub fn normalize(input: &str) -> String {
    strip_separators(input, &DEFAULT_SEPARATORS)
}

/// Position and value of the first character that is not an ASCII digit.
pub(crate) fn first_non_digit(input: &str) -> Option<(usize, char)> {
    input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
}

/// Numeric value of an ASCII digit byte.
pub(crate) fn digit_value(byte: u8) -> u32 {
    u32::from(byte - b'0')
}

/// A non-empty string made only of ASCII decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitString(String);

impl DigitString {
    /// Accept any non-empty all-digit string.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(CheckError::Empty);
        }
        if let Some((position, found)) = first_non_digit(input) {
            return Err(CheckError::InvalidCharacter { position, found });
        }
        Ok(Self(input.to_string()))
    }

    /// Accept an all-digit string of exactly `expected` characters.
    ///
    /// Length is checked before content, so `"12a"` against 4 reports
    /// the length.
    pub fn with_length(input: &str, expected: usize) -> Result<Self> {
        let actual = input.chars().count();
        if actual == 0 {
            return Err(CheckError::Empty);
        }
        if actual != expected {
            return Err(CheckError::WrongLength { expected, actual });
        }
        Self::parse(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit values, left to right.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.0.bytes().map(digit_value)
    }

    /// Everything but the last digit, and the last digit as a character.
    pub fn split_check(&self) -> (&str, char) {
        let (payload, check) = self.0.split_at(self.0.len() - 1);
        (payload, char::from(check.as_bytes()[0]))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A check digit, 0-9, or 10 for the ISBN-10 symbol `X`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckDigit(u8);

impl CheckDigit {
    pub(crate) fn new(value: u8) -> Self {
        debug_assert!(value <= 10, "check digit out of range: {value}");
        Self(value)
    }

    /// Build from a raw value, rejecting anything above 10.
    pub fn from_value(value: u8) -> Option<Self> {
        (value <= 10).then_some(Self(value))
    }

    /// Parse a check digit symbol (`0`-`9`, or `X`/`x`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Self(10)),
            _ => c.to_digit(10).map(|d| Self(d as u8)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The symbol written on the code.
    pub fn to_char(&self) -> char {
        match self.0 {
            10 => 'X',
            v => char::from(b'0' + v),
        }
    }

    /// Whether `c` is the written form of this check digit.
    pub fn matches(&self, c: char) -> bool {
        Self::from_char(c) == Some(*self)
    }
}

/// Compare the last digit of `code` against the one `check_digit_of`
/// recomputes from the rest.
pub(crate) fn verify_check_digit(
    code: &DigitString,
    check_digit_of: fn(&str) -> CheckDigit,
) -> Result<()> {
    let (payload, found) = code.split_check();
    let expected = check_digit_of(payload);
    if expected.matches(found) {
        Ok(())
    } else {
        Err(CheckError::ChecksumMismatch { expected, found })
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
