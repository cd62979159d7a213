//! ISBN checksums
//!
//! ISBN-10 uses modulo 11 with descending weights 10..2 over the first nine
//! digits; a remainder of 10 is written `X`. ISBN-13 is an EAN-13 and goes
//! through the weighted modulo-10 checksum.

use serde::{Deserialize, Serialize};

use crate::digits::{digit_value, normalize, CheckDigit, DigitString};
use crate::error::{CheckError, Result};
use crate::weighted;

/// Whether an ISBN-10 may end in the symbol `X`.
///
/// [`Isbn10Symbol::DigitsOnly`] is the default: every character, the check
/// digit included, must be a decimal digit, even though
/// [`compute_check_digit10`] can produce `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Isbn10Symbol {
    #[default]
    DigitsOnly,
    AllowX,
}

/// Compute the ISBN-10 check digit for a 9-digit payload.
pub fn compute_check_digit10(payload: &str) -> Result<CheckDigit> {
    let payload = DigitString::with_length(payload, 9)?;
    Ok(isbn10_check_digit_of(payload.as_str()))
}

fn isbn10_check_digit_of(payload: &str) -> CheckDigit {
    let sum: u32 = payload
        .bytes()
        .enumerate()
        .map(|(i, b)| digit_value(b) * (10 - i as u32))
        .sum();

    CheckDigit::new(((11 - sum % 11) % 11) as u8)
}

/// Validate an ISBN-10, reporting why it failed.
pub fn check_isbn10(code: &str, symbol: Isbn10Symbol) -> Result<()> {
    let actual = code.chars().count();
    if actual == 0 {
        return Err(CheckError::Empty);
    }
    if actual != 10 {
        return Err(CheckError::WrongLength {
            expected: 10,
            actual,
        });
    }

    let accepts_x = symbol == Isbn10Symbol::AllowX;
    for (position, c) in code.chars().enumerate() {
        let allowed = c.is_ascii_digit() || (accepts_x && position == 9 && matches!(c, 'X' | 'x'));
        if !allowed {
            return Err(CheckError::InvalidCharacter { position, found: c });
        }
    }

    // All ten characters are ASCII at this point
    let (payload, check) = code.split_at(9);
    let found = char::from(check.as_bytes()[0]);
    let expected = isbn10_check_digit_of(payload);
    if expected.matches(found) {
        Ok(())
    } else {
        Err(CheckError::ChecksumMismatch { expected, found })
    }
}

/// Validate an ISBN-10 made only of digits.
pub fn validate_isbn10(code: &str) -> bool {
    check_isbn10(code, Isbn10Symbol::DigitsOnly).is_ok()
}

/// Validate an ISBN of either length: 13 characters go to the weighted
/// modulo-10 checksum, anything else is treated as an ISBN-10.
pub fn check_isbn(code: &str, symbol: Isbn10Symbol) -> Result<()> {
    if code.chars().count() == 13 {
        weighted::check(code, 13)
    } else {
        check_isbn10(code, symbol)
    }
}

/// Validate an ISBN-10 or ISBN-13 (no separators).
pub fn validate(code: &str) -> bool {
    check_isbn(code, Isbn10Symbol::default()).is_ok()
}

/// Convert an ISBN-10 to its `978`-prefixed ISBN-13.
///
/// Hyphens and spaces are ignored; a trailing `X` is accepted.
pub fn isbn10_to_isbn13(code: &str) -> Result<String> {
    let code = normalize(code);
    check_isbn10(&code, Isbn10Symbol::AllowX)?;

    let mut isbn13 = format!("978{}", &code[..9]);
    let check = weighted::check_digit_of(&isbn13);
    isbn13.push(check.to_char());
    Ok(isbn13)
}

/// Convert a `978`-prefixed ISBN-13 to ISBN-10.
///
/// `979` ISBNs have no ISBN-10 form and fail with
/// [`CheckError::UnsupportedPrefix`].
pub fn isbn13_to_isbn10(code: &str) -> Result<String> {
    let code = normalize(code);
    weighted::check(&code, 13)?;

    if !code.starts_with("978") {
        return Err(CheckError::UnsupportedPrefix(code[..3].to_string()));
    }

    let payload = &code[3..12];
    Ok(format!("{}{}", payload, isbn10_check_digit_of(payload)))
}
