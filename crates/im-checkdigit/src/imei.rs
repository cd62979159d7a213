//! IMEI validation
//!
//! - 14 digits: TAC + serial, no check digit defined
//! - 15 digits: TAC + serial + Luhn check digit
//! - 16 digits: IMEISV (software version instead of a check digit)

use crate::digits::DigitString;
use crate::error::{CheckError, Outcome, Result};
use crate::family::Family;
use crate::luhn;

/// Length of an IMEI carrying a Luhn check digit
pub const IMEI_LENGTH: usize = 15;

/// Validate an IMEI, reporting why it failed.
///
/// With `allow_unchecked`, the 14- and 16-digit forms are accepted as
/// [`Outcome::Unverified`]; otherwise only 15 digits are accepted.
pub fn check(code: &str, allow_unchecked: bool) -> Result<Outcome> {
    let actual = code.chars().count();
    match actual {
        0 => Err(CheckError::Empty),
        IMEI_LENGTH => {
            luhn::check(code, IMEI_LENGTH)?;
            Ok(Outcome::Verified)
        }
        14 | 16 if allow_unchecked => DigitString::parse(code).map(|_| Outcome::Unverified),
        14 | 16 => Err(CheckError::WrongLength {
            expected: IMEI_LENGTH,
            actual,
        }),
        _ => Err(CheckError::UnsupportedLength {
            family: Family::Imei,
            actual,
        }),
    }
}

/// Validate an IMEI of 14, 15 or 16 digits (no separators).
pub fn validate(code: &str) -> bool {
    check(code, true).is_ok()
}

/// Validate an IMEISV: 16 digits, nothing to verify beyond shape.
pub fn check_imeisv(code: &str) -> Result<Outcome> {
    DigitString::with_length(code, 16).map(|_| Outcome::Unverified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_digits_use_luhn() {
        assert_eq!(check("490154203237518", true), Ok(Outcome::Verified));
        assert!(matches!(
            check("490154203237519", true),
            Err(CheckError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_unchecked_lengths() {
        assert_eq!(check("12345678901234", true), Ok(Outcome::Unverified));
        assert_eq!(check("1234567890123456", true), Ok(Outcome::Unverified));
        assert_eq!(
            check("12345678901234", false),
            Err(CheckError::WrongLength {
                expected: 15,
                actual: 14
            })
        );
    }

    #[test]
    fn test_invalid_imeis() {
        assert!(!validate("1234567890123")); // 13 digits
        assert!(!validate("12345678901234567")); // 17 digits
        assert!(!validate("1234567890123A")); // Letter in 14-digit form
        assert!(!validate("123456789012345A")); // Letter in 16-digit form
        assert!(!validate(""));
    }

    #[test]
    fn test_imeisv() {
        assert_eq!(check_imeisv("3569380356438091"), Ok(Outcome::Unverified));
        assert!(check_imeisv("356938035643809").is_err());
    }
}
