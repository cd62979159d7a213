//! Luhn modulo-10 checksum (IMEI, card-style numbers)

use crate::digits::{digit_value, verify_check_digit, CheckDigit, DigitString};
use crate::error::Result;

/// Digit sum of `n` (18 -> 9, 14 -> 5, 7 -> 7).
pub fn collapse(n: u32) -> u32 {
    let mut n = n;
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Compute the Luhn check digit for a payload.
pub fn compute_check_digit(payload: &str) -> Result<CheckDigit> {
    let payload = DigitString::parse(payload)?;
    Ok(check_digit_of(payload.as_str()))
}

/// Check digit of an all-digit payload.
///
/// Positions count from the right of the full code with the check digit at
/// position 1, so the rightmost payload digit sits at an even position and
/// is doubled.
pub(crate) fn check_digit_of(payload: &str) -> CheckDigit {
    let sum: u32 = payload
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let value = digit_value(b);
            if i % 2 == 0 {
                collapse(value * 2)
            } else {
                value
            }
        })
        .sum();

    CheckDigit::new(((10 - sum % 10) % 10) as u8)
}

/// Validate a full code of `expected_length` digits, reporting why it failed.
pub fn check(code: &str, expected_length: usize) -> Result<()> {
    let code = DigitString::with_length(code, expected_length)?;
    verify_check_digit(&code, check_digit_of)
}

/// Validate a full code of `expected_length` digits.
pub fn validate(code: &str, expected_length: usize) -> bool {
    check(code, expected_length).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;

    #[test]
    fn test_collapse() {
        assert_eq!(collapse(0), 0);
        assert_eq!(collapse(8), 8);
        assert_eq!(collapse(10), 1);
        assert_eq!(collapse(18), 9);
        assert_eq!(collapse(199), 19);
    }

    #[test]
    fn test_compute() {
        assert_eq!(compute_check_digit("49015420323751").unwrap().value(), 8);
        assert_eq!(compute_check_digit("7992739871").unwrap().value(), 3);
        assert_eq!(compute_check_digit("0").unwrap().value(), 0);
    }

    #[test]
    fn test_validate() {
        assert!(validate("490154203237518", 15));
        assert!(validate("356938035643809", 15));
        assert!(validate("79927398713", 11));
    }

    #[test]
    fn test_validate_failures() {
        assert!(!validate("490154203237517", 15)); // Bad checksum
        assert!(!validate("49015420323751", 15)); // Too short
        assert!(!validate("49015420323751X", 15)); // Letter
        assert!(!validate("", 15));
    }

    #[test]
    fn test_check_reports_mismatch() {
        assert_eq!(
            check("490154203237517", 15),
            Err(CheckError::ChecksumMismatch {
                expected: CheckDigit::new(8),
                found: '7'
            })
        );
    }

    #[test]
    fn test_adjacent_transpositions() {
        // 98 -> 89 is caught
        assert!(!validate("79927389713", 11));
        // 90 -> 09 is the one transposition Luhn cannot see
        assert!(validate("409154203237518", 15));
    }
}
