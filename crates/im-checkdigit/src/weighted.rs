//! Weighted modulo-10 checksum (GS1 family)
//!
//! Used by EAN-8/13/14, UPC-A, GLN, GSIN, SSCC, ISBN-13 and expanded UPC-E.
//! Payload digits alternate between weights 1 and 3. Which digits get 3
//! depends on the parity of the full code length: counting payload indices
//! from zero, the indices sharing the full length's parity are tripled, so
//! the digit next to the check digit is always weighted 3.

use crate::digits::{digit_value, verify_check_digit, CheckDigit, DigitString};
use crate::error::Result;

/// Compute the check digit for a payload (the code without its check digit).
pub fn compute_check_digit(payload: &str) -> Result<CheckDigit> {
    let payload = DigitString::parse(payload)?;
    Ok(check_digit_of(payload.as_str()))
}

/// Check digit of an all-digit payload.
pub(crate) fn check_digit_of(payload: &str) -> CheckDigit {
    let full_length = payload.len() + 1;
    let sum: u32 = payload
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let value = digit_value(b);
            if i % 2 == full_length % 2 {
                value * 3
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
