//! UPC-E expansion
//!
//! A UPC-E code is a zero-suppressed UPC-A. The last digit of the 6-digit
//! body selects how manufacturer and item codes were compressed:
//!
//! | selector | manufacturer | item |
//! |---|---|---|
//! | 0, 1, 2 | d0 d1 s 0 0 | 0 0 d2 d3 d4 |
//! | 3 | d0 d1 d2 0 0 | 0 0 0 d3 d4 |
//! | 4 | d0 d1 d2 d3 0 | 0 0 0 0 d4 |
//! | 5-9 | d0 d1 d2 d3 d4 | 0 0 0 0 s |
//!
//! Accepted input forms:
//! - 6 digits: body only, no check digit
//! - 7 digits: body + check digit, number system 0 implied
//! - 8 digits: number system (must be 0) + body + check digit

use crate::digits::{normalize, CheckDigit, DigitString};
use crate::error::{CheckError, Outcome, Result};
use crate::family::Family;
use crate::weighted;

/// Length of the UPC-A code a UPC-E expands to
pub const UPCA_LENGTH: usize = 12;

/// Expand the 6-digit body to the 11-digit UPC-A payload (number system 0).
fn expand_body(body: &[u8]) -> String {
    let d = body;
    let selector = d[5];
    let (manufacturer, item): ([u8; 5], [u8; 5]) = match selector {
        b'0'..=b'2' => ([d[0], d[1], selector, b'0', b'0'], [b'0', b'0', d[2], d[3], d[4]]),
        b'3' => ([d[0], d[1], d[2], b'0', b'0'], [b'0', b'0', b'0', d[3], d[4]]),
        b'4' => ([d[0], d[1], d[2], d[3], b'0'], [b'0', b'0', b'0', b'0', d[4]]),
        _ => ([d[0], d[1], d[2], d[3], d[4]], [b'0', b'0', b'0', b'0', selector]),
    };

    let mut payload = String::with_capacity(UPCA_LENGTH);
    payload.push('0');
    payload.extend(manufacturer.iter().map(|&b| char::from(b)));
    payload.extend(item.iter().map(|&b| char::from(b)));
    payload
}

/// Split a 7- or 8-digit UPC-E into its body and check digit.
fn split(code: &DigitString) -> Result<(&str, char)> {
    let s = code.as_str();
    match code.len() {
        7 => Ok((&s[..6], char::from(s.as_bytes()[6]))),
        8 => {
            let number_system = char::from(s.as_bytes()[0]);
            if number_system != '0' {
                return Err(CheckError::UnsupportedNumberSystem(number_system));
            }
            Ok((&s[1..7], char::from(s.as_bytes()[7])))
        }
        actual => Err(CheckError::UnsupportedLength {
            family: Family::UpcE,
            actual,
        }),
    }
}

/// Expand a 7- or 8-digit UPC-E into a 12-digit UPC-A candidate.
///
/// The check digit is carried over unchecked; see [`upce_to_upca`] for a
/// verified conversion.
pub fn expand(code: &str) -> Result<String> {
    let code = DigitString::parse(code)?;
    let (body, check) = split(&code)?;
    let mut candidate = expand_body(body.as_bytes());
    candidate.push(check);
    Ok(candidate)
}

/// Validate a UPC-E, reporting why it failed.
///
/// A 6-digit body carries no check digit and is accepted as
/// [`Outcome::Unverified`].
pub fn check(code: &str) -> Result<Outcome> {
    let actual = code.chars().count();
    match actual {
        0 => Err(CheckError::Empty),
        6 => DigitString::parse(code).map(|_| Outcome::Unverified),
        7 | 8 => {
            let candidate = expand(code)?;
            weighted::check(&candidate, UPCA_LENGTH)?;
            Ok(Outcome::Verified)
        }
        _ => Err(CheckError::UnsupportedLength {
            family: Family::UpcE,
            actual,
        }),
    }
}

/// Validate a UPC-E code (no separators).
pub fn validate(code: &str) -> bool {
    check(code).is_ok()
}

/// Compute the check digit for a UPC-E body.
///
/// Accepts the 6-digit body, or 7 digits with a leading number system 0.
pub fn compute_check_digit(payload: &str) -> Result<CheckDigit> {
    let payload = DigitString::parse(payload)?;
    let s = payload.as_str();
    let body = match payload.len() {
        6 => s,
        7 => {
            let number_system = char::from(s.as_bytes()[0]);
            if number_system != '0' {
                return Err(CheckError::UnsupportedNumberSystem(number_system));
            }
            &s[1..]
        }
        actual => {
            return Err(CheckError::UnsupportedLength {
                family: Family::UpcE,
                actual,
            })
        }
    };

    Ok(weighted::check_digit_of(&expand_body(body.as_bytes())))
}

/// Convert a 7- or 8-digit UPC-E to its verified 12-digit UPC-A.
///
/// Hyphens and spaces are ignored.
pub fn upce_to_upca(code: &str) -> Result<String> {
    let code = normalize(code);
    let candidate = expand(&code)?;
    weighted::check(&candidate, UPCA_LENGTH)?;
    Ok(candidate)
}
