//! Code extraction from text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Outcome;
use crate::family::Family;
use crate::validators::Validator;

/// Extracted code with position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExtractedCode {
    pub family: Family,
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    // 6 to 18 ASCII digits, optionally grouped with single hyphens,
    // optionally ending in an ISBN-10 X. Runs longer than 18 digits never
    // match. Boundaries are ASCII so other scripts' digits end a run.
    static ref CODE_REGEX: Regex = Regex::new(
        r"(?-u:\b)[0-9](?:-?[0-9]){5,17}(?:-?[Xx])?(?-u:\b)"
    ).unwrap();
}

/// Extract every code with a verified check digit, using default settings.
pub fn extract_codes(text: &str) -> Vec<ExtractedCode> {
    extract_codes_with(text, &Validator::default())
}

/// Extract every code `validator` accepts with a verified check digit.
///
/// Forms without a check digit (6-digit UPC-E, 14/16-digit IMEI) are
/// skipped, since any digit run of that length would pass. Each match is
/// assigned the first family, in [`Family::for_length`] order, that
/// validates it; a 13-digit code only counts as an ISBN with a `978`/`979`
/// prefix. A hyphenated run that validates as a whole is one code;
/// otherwise each hyphen-separated group is tried on its own, so
/// `96385074-73513537` yields two EAN-8s.
pub fn extract_codes_with(text: &str, validator: &Validator) -> Vec<ExtractedCode> {
    let mut results = Vec::new();

    for m in CODE_REGEX.find_iter(text) {
        let run = m.as_str();
        let value: String = run.chars().filter(|c| *c != '-').collect();

        if let Some(family) = classify(&value, validator) {
            results.push(ExtractedCode {
                family,
                value,
                start_index: m.start() as u32,
                end_index: m.end() as u32,
            });
            continue;
        }

        if !run.contains('-') {
            continue;
        }
        let mut offset = m.start();
        for group in run.split('-') {
            if let Some(family) = classify(group, validator) {
                results.push(ExtractedCode {
                    family,
                    value: group.to_string(),
                    start_index: offset as u32,
                    end_index: (offset + group.len()) as u32,
                });
            }
            offset += group.len() + 1;
        }
    }

    // find_iter already yields in order; keep the ordering explicit
    results.sort_by_key(|r| r.start_index);
    results
}

/// First candidate family that verifies `value`'s check digit.
fn classify(value: &str, validator: &Validator) -> Option<Family> {
    Family::for_length(value.len())
        .iter()
        .copied()
        .find(|family| {
            if *family == Family::Isbn13 && !is_bookland(value) {
                return false;
            }
            matches!(validator.check(*family, value), Ok(Outcome::Verified))
        })
}

/// ISBN-13 prefixes ("Bookland")
fn is_bookland(code: &str) -> bool {
    code.starts_with("978") || code.starts_with("979")
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_codes_ffi(text: String) -> Vec<ExtractedCode> {
    extract_codes(&text)
}
