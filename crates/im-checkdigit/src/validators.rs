//! Per-family validators
//!
//! Every boolean entry point strips separators first and never panics; the
//! [`check`] variants return the reason a code was rejected.

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::config::CheckConfig;
use crate::digits::{strip_separators, CheckDigit, DigitString};
use crate::error::{CheckError, Outcome, Result, ValidationKind};
use crate::extractors::{self, ExtractedCode};
use crate::family::Family;
use crate::{imei, isbn, luhn, upce, weighted};

lazy_static! {
    static ref DEFAULT_VALIDATOR: Validator = Validator::default();
}

/// Validates codes under a fixed [`CheckConfig`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: CheckConfig,
}

impl Validator {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Strip the configured separators.
    pub fn normalize(&self, code: &str) -> String {
        strip_separators(code, &self.config.separators)
    }

    /// Validate `code` as a member of `family`, reporting why it failed.
    pub fn check(&self, family: Family, code: &str) -> Result<Outcome> {
        let code = self.normalize(code);
        let result = self.check_normalized(family, &code);
        log_result(family, &code, &result);
        result
    }

    fn check_normalized(&self, family: Family, code: &str) -> Result<Outcome> {
        match family {
            Family::Ean8
            | Family::Ean13
            | Family::Ean14
            | Family::UpcA
            | Family::Gln
            | Family::Gsin
            | Family::Sscc
            | Family::Isbn13 => {
                weighted::check(code, family.expected_length()).map(|_| Outcome::Verified)
            }
            Family::Isbn10 => {
                isbn::check_isbn10(code, self.config.isbn10_symbol()).map(|_| Outcome::Verified)
            }
            Family::UpcE => upce::check(code),
            Family::Imei => imei::check(code, self.config.imei_allow_unchecked),
            Family::ImeiSv => imei::check_imeisv(code),
        }
    }

    pub fn is_valid(&self, family: Family, code: &str) -> bool {
        self.check(family, code).is_ok()
    }

    pub fn classify(&self, family: Family, code: &str) -> ValidationKind {
        ValidationKind::from(&self.check(family, code))
    }

    /// Validate an ISBN of either length, dispatching on the stripped length.
    pub fn check_isbn(&self, code: &str) -> Result<Outcome> {
        let code = self.normalize(code);
        let family = if code.chars().count() == 13 {
            Family::Isbn13
        } else {
            Family::Isbn10
        };
        let result =
            isbn::check_isbn(&code, self.config.isbn10_symbol()).map(|_| Outcome::Verified);
        log_result(family, &code, &result);
        result
    }

    pub fn is_valid_isbn(&self, code: &str) -> bool {
        self.check_isbn(code).is_ok()
    }

    /// Compute the check digit for a `family` payload, separators stripped.
    pub fn compute_check_digit(&self, family: Family, payload: &str) -> Result<CheckDigit> {
        let payload = self.normalize(payload);
        match family {
            Family::UpcE => upce::compute_check_digit(&payload),
            Family::Isbn10 => isbn::compute_check_digit10(&payload),
            Family::ImeiSv => Err(CheckError::NoCheckDigit(family)),
            Family::Imei => {
                let payload = DigitString::with_length(&payload, imei::IMEI_LENGTH - 1)?;
                Ok(luhn::check_digit_of(payload.as_str()))
            }
            _ => {
                let payload = DigitString::with_length(&payload, family.expected_length() - 1)?;
                Ok(weighted::check_digit_of(payload.as_str()))
            }
        }
    }

    /// Append the computed check digit to a `family` payload.
    pub fn complete(&self, family: Family, payload: &str) -> Result<String> {
        let check = self.compute_check_digit(family, payload)?;
        let mut code = self.normalize(payload);
        code.push(check.to_char());
        Ok(code)
    }

    /// Find every code in `text` this validator accepts.
    pub fn extract(&self, text: &str) -> Vec<ExtractedCode> {
        extractors::extract_codes_with(text, self)
    }
}

fn log_result(family: Family, code: &str, result: &Result<Outcome>) {
    match result {
        Ok(outcome) => trace!(%family, code, ?outcome, "code accepted"),
        Err(error) => debug!(%family, code, %error, "code rejected"),
    }
}

/// Validate `code` as a member of `family` under the default configuration.
pub fn check(family: Family, code: &str) -> Result<Outcome> {
    DEFAULT_VALIDATOR.check(family, code)
}

/// Validate `code` as a member of `family`.
pub fn is_valid(family: Family, code: &str) -> bool {
    DEFAULT_VALIDATOR.is_valid(family, code)
}

/// Coarse reason `code` is or is not a valid member of `family`.
pub fn classify(family: Family, code: &str) -> ValidationKind {
    DEFAULT_VALIDATOR.classify(family, code)
}

pub fn is_valid_ean8(code: &str) -> bool {
    is_valid(Family::Ean8, code)
}

pub fn is_valid_ean13(code: &str) -> bool {
    is_valid(Family::Ean13, code)
}

pub fn is_valid_ean14(code: &str) -> bool {
    is_valid(Family::Ean14, code)
}

pub fn is_valid_upca(code: &str) -> bool {
    is_valid(Family::UpcA, code)
}

/// Validate a UPC-E. Six digits carry no check digit and always pass.
pub fn is_valid_upce(code: &str) -> bool {
    is_valid(Family::UpcE, code)
}

pub fn is_valid_gsin(code: &str) -> bool {
    is_valid(Family::Gsin, code)
}

pub fn is_valid_sscc(code: &str) -> bool {
    is_valid(Family::Sscc, code)
}

pub fn is_valid_gln(code: &str) -> bool {
    is_valid(Family::Gln, code)
}

/// Validate an ISBN-10 or ISBN-13.
///
/// An ISBN-10 ending in `X` is rejected unless the configuration sets
/// `accept_isbn10_x`.
pub fn is_valid_isbn(code: &str) -> bool {
    DEFAULT_VALIDATOR.is_valid_isbn(code)
}

/// Validate an IMEI. 14 and 16 digits always pass; 15 digits are Luhn-checked.
pub fn is_valid_imei(code: &str) -> bool {
    is_valid(Family::Imei, code)
}

/// Compute the check digit for a `family` payload (the code minus its check digit).
///
/// UPC-E takes the 6-digit body, or 7 digits with number system 0.
pub fn compute_check_digit(family: Family, payload: &str) -> Result<CheckDigit> {
    DEFAULT_VALIDATOR.compute_check_digit(family, payload)
}

/// Append the computed check digit to a `family` payload.
pub fn complete(family: Family, payload: &str) -> Result<String> {
    DEFAULT_VALIDATOR.complete(family, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes() {
        assert!(is_valid_ean8("96385074"));
        assert!(is_valid_ean13("4006381333931"));
        assert!(is_valid_ean14("10012345678902"));
        assert!(is_valid_upca("036000291452"));
        assert!(is_valid_upce("0425261"));
        assert!(is_valid_gsin("06141411234567890"));
        assert!(is_valid_sscc("106141411234567897"));
        assert!(is_valid_gln("5412345000013"));
        assert!(is_valid_isbn("0306406152"));
        assert!(is_valid_imei("490154203237518"));
    }

    #[test]
    fn test_separators_stripped() {
        assert!(is_valid_ean13("400-6381-33393-1"));
        assert!(is_valid_isbn("978 0 306 40615 7"));
        assert!(is_valid_imei("49-015420-323751-8"));
    }

    #[test]
    fn test_wrong_family_length() {
        assert!(!is_valid_ean8("4006381333931"));
        assert!(!is_valid_gln("96385074"));
        assert!(!is_valid_sscc("06141411234567890"));
    }

    #[test]
    fn test_check_outcomes() {
        assert_eq!(check(Family::Ean13, "4006381333931"), Ok(Outcome::Verified));
        assert_eq!(check(Family::UpcE, "042526"), Ok(Outcome::Unverified));
        assert_eq!(check(Family::ImeiSv, "3569380356438091"), Ok(Outcome::Unverified));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(Family::Ean13, "4006381333931"), ValidationKind::Valid);
        assert_eq!(classify(Family::Ean13, "400638133393"), ValidationKind::WrongLength);
        assert_eq!(classify(Family::Ean13, "400638133393O"), ValidationKind::InvalidCharacters);
        assert_eq!(classify(Family::Ean13, "4006381333932"), ValidationKind::ChecksumMismatch);
        assert_eq!(classify(Family::Ean13, ""), ValidationKind::WrongLength);
    }

    #[test]
    fn test_lenient_validator() {
        let validator = Validator::new(CheckConfig {
            accept_isbn10_x: true,
            imei_allow_unchecked: false,
            ..Default::default()
        });
        assert!(validator.is_valid_isbn("0-8044-2957-X"));
        assert!(validator.is_valid(Family::Isbn10, "080442957X"));
        assert!(!validator.is_valid(Family::Imei, "12345678901234"));
        assert!(!is_valid_isbn("080442957X"));
    }

    #[test]
    fn test_compute_by_family() {
        assert_eq!(compute_check_digit(Family::Ean13, "400638133393").unwrap().value(), 1);
        assert_eq!(compute_check_digit(Family::Imei, "49015420323751").unwrap().value(), 8);
        assert_eq!(compute_check_digit(Family::Isbn10, "080442957").unwrap().to_char(), 'X');
        assert_eq!(compute_check_digit(Family::UpcE, "042526").unwrap().value(), 1);
        assert_eq!(
            compute_check_digit(Family::ImeiSv, "123456789012345"),
            Err(CheckError::NoCheckDigit(Family::ImeiSv))
        );
        assert_eq!(
            compute_check_digit(Family::Ean8, "96385074"),
            Err(CheckError::WrongLength {
                expected: 7,
                actual: 8
            })
        );
    }

    #[test]
    fn test_complete() {
        assert_eq!(complete(Family::Ean13, "400638133393").unwrap(), "4006381333931");
        assert_eq!(complete(Family::Sscc, "10614141123456789").unwrap(), "106141411234567897");
        assert_eq!(complete(Family::UpcE, "0123456").unwrap(), "01234565");
        assert_eq!(complete(Family::Isbn10, "123456789").unwrap(), "123456789X");
        assert_eq!(complete(Family::UpcA, "036-000-29145").unwrap(), "036000291452");
    }
}
