//! Property-based checks for the checksum algorithms

use im_checkdigit::{
    classify, complete, is_valid, is_valid_imei, is_valid_upca, is_valid_upce, luhn, upce,
    weighted, Family, ValidationKind,
};
use proptest::prelude::*;

/// Replace the digit at `index` with a different one.
fn mutate(code: &str, index: usize, bump: u8) -> String {
    let mut bytes = code.as_bytes().to_vec();
    let digit = bytes[index] - b'0';
    bytes[index] = b'0' + (digit + bump) % 10;
    String::from_utf8(bytes).unwrap()
}

proptest! {
    #[test]
    fn test_weighted_roundtrip(payload in "[0-9]{7,17}") {
        let check = weighted::compute_check_digit(&payload).unwrap();
        let code = format!("{payload}{check}");
        prop_assert!(weighted::validate(&code, payload.len() + 1));
    }

    #[test]
    fn test_weighted_detects_single_digit_errors(
        payload in "[0-9]{12}",
        index in 0usize..13,
        bump in 1u8..10,
    ) {
        let code = complete(Family::Ean13, &payload).unwrap();
        let mutated = mutate(&code, index, bump);
        prop_assert!(!is_valid(Family::Ean13, &mutated), "{} -> {}", code, mutated);
    }

    #[test]
    fn test_luhn_roundtrip(payload in "[0-9]{14}") {
        let check = luhn::compute_check_digit(&payload).unwrap();
        let code = format!("{payload}{check}");
        prop_assert!(luhn::validate(&code, 15));
        prop_assert!(is_valid_imei(&code));
    }

    #[test]
    fn test_luhn_detects_single_digit_errors(
        payload in "[0-9]{14}",
        index in 0usize..15,
        bump in 1u8..10,
    ) {
        let code = complete(Family::Imei, &payload).unwrap();
        let mutated = mutate(&code, index, bump);
        prop_assert!(!luhn::validate(&mutated, 15), "{} -> {}", code, mutated);
    }

    #[test]
    fn test_imei_unchecked_forms_accept_any_digits(
        short in "[0-9]{14}",
        long in "[0-9]{16}",
    ) {
        prop_assert!(is_valid_imei(&short));
        prop_assert!(is_valid_imei(&long));
    }

    #[test]
    fn test_isbn10_roundtrip_digit_checks(payload in "[0-9]{9}") {
        let code = complete(Family::Isbn10, &payload).unwrap();
        // Payloads whose check symbol is X are rejected by the default validator
        prop_assert_eq!(is_valid(Family::Isbn10, &code), !code.ends_with('X'));
    }

    #[test]
    fn test_upce_matches_upca(body in "[0-9]{6}", check in 0u8..10) {
        let code = format!("{body}{check}");
        let expanded = upce::expand(&code).unwrap();
        prop_assert_eq!(expanded.len(), 12);
        prop_assert_eq!(is_valid_upce(&code), is_valid_upca(&expanded));
    }

    #[test]
    fn test_upce_six_digits_always_valid(body in "[0-9]{6}") {
        prop_assert!(is_valid_upce(&body));
    }

    #[test]
    fn test_wrong_length_never_valid(code in "[0-9]{1,20}") {
        prop_assume!(code.len() != 13);
        prop_assert_eq!(classify(Family::Ean13, &code), ValidationKind::WrongLength);
    }

    #[test]
    fn test_non_digit_never_valid(prefix in "[0-9]{6}", letter in "[A-Za-z]", suffix in "[0-9]{6}") {
        let code = format!("{prefix}{letter}{suffix}");
        prop_assert_eq!(classify(Family::Ean13, &code), ValidationKind::InvalidCharacters);
    }

    #[test]
    fn test_validation_is_pure(code in "[0-9]{13}") {
        let first = classify(Family::Ean13, &code);
        let second = classify(Family::Ean13, &code);
        prop_assert_eq!(first, second);
    }
}
