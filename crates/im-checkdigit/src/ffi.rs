//! UniFFI exports
//!
//! Owned-string wrappers around the validators, for Swift/Kotlin callers.

use crate::error::ValidationKind;
use crate::family::Family;
use crate::validators;

#[uniffi::export]
pub fn is_valid_code(family: Family, code: String) -> bool {
    validators::is_valid(family, &code)
}

#[uniffi::export]
pub fn classify_code(family: Family, code: String) -> ValidationKind {
    validators::classify(family, &code)
}

#[uniffi::export]
pub fn is_valid_isbn_ffi(code: String) -> bool {
    validators::is_valid_isbn(&code)
}

#[uniffi::export]
pub fn is_valid_imei_ffi(code: String) -> bool {
    validators::is_valid_imei(&code)
}

/// Payload plus check digit, or `None` if the payload is malformed.
#[uniffi::export]
pub fn complete_code(family: Family, payload: String) -> Option<String> {
    validators::complete(family, &payload).ok()
}

/// Family display name for UI.
#[uniffi::export]
pub fn family_display_name(family: Family) -> String {
    family.display_name().to_string()
}
