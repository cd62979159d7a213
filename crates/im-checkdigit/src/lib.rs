// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! Check digit computation and validation for commerce and logistics codes
//!
//! This crate provides:
//! - Weighted modulo-10 checksums (EAN-8/13/14, UPC-A, GLN, GSIN, SSCC, ISBN-13)
//! - Luhn checksums (IMEI)
//! - ISBN-10 modulo-11 checksums and ISBN-10/13 conversion
//! - UPC-E to UPC-A expansion
//! - One boolean validator per code family, plus a typed result for diagnostics
//! - Extraction of valid codes from free text
//!
//! # Examples
//! ```
//! use im_checkdigit::{is_valid_ean13, is_valid_isbn, is_valid_upce};
//!
//! assert!(is_valid_ean13("4006381333931"));
//! assert!(is_valid_isbn("0-306-40615-2"));
//! assert!(is_valid_upce("0425261"));
//! ```

pub mod config;
pub mod digits;
pub mod error;
pub mod extractors;
pub mod family;
pub mod imei;
pub mod isbn;
pub mod luhn;
pub mod upce;
pub mod validators;
pub mod weighted;

#[cfg(feature = "uniffi")]
pub mod ffi;

pub use config::{CheckConfig, ConfigError};
pub use digits::{normalize, strip_separators, CheckDigit, DigitString};
pub use error::{CheckError, Outcome, Result, ValidationKind};
pub use extractors::{extract_codes, ExtractedCode};
pub use family::{Algorithm, Family};
pub use isbn::{isbn10_to_isbn13, isbn13_to_isbn10, Isbn10Symbol};
pub use upce::upce_to_upca;
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
