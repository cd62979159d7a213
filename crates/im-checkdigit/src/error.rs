//! Error and outcome types for check digit validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digits::CheckDigit;
use crate::family::Family;

/// Result type alias for check digit operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Why a code was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Nothing left after separators were stripped
    #[error("Code is empty")]
    Empty,

    /// Length differs from the single length the algorithm expects
    #[error("Wrong length: expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Length is not one of the lengths a variable-length family accepts
    #[error("Unsupported length {actual} for {family}")]
    UnsupportedLength { family: Family, actual: usize },

    /// A character outside the accepted alphabet
    #[error("Invalid character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },

    /// The recomputed check digit differs from the one supplied
    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: CheckDigit, found: char },

    /// UPC-E number system digit other than 0
    #[error("Unsupported UPC-E number system {0:?}")]
    UnsupportedNumberSystem(char),

    /// Prefix that has no equivalent in the target format
    #[error("Unsupported prefix: {0}")]
    UnsupportedPrefix(String),

    /// Family whose codes carry no check digit
    #[error("{0} codes carry no check digit")]
    NoCheckDigit(Family),

    /// Unrecognized family name
    #[error("Unknown code family: {0}")]
    UnknownFamily(String),
}

impl CheckError {
    /// Collapse the error into its coarse diagnostic category.
    pub fn kind(&self) -> ValidationKind {
        match self {
            CheckError::Empty
            | CheckError::WrongLength { .. }
            | CheckError::UnsupportedLength { .. } => ValidationKind::WrongLength,
            CheckError::InvalidCharacter { .. } | CheckError::UnsupportedNumberSystem(_) => {
                ValidationKind::InvalidCharacters
            }
            CheckError::ChecksumMismatch { .. } => ValidationKind::ChecksumMismatch,
            CheckError::UnsupportedPrefix(_)
            | CheckError::NoCheckDigit(_)
            | CheckError::UnknownFamily(_) => ValidationKind::Unsupported,
        }
    }
}

/// Successful validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A check digit was recomputed and matched
    Verified,
    /// The code variant carries no check digit (6-digit UPC-E, 14-digit IMEI, IMEISV)
    Unverified,
}

/// Coarse validation category, for callers that want a reason code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    Valid,
    WrongLength,
    InvalidCharacters,
    ChecksumMismatch,
    Unsupported,
}

impl ValidationKind {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationKind::Valid)
    }
}

impl From<&Result<Outcome>> for ValidationKind {
    fn from(result: &Result<Outcome>) -> Self {
        match result {
            Ok(_) => ValidationKind::Valid,
            Err(err) => err.kind(),
        }
    }
}
