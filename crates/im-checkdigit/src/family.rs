//! Code families and their fixed configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Checksum algorithm a family is verified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Alternating weights 1 and 3, modulo 10
    WeightedMod10,
    /// Luhn doubling, modulo 10
    Luhn,
    /// Descending weights 10..2, modulo 11
    Mod11,
    /// No check digit
    Unchecked,
}

impl Algorithm {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::WeightedMod10 => "weighted mod 10",
            Self::Luhn => "Luhn mod 10",
            Self::Mod11 => "mod 11",
            Self::Unchecked => "none",
        }
    }
}

/// A family of numeric identification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Ean8,
    Ean13,
    Ean14,
    UpcA,
    UpcE,
    Gln,
    Gsin,
    Sscc,
    Isbn10,
    Isbn13,
    Imei,
    ImeiSv,
}

impl Family {
    /// Every family, in display order.
    pub fn all() -> &'static [Family] {
        &[
            Self::Ean8,
            Self::Ean13,
            Self::Ean14,
            Self::UpcA,
            Self::UpcE,
            Self::Gln,
            Self::Gsin,
            Self::Sscc,
            Self::Isbn10,
            Self::Isbn13,
            Self::Imei,
            Self::ImeiSv,
        ]
    }

    /// Canonical total length, check digit included.
    pub fn expected_length(&self) -> usize {
        match self {
            Self::Ean8 | Self::UpcE => 8,
            Self::Ean13 | Self::Gln | Self::Isbn13 => 13,
            Self::Ean14 => 14,
            Self::UpcA => 12,
            Self::Gsin => 17,
            Self::Sscc => 18,
            Self::Isbn10 => 10,
            Self::Imei => 15,
            Self::ImeiSv => 16,
        }
    }

    /// Every total length the family's validator accepts.
    pub fn accepted_lengths(&self) -> &'static [usize] {
        match self {
            Self::UpcE => &[6, 7, 8],
            Self::Imei => &[14, 15, 16],
            Self::Ean8 => &[8],
            Self::Ean13 | Self::Gln | Self::Isbn13 => &[13],
            Self::Ean14 => &[14],
            Self::UpcA => &[12],
            Self::Gsin => &[17],
            Self::Sscc => &[18],
            Self::Isbn10 => &[10],
            Self::ImeiSv => &[16],
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Ean8
            | Self::Ean13
            | Self::Ean14
            | Self::UpcA
            | Self::UpcE
            | Self::Gln
            | Self::Gsin
            | Self::Sscc
            | Self::Isbn13 => Algorithm::WeightedMod10,
            Self::Isbn10 => Algorithm::Mod11,
            Self::Imei => Algorithm::Luhn,
            Self::ImeiSv => Algorithm::Unchecked,
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ean8 => "EAN-8",
            Self::Ean13 => "EAN-13",
            Self::Ean14 => "EAN-14",
            Self::UpcA => "UPC-A",
            Self::UpcE => "UPC-E",
            Self::Gln => "GLN",
            Self::Gsin => "GSIN",
            Self::Sscc => "SSCC",
            Self::Isbn10 => "ISBN-10",
            Self::Isbn13 => "ISBN-13",
            Self::Imei => "IMEI",
            Self::ImeiSv => "IMEISV",
        }
    }

    /// Short machine name, as accepted by [`Family::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ean8 => "ean8",
            Self::Ean13 => "ean13",
            Self::Ean14 => "ean14",
            Self::UpcA => "upca",
            Self::UpcE => "upce",
            Self::Gln => "gln",
            Self::Gsin => "gsin",
            Self::Sscc => "sscc",
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
            Self::Imei => "imei",
            Self::ImeiSv => "imeisv",
        }
    }

    /// Parse a family name.
    ///
    /// Case insensitive; `-`, `_` and spaces are ignored, and the GTIN
    /// aliases map onto their EAN/UPC equivalents.
    ///
    /// # Examples
    /// ```
    /// use im_checkdigit::Family;
    /// assert_eq!(Family::from_name("EAN-13"), Some(Family::Ean13));
    /// assert_eq!(Family::from_name("gtin_12"), Some(Family::UpcA));
    /// assert_eq!(Family::from_name("qr"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "ean8" | "gtin8" => Some(Self::Ean8),
            "ean13" | "gtin13" => Some(Self::Ean13),
            "ean14" | "gtin14" => Some(Self::Ean14),
            "upca" | "upc" | "gtin12" => Some(Self::UpcA),
            "upce" => Some(Self::UpcE),
            "gln" => Some(Self::Gln),
            "gsin" => Some(Self::Gsin),
            "sscc" => Some(Self::Sscc),
            "isbn10" => Some(Self::Isbn10),
            "isbn13" => Some(Self::Isbn13),
            "imei" => Some(Self::Imei),
            "imeisv" => Some(Self::ImeiSv),
            _ => None,
        }
    }

    /// Families whose checksum-bearing form has `length` characters, most
    /// specific first.
    pub fn for_length(length: usize) -> &'static [Family] {
        match length {
            8 => &[Self::Ean8, Self::UpcE],
            10 => &[Self::Isbn10],
            12 => &[Self::UpcA],
            13 => &[Self::Isbn13, Self::Ean13],
            14 => &[Self::Ean14],
            15 => &[Self::Imei],
            17 => &[Self::Gsin],
            18 => &[Self::Sscc],
            _ => &[],
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Family {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CheckError::UnknownFamily(s.to_string()))
    }
}
