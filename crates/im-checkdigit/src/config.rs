//! Configuration for validation
//!
//! Controls separator stripping and the two lenient modes: the ISBN-10 `X`
//! check symbol and the IMEI forms without a check digit.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digits::DEFAULT_SEPARATORS;
use crate::isbn::Isbn10Symbol;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Characters removed before a code is checked
    pub separators: Vec<char>,
    /// Accept `X` as the last character of an ISBN-10
    pub accept_isbn10_x: bool,
    /// Accept 14-digit IMEIs and 16-digit IMEISVs, which carry no check digit
    pub imei_allow_unchecked: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
            accept_isbn10_x: false,
            imei_allow_unchecked: true,
        }
    }
}

impl CheckConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// ISBN-10 check symbol policy derived from `accept_isbn10_x`.
    pub fn isbn10_symbol(&self) -> Isbn10Symbol {
        if self.accept_isbn10_x {
            Isbn10Symbol::AllowX
        } else {
            Isbn10Symbol::DigitsOnly
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // A digit separator would be stripped out of the code itself
        if let Some(&c) = self.separators.iter().find(|c| c.is_ascii_digit()) {
            return Err(ConfigError::DigitSeparator(c));
        }
        if self.accept_isbn10_x && self.separators.iter().any(|c| matches!(c, 'X' | 'x')) {
            return Err(ConfigError::ConflictingSeparator('X'));
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A separator is an ASCII digit
    #[error("Separator {0:?} is a digit")]
    DigitSeparator(char),

    /// A separator would remove a character the configuration accepts
    #[error("Separator {0:?} conflicts with accept_isbn10_x")]
    ConflictingSeparator(char),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CheckConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.separators, vec!['-', ' ']);
        assert_eq!(config.isbn10_symbol(), Isbn10Symbol::DigitsOnly);
    }

    #[test]
    fn test_toml_partial() {
        let config = CheckConfig::from_toml("accept_isbn10_x = true").unwrap();
        assert!(config.accept_isbn10_x);
        assert_eq!(config.separators, vec!['-', ' ']);
        assert_eq!(config.isbn10_symbol(), Isbn10Symbol::AllowX);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CheckConfig {
            separators: vec!['.', '/'],
            accept_isbn10_x: true,
            imei_allow_unchecked: false,
        };
        let toml = config.to_toml().unwrap();
        assert_eq!(CheckConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_json_serialization() {
        let config = CheckConfig::default();
        let json = config.to_json().unwrap();
        let parsed = CheckConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_digit_separator_rejected() {
        let result = CheckConfig::from_toml(r#"separators = ["-", "0"]"#);
        assert!(matches!(result, Err(ConfigError::DigitSeparator('0'))));
    }

    #[test]
    fn test_x_separator_conflict() {
        let config = CheckConfig {
            separators: vec!['x'],
            accept_isbn10_x: true,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConflictingSeparator('X'))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            CheckConfig::from_toml("separators = 3"),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
