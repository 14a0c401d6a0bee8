//! Search configuration
//!
//! Validated up front so a bad exclusion set or cap list never reaches the scan.

use crate::core::{ExcludedLetters, LetterCodec, LetterError, MAX_WORDS};
use std::fmt;
use std::str::FromStr;

/// Default exclusion set: the classic puzzle drops `q`
pub const DEFAULT_EXCLUDED: &str = "q";

/// Default variant caps for rounds 0..4
pub const DEFAULT_VARIANT_CAPS: [usize; MAX_WORDS] = [10, 10, 10, 10, 100];

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Letters(LetterError),
    CapCount(usize),
    CapValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letters(e) => write!(f, "Invalid excluded letters: {e}"),
            Self::CapCount(n) => {
                write!(f, "Expected {MAX_WORDS} variant caps, got {n}")
            }
            Self::CapValue(v) => {
                write!(f, "Variant cap '{v}' is not a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Letters(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LetterError> for ConfigError {
    fn from(e: LetterError) -> Self {
        Self::Letters(e)
    }
}

/// Maximum variants kept per state, indexed by round (sequence length - 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantCaps([usize; MAX_WORDS]);

impl VariantCaps {
    #[must_use]
    pub const fn new(caps: [usize; MAX_WORDS]) -> Self {
        Self(caps)
    }

    /// Cap for `round`
    ///
    /// # Panics
    /// Panics if `round >= 5`
    #[inline]
    #[must_use]
    pub const fn round(&self, round: usize) -> usize {
        self.0[round]
    }
}

impl Default for VariantCaps {
    fn default() -> Self {
        Self(DEFAULT_VARIANT_CAPS)
    }
}

impl FromStr for VariantCaps {
    type Err = ConfigError;

    /// Parse a comma-separated list such as `"10,10,10,10,100"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != MAX_WORDS {
            return Err(ConfigError::CapCount(parts.len()));
        }

        let mut caps = [0; MAX_WORDS];
        for (cap, part) in caps.iter_mut().zip(&parts) {
            *cap = part
                .parse()
                .map_err(|_| ConfigError::CapValue((*part).to_string()))?;
        }
        Ok(Self(caps))
    }
}

impl fmt::Display for VariantCaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Everything the scan needs besides the words themselves
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub excluded: ExcludedLetters,
    pub variant_caps: VariantCaps,
}

impl SearchConfig {
    /// Build a configuration from its textual form
    ///
    /// # Errors
    /// Returns `ConfigError` if the exclusion set or the cap list is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_cover::config::SearchConfig;
    ///
    /// let config = SearchConfig::new("q", "10,10,10,10,100").unwrap();
    /// assert_eq!(config.variant_caps.round(4), 100);
    /// assert!(SearchConfig::new("q", "10,10").is_err());
    /// ```
    pub fn new(excluded: &str, variant_caps: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            excluded: ExcludedLetters::new(excluded)?,
            variant_caps: variant_caps.parse()?,
        })
    }

    #[must_use]
    pub fn codec(&self) -> LetterCodec {
        LetterCodec::new(self.excluded.clone())
    }
}
