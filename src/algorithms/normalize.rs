//! String normalization applied before comparison
//!
//! Normalization is opt-in: the free scoring functions compare raw bytes, and
//! only a configured [`Matcher`](crate::config::Matcher) runs these passes.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Remove ASCII punctuation characters
    RemovePunctuation,
    /// Remove all whitespace
    RemoveWhitespace,
    /// Lowercase, then drop punctuation and whitespace
    Strict,
}

impl FromStr for NormalizationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowercase" => Ok(Self::Lowercase),
            "remove_punctuation" => Ok(Self::RemovePunctuation),
            "remove_whitespace" => Ok(Self::RemoveWhitespace),
            "strict" => Ok(Self::Strict),
            other => Err(ConfigError::UnknownNormalization(other.to_string())),
        }
    }
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::RemovePunctuation => {
            s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
        }
        NormalizationMode::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        NormalizationMode::Strict => s
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
            .collect(),
    }
}

/// Normalize when a mode is set, borrow the input untouched otherwise.
#[must_use]
pub fn maybe_normalize(s: &str, mode: Option<NormalizationMode>) -> Cow<'_, str> {
    match mode {
        Some(mode) => Cow::Owned(normalize_string(s, mode)),
        None => Cow::Borrowed(s),
    }
}
