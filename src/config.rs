//! Matcher configuration
//!
//! The scoring functions themselves are total; validation happens once, when a
//! [`MatchConfig`] is turned into a [`Matcher`].

use crate::algorithms::normalize::{maybe_normalize, NormalizationMode};
use crate::algorithms::{levenshtein_similarity, number_similarity, PERFECT_SCORE};
use crate::matching::{self, MatchResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating a [`MatchConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Weight outside `[0, 1]` or not finite
    #[error("string_weight must be a finite number in [0.0, 1.0], got {0}")]
    InvalidWeight(f64),

    /// Minimum score outside `[0, 100]` or not finite
    #[error("min_score must be a finite number in [0.0, 100.0], got {0}")]
    InvalidMinScore(f64),

    #[error("unknown normalization mode: '{0}'")]
    UnknownNormalization(String),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a [`Matcher`].
///
/// ```
/// use levmatch::config::MatchConfig;
///
/// let config = MatchConfig::from_json(r#"{"string_weight": 0.7, "normalize": "lowercase"}"#).unwrap();
/// assert_eq!(config.string_weight, 0.7);
/// assert_eq!(config.min_score, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Share of the string score in a combined match; the number score gets the rest.
    pub string_weight: f64,
    /// Ranked results below this score are dropped.
    pub min_score: f64,
    /// Maximum number of ranked results.
    pub limit: Option<usize>,
    /// Preprocessing applied to both sides of a string comparison.
    pub normalize: Option<NormalizationMode>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            string_weight: 0.5,
            min_score: 0.0,
            limit: None,
            normalize: None,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "loaded match config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.string_weight.is_finite() || !(0.0..=1.0).contains(&self.string_weight) {
            return Err(ConfigError::InvalidWeight(self.string_weight));
        }
        if !self.min_score.is_finite() || !(0.0..=PERFECT_SCORE).contains(&self.min_score) {
            return Err(ConfigError::InvalidMinScore(self.min_score));
        }
        Ok(())
    }
}

/// Scoring front end bound to a validated [`MatchConfig`].
///
/// ```
/// use levmatch::algorithms::normalize::NormalizationMode;
/// use levmatch::config::{MatchConfig, Matcher};
///
/// let matcher = Matcher::new(MatchConfig {
///     normalize: Some(NormalizationMode::Lowercase),
///     ..MatchConfig::default()
/// })
/// .unwrap();
/// assert_eq!(matcher.similarity("Hello", "hello"), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            string_weight = config.string_weight,
            min_score = config.min_score,
            limit = config.limit,
            normalize = ?config.normalize,
            "matcher ready"
        );
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// String similarity after the configured normalization.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let mode = self.config.normalize;
        levenshtein_similarity(&maybe_normalize(a, mode), &maybe_normalize(b, mode))
    }

    /// Best candidate for `query`; the returned text is the original, unnormalized candidate.
    #[must_use]
    pub fn best_string<'a, S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &'a [S],
    ) -> Option<MatchResult<&'a str>> {
        let mode = self.config.normalize;
        let query = maybe_normalize(query, mode);
        matching::best_with(candidates, |c| {
            levenshtein_similarity(&query, &maybe_normalize(c, mode))
        })
    }

    #[must_use]
    pub fn best_number(&self, query: f64, candidates: &[f64]) -> Option<MatchResult<f64>> {
        matching::best_number_match(query, candidates)
    }

    /// Combined score using the configured string weight.
    #[must_use]
    pub fn combined(&self, s1: &str, s2: &str, n1: f64, n2: f64) -> f64 {
        let weight = self.config.string_weight;
        self.similarity(s1, s2) * weight + number_similarity(n1, n2) * (1.0 - weight)
    }

    /// Candidates at or above the configured minimum score, best first,
    /// capped at the configured limit.
    #[must_use]
    pub fn rank_strings<'a, S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &'a [S],
    ) -> Vec<MatchResult<&'a str>> {
        let mode = self.config.normalize;
        let query = maybe_normalize(query, mode);
        matching::rank_with(
            candidates,
            |c| levenshtein_similarity(&query, &maybe_normalize(c, mode)),
            self.config.limit,
            self.config.min_score,
        )
    }

    #[must_use]
    pub fn rank_numbers(&self, query: f64, candidates: &[f64]) -> Vec<MatchResult<f64>> {
        matching::top_number_matches(query, candidates, self.config.limit, self.config.min_score)
    }
}
