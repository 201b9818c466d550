//! levmatch - Approximate-match similarity scores
//!
//! Percentage scores (0.0 to 100.0) for how close two values are:
//!
//! - Strings: byte-level Levenshtein distance normalized by the longer input
//! - Numbers: absolute difference as a ratio of the larger magnitude
//! - Lists: the best-scoring candidate for a query, first one wins ties
//! - Combined: a weighted blend of a string score and a number score
//!
//! Every scoring function is pure and total. Edge cases map to boundary values
//! instead of errors: two empty strings score 100.0, an empty candidate list
//! yields `None`.
//!
//! # Example
//! ```
//! use levmatch::{best_string_match, levenshtein, levenshtein_similarity, number_similarity};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(levenshtein_similarity("", ""), 100.0);
//! assert_eq!(number_similarity(10.0, 0.0), 0.0);
//!
//! let best = best_string_match("cat", &["car", "bat", "cats"]).unwrap();
//! assert_eq!(best.candidate, "cats");
//! ```

pub mod algorithms;
pub mod config;
pub mod matching;

// Python extension module (enabled with the python feature)
#[cfg(feature = "python")]
mod python;

pub use algorithms::normalize::NormalizationMode;
pub use algorithms::{
    levenshtein, levenshtein_similarity, levenshtein_slice, number_similarity, EditDistance,
    Levenshtein, NumericSimilarity, RatioSimilarity, Similarity,
};
pub use config::{ConfigError, MatchConfig, Matcher};
pub use matching::{
    best_number_match, best_string_match, combined_match, top_number_matches, top_string_matches,
    MatchResult,
};
