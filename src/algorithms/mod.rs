//! Core similarity algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface so callers can swap metrics.
//!
//! All scores in this crate are percentages: 0.0 (maximally different under the
//! metric's normalization) to 100.0 (identical).

pub mod levenshtein;
pub mod normalize;
pub mod number;

pub use levenshtein::*;
pub use number::*;

/// Score returned for identical inputs.
pub const PERFECT_SCORE: f64 = 100.0;

/// Trait for string similarity metrics.
/// Returns a value between 0.0 (completely different) and 100.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances.
///
/// Lengths are measured in the same units the distance counts, so the
/// default `similarity` stays in range as long as `distance <= max(len)`.
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Length of `s` in the units `distance` operates on.
    fn unit_count(&self, s: &str) -> usize {
        s.len()
    }

    /// Convert to a percentage score (0.0 to 100.0)
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let max_len = self.unit_count(a).max(self.unit_count(b));
        percentage(self.distance(a, b), max_len)
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// Trait for closeness scores between two real numbers.
pub trait NumericSimilarity: Send + Sync {
    fn similarity(&self, a: f64, b: f64) -> f64;

    fn name(&self) -> &'static str;
}

/// Normalize an edit distance against the longer input length.
///
/// Two empty inputs (`max_len == 0`) are a perfect match.
#[inline]
#[must_use]
pub fn percentage(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        PERFECT_SCORE
    } else {
        (1.0 - distance as f64 / max_len as f64) * 100.0
    }
}
