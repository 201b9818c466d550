//! Ratio-based closeness score for real numbers
//!
//! `score = (1 - |a - b| / max(|a|, |b|)) * 100`
//!
//! This is a closeness ratio, not a metric: it has no triangle inequality, and
//! it is harsh around zero. Any nonzero value compared with `0.0` scores 0.0
//! no matter how small it is, while `1000.0` vs `1001.0` scores ~99.9.
//!
//! Values of opposite sign drive the ratio below zero, e.g. `10.0` vs `-10.0`
//! scores -100.0. Inputs are expected to share a sign when a `[0, 100]` score
//! is required.
//!
//! Non-finite inputs are outside the domain: NaN propagates to a NaN score,
//! and an infinite input yields NaN unless both sides are the same infinity.

use super::{NumericSimilarity, PERFECT_SCORE};

/// Percentage closeness of two numbers (100.0 for exact equality).
///
/// # Example
/// ```
/// use levmatch::algorithms::number::number_similarity;
///
/// assert_eq!(number_similarity(10.0, 10.0), 100.0);
/// assert_eq!(number_similarity(10.0, 0.0), 0.0);
/// assert_eq!(number_similarity(50.0, 100.0), 50.0);
/// ```
#[must_use]
pub fn number_similarity(a: f64, b: f64) -> f64 {
    if a == b {
        return PERFECT_SCORE;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());
    // Unreachable for finite inputs: both zero already compared equal.
    if max_abs == 0.0 {
        return 0.0;
    }

    (1.0 - diff / max_abs) * 100.0
}

/// Number similarity calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatioSimilarity;

impl NumericSimilarity for RatioSimilarity {
    fn similarity(&self, a: f64, b: f64) -> f64 {
        number_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "ratio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values() {
        assert_eq!(number_similarity(10.0, 10.0), 100.0);
        assert_eq!(number_similarity(0.0, 0.0), 100.0);
        assert_eq!(number_similarity(0.0, -0.0), 100.0);
        assert_eq!(number_similarity(-3.5, -3.5), 100.0);
    }

    #[test]
    fn test_against_zero() {
        assert_eq!(number_similarity(10.0, 0.0), 0.0);
        assert_eq!(number_similarity(0.0, 1e-9), 0.0);
        assert_eq!(number_similarity(-4.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratio() {
        assert!((number_similarity(8.0, 10.0) - 80.0).abs() < 1e-9);
        assert!((number_similarity(10.0, 8.0) - 80.0).abs() < 1e-9);
        assert_eq!(number_similarity(50.0, 100.0), 50.0);
        assert!((number_similarity(1000.0, 1001.0) - 99.900_099_900_1).abs() < 1e-6);
        assert!((number_similarity(-8.0, -10.0) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_opposite_signs_leave_range() {
        assert_eq!(number_similarity(10.0, -10.0), -100.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(number_similarity(f64::NAN, 1.0).is_nan());
        assert!(number_similarity(1.0, f64::NAN).is_nan());
    }
}
