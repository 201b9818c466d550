//! Levenshtein (edit) distance implementation
//!
//! Single-row dynamic programming:
//! - Time: O(m*n)
//! - Space: O(min(m,n)), one working row sized to the shorter input
//!
//! # Units
//!
//! `&str` inputs are compared byte by byte, not by `char` or grapheme. A
//! multi-byte UTF-8 character therefore counts as several edit units:
//! `levenshtein("café", "cafe") == 2` because `é` is two bytes. Callers that
//! want per-`char` semantics can collect chars and use [`levenshtein_slice`].

use super::{percentage, EditDistance};
use smallvec::SmallVec;

/// Working rows up to this length stay on the stack.
const INLINE_ROW: usize = 64;

/// Minimum number of single-element insertions, deletions and substitutions
/// turning `a` into `b`, over any element type with equality.
///
/// # Example
/// ```
/// use levmatch::algorithms::levenshtein::levenshtein_slice;
///
/// let a: Vec<char> = "café".chars().collect();
/// let b: Vec<char> = "cafe".chars().collect();
/// assert_eq!(levenshtein_slice(&a, &b), 1);
/// ```
#[must_use]
pub fn levenshtein_slice<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // The row spans the shorter input; the longer one drives the outer loop.
    let (short, long) = if a.len() > b.len() { (b, a) } else { (a, b) };
    let n = short.len();

    let mut row: SmallVec<[usize; INLINE_ROW]> = (0..=n).collect();

    for (j, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = j + 1;

        for i in 1..=n {
            let above = row[i];
            let cost = usize::from(short[i - 1] != *lc);
            let insertion = row[i - 1] + 1;
            let deletion = above + 1;
            let substitution = diagonal + cost;

            row[i] = insertion.min(deletion).min(substitution);
            diagonal = above;
        }
    }

    row[n]
}

/// Byte-level Levenshtein distance between two strings.
///
/// # Example
/// ```
/// use levmatch::algorithms::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    levenshtein_slice(a.as_bytes(), b.as_bytes())
}

/// Percentage similarity (0.0 to 100.0) derived from byte-level edit distance.
///
/// Normalized by the longer input's byte length; two empty strings score 100.0.
///
/// # Example
/// ```
/// use levmatch::algorithms::levenshtein::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("abc", "abc"), 100.0);
/// assert!((levenshtein_similarity("abc", "abd") - 200.0 / 3.0).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    percentage(levenshtein(a, b), a.len().max(b.len()))
}

/// Levenshtein distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(levenshtein("algorithm", "altruistic"), 6);
        assert_eq!(levenshtein("intention", "execution"), 5);
        assert_eq!(levenshtein("a", "b"), 1);
        assert_eq!(levenshtein("ab", "ba"), 2); // no transpositions
    }

    #[test]
    fn test_symmetric_when_swapped() {
        assert_eq!(levenshtein("sitting", "kitten"), levenshtein("kitten", "sitting"));
        assert_eq!(levenshtein("abc", "abcdef"), 3);
        assert_eq!(levenshtein("abcdef", "abc"), 3);
    }

    #[test]
    fn test_byte_units() {
        // 'é' is two bytes in UTF-8
        assert_eq!(levenshtein("café", "cafe"), 2);
        assert_eq!(levenshtein("日本語", "日本"), 3);

        let a: Vec<char> = "日本語".chars().collect();
        let b: Vec<char> = "日本".chars().collect();
        assert_eq!(levenshtein_slice(&a, &b), 1);
    }

    #[test]
    fn test_long_inputs_spill_row() {
        let a = "a".repeat(200);
        let b = format!("{}b", "a".repeat(199));
        assert_eq!(levenshtein(&a, &b), 1);
        assert_eq!(levenshtein(&a, ""), 200);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 100.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 100.0);
        assert_eq!(levenshtein_similarity("abc", ""), 0.0);
        assert_eq!(levenshtein_similarity("abc", "xyz"), 0.0);
        assert!((levenshtein_similarity("abc", "abd") - 66.666_666_666).abs() < 1e-6);
        assert!((levenshtein_similarity("cat", "cats") - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_struct_matches_free_functions() {
        let lev = Levenshtein::new();
        assert_eq!(lev.distance("kitten", "sitting"), 3);
        assert_eq!(
            EditDistance::similarity(&lev, "abc", "abd"),
            levenshtein_similarity("abc", "abd")
        );
        assert_eq!(EditDistance::name(&lev), "levenshtein");
    }
}
