//! Best-of-list and weighted matching built on the similarity scores
//!
//! The list matchers scan candidates in order and keep the first candidate
//! that reaches the highest score. An empty candidate list produces `None`
//! rather than a sentinel score.

use crate::algorithms::{levenshtein_similarity, number_similarity};
use serde::Serialize;
use tracing::trace;

/// Floor a candidate must beat before it can become the first best match.
const NO_MATCH_SCORE: f64 = -1.0;

/// A candidate paired with its score against a fixed query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<T> {
    /// The matched candidate
    pub candidate: T,
    /// Similarity score (0.0-100.0)
    pub score: f64,
    /// Position of the candidate in the input list
    pub index: usize,
}

impl<T> MatchResult<T> {
    pub fn new(candidate: T, score: f64, index: usize) -> Self {
        Self { candidate, score, index }
    }
}

/// Keep the first candidate with the strictly highest score.
///
/// NaN scores never win: they compare false against everything.
fn best_by<T, I, F>(candidates: I, mut score_fn: F) -> Option<MatchResult<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut best: Option<MatchResult<T>> = None;
    let mut scanned = 0usize;

    for (index, candidate) in candidates.into_iter().enumerate() {
        scanned += 1;
        let score = score_fn(&candidate);
        let improves = match &best {
            Some(current) => score > current.score,
            None => score > NO_MATCH_SCORE,
        };
        if improves {
            best = Some(MatchResult::new(candidate, score, index));
        }
    }

    trace!(
        scanned,
        best_index = best.as_ref().map(|m| m.index),
        "best match scan finished"
    );
    best
}

/// Score every candidate, keep those at or above `min_score`, and order them
/// best first. Equal scores keep their input order.
fn rank_by<T, I, F>(
    candidates: I,
    mut score_fn: F,
    limit: Option<usize>,
    min_score: f64,
) -> Vec<MatchResult<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut results: Vec<MatchResult<T>> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let score = score_fn(&candidate);
            MatchResult::new(candidate, score, index)
        })
        .filter(|m| m.score >= min_score)
        .collect();

    // sort_by is stable, so ties stay in list order
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(limit) = limit {
        results.truncate(limit);
    }
    trace!(kept = results.len(), "ranked candidates");
    results
}

/// Candidate string with the highest similarity to `query`.
///
/// # Example
/// ```
/// use levmatch::matching::best_string_match;
///
/// let best = best_string_match("cat", &["car", "bat", "cats"]).unwrap();
/// assert_eq!(best.candidate, "cats");
/// assert_eq!(best.score, 75.0);
/// assert!(best_string_match("cat", &[] as &[&str]).is_none());
/// ```
#[must_use]
pub fn best_string_match<'a, S: AsRef<str>>(
    query: &str,
    candidates: &'a [S],
) -> Option<MatchResult<&'a str>> {
    best_by(candidates.iter().map(|s| s.as_ref()), |c| {
        levenshtein_similarity(query, c)
    })
}

/// Candidate number with the highest similarity to `query`.
///
/// # Example
/// ```
/// use levmatch::matching::best_number_match;
///
/// let best = best_number_match(100.0, &[50.0, 90.0, 110.0]).unwrap();
/// assert_eq!(best.candidate, 90.0);
/// assert_eq!(best.index, 1);
/// ```
#[must_use]
pub fn best_number_match(query: f64, candidates: &[f64]) -> Option<MatchResult<f64>> {
    best_by(candidates.iter().copied(), |&c| number_similarity(query, c))
}

/// Weighted blend of a string score and a number score.
///
/// `weight` is the share given to the string score; the number score gets
/// `1 - weight`. The weight is not range checked: values outside `[0, 1]`
/// extrapolate beyond the usual `[0, 100]` output.
///
/// # Example
/// ```
/// use levmatch::matching::combined_match;
///
/// assert_eq!(combined_match("abc", "abc", 10.0, 0.0, 0.5), 50.0);
/// ```
#[must_use]
pub fn combined_match(s1: &str, s2: &str, n1: f64, n2: f64, weight: f64) -> f64 {
    let string_score = levenshtein_similarity(s1, s2);
    let number_score = number_similarity(n1, n2);
    string_score * weight + number_score * (1.0 - weight)
}

/// All candidate strings scoring at least `min_score`, best first.
#[must_use]
pub fn top_string_matches<'a, S: AsRef<str>>(
    query: &str,
    candidates: &'a [S],
    limit: Option<usize>,
    min_score: f64,
) -> Vec<MatchResult<&'a str>> {
    rank_by(
        candidates.iter().map(|s| s.as_ref()),
        |c| levenshtein_similarity(query, c),
        limit,
        min_score,
    )
}

/// All candidate numbers scoring at least `min_score`, best first.
#[must_use]
pub fn top_number_matches(
    query: f64,
    candidates: &[f64],
    limit: Option<usize>,
    min_score: f64,
) -> Vec<MatchResult<f64>> {
    rank_by(
        candidates.iter().copied(),
        |&c| number_similarity(query, c),
        limit,
        min_score,
    )
}

/// Shared scan used by [`Matcher`](crate::config::Matcher) with preprocessed text.
pub(crate) fn best_with<'a, S, F>(candidates: &'a [S], score_fn: F) -> Option<MatchResult<&'a str>>
where
    S: AsRef<str>,
    F: FnMut(&&'a str) -> f64,
{
    best_by(candidates.iter().map(|s| s.as_ref()), score_fn)
}

pub(crate) fn rank_with<'a, S, F>(
    candidates: &'a [S],
    score_fn: F,
    limit: Option<usize>,
    min_score: f64,
) -> Vec<MatchResult<&'a str>>
where
    S: AsRef<str>,
    F: FnMut(&&'a str) -> f64,
{
    rank_by(candidates.iter().map(|s| s.as_ref()), score_fn, limit, min_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_string_match() {
        let candidates = ["car", "bat", "cats"];
        // car: 1 edit / 3, bat: 1 edit / 3, cats: 1 edit / 4
        let expected_cats = levenshtein_similarity("cat", "cats");
        assert!(expected_cats > levenshtein_similarity("cat", "car"));

        let best = best_string_match("cat", &candidates).unwrap();
        assert_eq!(best.candidate, "cats");
        assert_eq!(best.index, 2);
        assert_eq!(best.score, expected_cats);
    }

    #[test]
    fn test_string_tie_keeps_first() {
        let candidates = vec!["bat".to_string(), "car".to_string()];
        let best = best_string_match("cat", &candidates).unwrap();
        assert_eq!(best.candidate, "bat");
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_zero_score_first_candidate_is_kept() {
        let best = best_string_match("abc", &["xyz", "uvw"]).unwrap();
        assert_eq!(best.candidate, "xyz");
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_empty_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(best_string_match("cat", &empty), None);
        assert_eq!(best_number_match(1.0, &[]), None);
    }

    #[test]
    fn test_best_number_match() {
        let best = best_number_match(100.0, &[50.0, 90.0, 110.0]).unwrap();
        // 90 -> 90.0, 110 -> ~90.909
        assert_eq!(best.candidate, 110.0);
        assert_eq!(best.index, 2);
        assert_eq!(best.score, number_similarity(100.0, 110.0));
    }

    #[test]
    fn test_number_tie_keeps_first() {
        let best = best_number_match(10.0, &[5.0, 0.0, 5.0]).unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(best.score, 50.0);
    }

    #[test]
    fn test_nan_candidates_are_skipped() {
        let best = best_number_match(10.0, &[f64::NAN, 9.0]).unwrap();
        assert_eq!(best.index, 1);
        assert_eq!(best_number_match(10.0, &[f64::NAN]), None);
    }

    #[test]
    fn test_combined_weight_extremes() {
        let s = levenshtein_similarity("kitten", "sitting");
        let n = number_similarity(7.0, 9.0);
        assert_eq!(combined_match("kitten", "sitting", 7.0, 9.0, 1.0), s);
        assert_eq!(combined_match("kitten", "sitting", 7.0, 9.0, 0.0), n);
    }

    #[test]
    fn test_combined_blend() {
        assert_eq!(combined_match("abc", "abc", 10.0, 0.0, 0.5), 50.0);
        assert!((combined_match("abc", "abc", 10.0, 0.0, 0.25) - 25.0).abs() < 1e-9);
        // unchecked weights extrapolate
        assert_eq!(combined_match("abc", "abc", 10.0, 0.0, 2.0), 200.0);
    }

    #[test]
    fn test_top_string_matches() {
        let candidates = ["car", "bat", "cats", "dog"];
        let ranked = top_string_matches("cat", &candidates, None, 50.0);
        let texts: Vec<&str> = ranked.iter().map(|m| m.candidate).collect();
        assert_eq!(texts, vec!["cats", "car", "bat"]);

        let limited = top_string_matches("cat", &candidates, Some(1), 0.0);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].candidate, "cats");
    }

    #[test]
    fn test_top_number_matches() {
        let ranked = top_number_matches(100.0, &[50.0, 100.0, 0.0, 80.0], None, 1.0);
        let values: Vec<f64> = ranked.iter().map(|m| m.candidate).collect();
        assert_eq!(values, vec![100.0, 80.0, 50.0]);
    }
}
