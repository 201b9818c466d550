//! Python bindings (`levmatch._core`)
//!
//! Thin wrappers over the Rust API. Empty candidate lists come back as `None`.

use crate::algorithms::normalize::NormalizationMode;
use crate::config::{ConfigError, MatchConfig, Matcher};
use crate::{algorithms, matching};
use pyo3::create_exception;
use pyo3::prelude::*;

create_exception!(levmatch, LevmatchError, pyo3::exceptions::PyException);
create_exception!(levmatch, ValidationError, LevmatchError);

fn to_py_err(err: ConfigError) -> PyErr {
    ValidationError::new_err(err.to_string())
}

/// Best string candidate and its score (0.0-100.0).
#[pyclass(name = "MatchResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyMatchResult {
    #[pyo3(get)]
    pub text: String,

    #[pyo3(get)]
    pub score: f64,

    /// Position of the candidate in the input list
    #[pyo3(get)]
    pub index: usize,
}

#[pymethods]
impl PyMatchResult {
    fn __repr__(&self) -> String {
        format!(
            "MatchResult(text='{}', score={:.3}, index={})",
            self.text, self.score, self.index
        )
    }

    fn __str__(&self) -> String {
        format!("{}: {:.3}", self.text, self.score)
    }
}

impl From<matching::MatchResult<&str>> for PyMatchResult {
    fn from(m: matching::MatchResult<&str>) -> Self {
        Self {
            text: m.candidate.to_string(),
            score: m.score,
            index: m.index,
        }
    }
}

/// Best number candidate and its score (0.0-100.0).
#[pyclass(name = "NumberMatchResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyNumberMatchResult {
    #[pyo3(get)]
    pub value: f64,

    #[pyo3(get)]
    pub score: f64,

    #[pyo3(get)]
    pub index: usize,
}

#[pymethods]
impl PyNumberMatchResult {
    fn __repr__(&self) -> String {
        format!(
            "NumberMatchResult(value={}, score={:.3}, index={})",
            self.value, self.score, self.index
        )
    }
}

impl From<matching::MatchResult<f64>> for PyNumberMatchResult {
    fn from(m: matching::MatchResult<f64>) -> Self {
        Self {
            value: m.candidate,
            score: m.score,
            index: m.index,
        }
    }
}

/// Byte-level Levenshtein distance.
#[pyfunction]
fn levenshtein(a: &str, b: &str) -> usize {
    algorithms::levenshtein(a, b)
}

/// Levenshtein similarity as a percentage (0.0 to 100.0).
#[pyfunction]
fn similarity(a: &str, b: &str) -> f64 {
    algorithms::levenshtein_similarity(a, b)
}

/// Ratio closeness of two numbers as a percentage.
#[pyfunction]
fn match_number(a: f64, b: f64) -> f64 {
    algorithms::number_similarity(a, b)
}

/// Best matching string, or `None` for an empty list.
#[pyfunction]
fn match_string_list(py: Python<'_>, query: &str, candidates: Vec<String>) -> Option<PyMatchResult> {
    py.allow_threads(|| matching::best_string_match(query, &candidates).map(PyMatchResult::from))
}

/// Best matching number, or `None` for an empty list.
#[pyfunction]
fn match_number_list(query: f64, candidates: Vec<f64>) -> Option<PyNumberMatchResult> {
    matching::best_number_match(query, &candidates).map(PyNumberMatchResult::from)
}

/// Weighted blend: `similarity(s1, s2) * weight + match_number(n1, n2) * (1 - weight)`.
///
/// The weight is not range checked.
#[pyfunction]
#[pyo3(signature = (s1, s2, n1, n2, weight=0.5))]
fn combined_match(s1: &str, s2: &str, n1: f64, n2: f64, weight: f64) -> f64 {
    matching::combined_match(s1, s2, n1, n2, weight)
}

/// Rank candidates against `query`, best first.
///
/// # Arguments
/// * `limit` - Maximum number of results
/// * `min_score` - Minimum score to keep (0.0 to 100.0)
/// * `normalize` - Optional normalization mode: "lowercase", "remove_punctuation", "remove_whitespace", "strict"
#[pyfunction]
#[pyo3(signature = (query, candidates, limit=None, min_score=0.0, normalize=None))]
fn find_best_matches(
    py: Python<'_>,
    query: &str,
    candidates: Vec<String>,
    limit: Option<usize>,
    min_score: f64,
    normalize: Option<&str>,
) -> PyResult<Vec<PyMatchResult>> {
    let normalize = normalize
        .map(str::parse::<NormalizationMode>)
        .transpose()
        .map_err(to_py_err)?;
    let matcher = Matcher::new(MatchConfig {
        min_score,
        limit,
        normalize,
        ..MatchConfig::default()
    })
    .map_err(to_py_err)?;

    Ok(py.allow_threads(|| {
        matcher
            .rank_strings(query, &candidates)
            .into_iter()
            .map(PyMatchResult::from)
            .collect()
    }))
}

#[pymodule]
fn _core(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("LevmatchError", py.get_type::<LevmatchError>())?;
    m.add("ValidationError", py.get_type::<ValidationError>())?;

    m.add_class::<PyMatchResult>()?;
    m.add_class::<PyNumberMatchResult>()?;

    m.add_function(wrap_pyfunction!(levenshtein, m)?)?;
    m.add_function(wrap_pyfunction!(similarity, m)?)?;
    m.add_function(wrap_pyfunction!(match_number, m)?)?;
    m.add_function(wrap_pyfunction!(match_string_list, m)?)?;
    m.add_function(wrap_pyfunction!(match_number_list, m)?)?;
    m.add_function(wrap_pyfunction!(combined_match, m)?)?;
    m.add_function(wrap_pyfunction!(find_best_matches, m)?)?;
    Ok(())
}
