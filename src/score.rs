//! Aggregation of the four metrics into a [`ScoreSet`].
//!
//! All metrics see the same lowercased pair. Every score is a percentage in
//! `[0, 100]` rounded to two decimals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::details::common::{normalize, ratio_to_percent};
use crate::distance::cosine::{tokenize, TermVector};
use crate::distance::ngram::{NGramSet, DEFAULT_N};
use crate::distance::{jaro_winkler, levenshtein};
use crate::error::MatchError;

/// Identifies one of the metrics of a [`ScoreSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Levenshtein,
    JaroWinkler,
    Cosine,
    NGram,
}

impl Metric {
    /// All metrics in a fixed order.
    pub const ALL: [Metric; 4] = [
        Metric::Levenshtein,
        Metric::JaroWinkler,
        Metric::Cosine,
        Metric::NGram,
    ];

    /// Stable identifier of the metric.
    pub const fn key(self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::JaroWinkler => "jaroWinkler",
            Metric::Cosine => "cosine",
            Metric::NGram => "nGram",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.key() == s)
            .ok_or_else(|| MatchError::UnknownMetric(s.to_string()))
    }
}

/// Percentage scores of the four metrics for one string pair.
///
/// Serializes as an object with exactly the keys `levenshtein`,
/// `jaroWinkler`, `cosine` and `nGram`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreSet {
    levenshtein: f64,
    jaro_winkler: f64,
    cosine: f64,
    n_gram: f64,
}

impl ScoreSet {
    pub fn new(levenshtein: f64, jaro_winkler: f64, cosine: f64, n_gram: f64) -> Self {
        Self {
            levenshtein,
            jaro_winkler,
            cosine,
            n_gram,
        }
    }

    /// Score of `metric`.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Levenshtein => self.levenshtein,
            Metric::JaroWinkler => self.jaro_winkler,
            Metric::Cosine => self.cosine,
            Metric::NGram => self.n_gram,
        }
    }

    /// `(metric, score)` pairs in [`Metric::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }
}

/// Compares a single query against any number of choices.
///
/// The normalized query, its term vector and its bigrams are computed once
/// in [`BatchComparator::new`] and reused for every comparison.
///
/// # Example
/// ```
/// use matchscore::{compute_similarity_scores, BatchComparator};
///
/// let scorer = BatchComparator::new("Apt 411 Washington DC 20001");
/// let choice = "1730 7th St NW Apt 411, Washington, DC 20001";
/// assert_eq!(
///     compute_similarity_scores("Apt 411 Washington DC 20001", choice),
///     scorer.scores(choice)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BatchComparator {
    chars: Vec<char>,
    terms: TermVector<String>,
    bigrams: NGramSet<char>,
}

impl BatchComparator {
    pub fn new(query: &str) -> Self {
        let query = normalize(query);
        let chars: Vec<char> = query.chars().collect();
        let terms = TermVector::new(tokenize(&query).map(str::to_owned));
        let bigrams = NGramSet::new(&chars, DEFAULT_N);
        BatchComparator {
            chars,
            terms,
            bigrams,
        }
    }

    /// Scores of the cached query against `choice`.
    pub fn scores(&self, choice: &str) -> ScoreSet {
        let choice = normalize(choice);
        let chars: Vec<char> = choice.chars().collect();

        let scores = ScoreSet {
            levenshtein: levenshtein::score_slices(&self.chars, &chars),
            jaro_winkler: jaro_winkler::score_slices(&self.chars, &chars),
            cosine: ratio_to_percent(
                self.terms
                    .cosine(&TermVector::new(tokenize(&choice).map(str::to_owned))),
            ),
            n_gram: ratio_to_percent(self.bigrams.jaccard(&NGramSet::new(&chars, DEFAULT_N))),
        };
        trace!(
            levenshtein = scores.levenshtein,
            jaro_winkler = scores.jaro_winkler,
            cosine = scores.cosine,
            n_gram = scores.n_gram,
            "computed similarity scores"
        );
        scores
    }
}

/// Computes all four metric scores for a string pair.
///
/// # Example
/// ```
/// use matchscore::{compute_similarity_scores, Metric};
///
/// let scores = compute_similarity_scores("Apt 411", "APT 411");
/// assert!(scores.iter().all(|(_, score)| score == 100.0));
/// assert_eq!(100.0, scores.get(Metric::NGram));
/// ```
pub fn compute_similarity_scores(a: &str, b: &str) -> ScoreSet {
    BatchComparator::new(a).scores(b)
}
