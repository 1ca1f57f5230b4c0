//! Cosine similarity
//!
//! Both inputs are treated as bags of tokens. Every distinct token of either
//! input is one dimension of a term frequency vector and the similarity is
//! the cosine of the angle between the two vectors:
//!
//! ```text
//! cosine = (v1 . v2) / (|v1| * |v2|)
//! ```
//!
//! Text is tokenized by splitting on whitespace only. Punctuation stays
//! attached to its word, so `dc,` and `dc` are different tokens.
//!
//! # Performance
//!
//! Building a term vector is `O(N)`, comparing two of them is
//! `O(min(N, M))`.

use std::collections::HashMap;
use std::hash::Hash;

use crate::details::common::{normalize, ratio_to_percent};

/// Term frequency vector of a token sequence.
#[derive(Debug, Clone)]
pub(crate) struct TermVector<T> {
    counts: HashMap<T, u64>,
    norm_sq: u128,
}

impl<T> TermVector<T>
where
    T: Hash + Eq,
{
    pub fn new<Iter>(tokens: Iter) -> Self
    where
        Iter: IntoIterator<Item = T>,
    {
        let mut counts: HashMap<T, u64> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        let norm_sq = counts
            .values()
            .map(|&count| u128::from(count) * u128::from(count))
            .sum();
        TermVector { counts, norm_sq }
    }

    /// Cosine of the angle between both vectors, `0.0` if either has no
    /// tokens.
    pub fn cosine(&self, other: &TermVector<T>) -> f64 {
        if self.norm_sq == 0 || other.norm_sq == 0 {
            return 0.0;
        }

        let (shorter, longer) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: u128 = shorter
            .counts
            .iter()
            .filter_map(|(token, &count)| {
                longer
                    .counts
                    .get(token)
                    .map(|&other| u128::from(count) * u128::from(other))
            })
            .sum();

        // the norm product can exceed u128, so it is formed in f64. A single
        // sqrt keeps identical inputs at exactly 1.0
        dot as f64 / (self.norm_sq as f64 * other.norm_sq as f64).sqrt()
    }
}

pub(crate) fn tokenize(text: &str) -> std::str::SplitWhitespace<'_> {
    text.split_whitespace()
}

/// Cosine similarity of two token sequences in the range [0.0, 1.0].
///
/// Returns `0.0` when either sequence is empty.
///
/// # Example
/// ```
/// use matchscore::distance::cosine;
///
/// let sim = cosine::similarity(["apt", "411"], ["411", "apt"]);
/// assert_eq!(1.0, sim);
/// assert_eq!(0.0, cosine::similarity(Vec::<&str>::new(), ["dc"]));
/// ```
pub fn similarity<Iter1, Iter2, T>(tokens1: Iter1, tokens2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = T>,
    Iter2: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    TermVector::new(tokens1).cosine(&TermVector::new(tokens2))
}

/// Case insensitive cosine similarity of the whitespace separated words of
/// both strings, as a percentage rounded to two decimals.
///
/// # Example
/// ```
/// use matchscore::distance::cosine;
///
/// assert_eq!(100.0, cosine::score("Washington DC", "dc washington"));
/// assert_eq!(0.0, cosine::score("", "dc"));
/// ```
pub fn score(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    ratio_to_percent(similarity(tokenize(&a), tokenize(&b)))
}
