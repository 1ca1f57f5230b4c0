//! N-gram similarity
//!
//! Every contiguous window of `n` elements (step 1) is one n-gram. The
//! similarity is the Jaccard index of the two n-gram sets:
//!
//! ```text
//! ngram = |A ∩ B| / |A ∪ B|
//! ```
//!
//! A sequence shorter than `n` has no n-grams. When neither side has any the
//! similarity is defined as `0.0`.

use std::collections::HashSet;
use std::hash::Hash;

use crate::details::common::{normalize, ratio_to_percent};

/// N-gram size used by [`score`].
pub const DEFAULT_N: usize = 2;

/// Set of distinct n-grams of a sequence.
#[derive(Debug, Clone)]
pub(crate) struct NGramSet<T> {
    grams: HashSet<Vec<T>>,
}

impl<T> NGramSet<T>
where
    T: Hash + Eq + Clone,
{
    pub fn new(seq: &[T], n: usize) -> Self {
        let grams = if n == 0 {
            HashSet::new()
        } else {
            seq.windows(n).map(<[T]>::to_vec).collect()
        };
        NGramSet { grams }
    }

    pub fn jaccard(&self, other: &NGramSet<T>) -> f64 {
        let intersection = self.grams.intersection(&other.grams).count();
        let union = self.grams.len() + other.grams.len() - intersection;
        if union == 0 {
            return 0.0;
        }

        intersection as f64 / union as f64
    }
}

/// Jaccard similarity of the n-grams of both sequences in the range [0.0, 1.0].
///
/// # Example
/// ```
/// use matchscore::distance::ngram;
///
/// // {ni, ig, gh, ht} vs {na, ac, ch, ht}
/// let sim = ngram::similarity("night".chars(), "nacht".chars(), 2);
/// assert!((sim - 1.0 / 7.0).abs() < 0.000_1);
///
/// // both inputs are shorter than n
/// assert_eq!(0.0, ngram::similarity("a".chars(), "b".chars(), 2));
/// ```
pub fn similarity<Iter1, Iter2, T>(s1: Iter1, s2: Iter2, n: usize) -> f64
where
    Iter1: IntoIterator<Item = T>,
    Iter2: IntoIterator<Item = T>,
    T: Hash + Eq + Clone,
{
    let s1: Vec<T> = s1.into_iter().collect();
    let s2: Vec<T> = s2.into_iter().collect();
    NGramSet::new(&s1, n).jaccard(&NGramSet::new(&s2, n))
}

/// Case insensitive character bigram similarity as a percentage rounded to
/// two decimals.
///
/// # Example
/// ```
/// use matchscore::distance::ngram;
///
/// assert_eq!(100.0, ngram::score("NW", "nw"));
/// assert_eq!(14.29, ngram::score("night", "nacht"));
/// ```
pub fn score(a: &str, b: &str) -> f64 {
    let s1: Vec<char> = normalize(a).chars().collect();
    let s2: Vec<char> = normalize(b).chars().collect();
    ratio_to_percent(NGramSet::new(&s1, DEFAULT_N).jaccard(&NGramSet::new(&s2, DEFAULT_N)))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr, $d:expr) => {
            if ($x - $y).abs() > $d {
                panic!("{:?} != {:?}", $x, $y);
            }
        };
    }

    fn test_similarity(s1: &str, s2: &str, n: usize) -> f64 {
        let res1 = similarity(s1.chars(), s2.chars(), n);
        let res2 = similarity(s2.chars(), s1.chars(), n);
        assert_eq!(res1, res2);
        res1
    }

    #[test]
    fn identical() {
        assert_eq!(1.0, test_similarity("ab", "ab", 2));
        assert_eq!(1.0, test_similarity("washington", "washington", 2));
        assert_eq!(1.0, test_similarity("washington", "washington", 3));
    }

    #[test]
    fn too_short_for_n() {
        assert_eq!(0.0, test_similarity("", "", 2));
        assert_eq!(0.0, test_similarity("a", "a", 2));
        assert_eq!(0.0, test_similarity("", "abc", 2));
        assert_eq!(0.0, test_similarity("abc", "abc", 0));
    }

    #[test]
    fn duplicate_grams_count_once() {
        // {aa} vs {aa, ab}
        assert_delta!(0.5, test_similarity("aaaa", "aab", 2), 0.000_001);
    }

    #[test]
    fn larger_n() {
        // {abc, bcd} vs {abc, bce}
        assert_delta!(1.0 / 3.0, test_similarity("abcd", "abce", 3), 0.000_001);
    }

    #[test]
    fn score_examples() {
        assert_eq!(0.0, score("", ""));
        assert_eq!(
            75.61,
            score(
                "1730 7th st nw washington dc 20001",
                "1730 7th St NW Apt 411, Washington, DC 20001"
            )
        );
    }
}
