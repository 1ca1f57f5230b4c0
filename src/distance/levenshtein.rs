//! Levenshtein distance
//!
//! The Levenshtein distance is the minimum number of single element
//! insertions, deletions and substitutions required to transform one
//! sequence into the other. All three operations have a cost of 1.
//!
//! # Performance
//!
//! The implementation fills the complete `(N+1)*(M+1)` dynamic programming
//! table, so it has a runtime complexity of `O(N*M)` and a memory usage of
//! `O(N*M)`.

use crate::details::common::{normalize, round_hundredths};
use crate::details::matrix::Matrix;

pub(crate) fn distance_slices<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    let len1 = s1.len();
    let len2 = s2.len();

    let mut dp = Matrix::new(len1 + 1, len2 + 1, 0_usize);
    // transforming from or into the empty prefix costs one edit per element
    for i in 0..=len1 {
        dp.set(i, 0, i);
    }
    for j in 0..=len2 {
        dp.set(0, j, j);
    }

    for (i, ch1) in s1.iter().enumerate() {
        for (j, ch2) in s2.iter().enumerate() {
            let cost = usize::from(ch1 != ch2);
            let val = (dp.get(i, j) + cost)
                .min(dp.get(i, j + 1) + 1)
                .min(dp.get(i + 1, j) + 1);
            dp.set(i + 1, j + 1, val);
        }
    }

    dp.get(len1, len2)
}

/// Percentage score on already normalized sequences.
pub(crate) fn score_slices<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    let maximum = s1.len().max(s2.len());
    if maximum == 0 {
        return 100.0;
    }

    let dist = distance_slices(s1, s2);
    round_hundredths(100.0 * (maximum - dist) as f64 / maximum as f64)
}

/// Calculates the minimum number of insertions, deletions, and substitutions
/// required to change one sequence into the other.
///
/// # Examples
///
/// ```
/// use matchscore::distance::levenshtein;
///
/// assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
/// assert_eq!(0, levenshtein::distance("".chars(), "".chars()));
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    distance_slices(&s1, &s2)
}

/// Levenshtein similarity, calculated as `max(len1, len2) - `[`distance`].
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    s1.len().max(s2.len()) - distance_slices(&s1, &s2)
}

/// Normalized Levenshtein similarity in the range [0.0, 1.0].
///
/// Two empty sequences are considered identical and have a similarity of `1.0`.
pub fn normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    let maximum = s1.len().max(s2.len());
    if maximum == 0 {
        return 1.0;
    }

    (maximum - distance_slices(&s1, &s2)) as f64 / maximum as f64
}

/// Case insensitive edit similarity as a percentage rounded to two decimals.
///
/// Returns `100.0` when both strings are empty.
///
/// # Example
/// ```
/// use matchscore::distance::levenshtein;
///
/// assert_eq!(100.0, levenshtein::score("Washington", "WASHINGTON"));
/// assert_eq!(57.14, levenshtein::score("kitten", "sitting"));
/// ```
pub fn score(a: &str, b: &str) -> f64 {
    let s1: Vec<char> = normalize(a).chars().collect();
    let s2: Vec<char> = normalize(b).chars().collect();
    score_slices(&s1, &s2)
}
