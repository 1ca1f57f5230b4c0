//! Jaro-Winkler similarity
//!
//! The Jaro-Winkler similarity extends the [`Jaro`] similarity to provide additional
//! sensitivity to matching prefixes. Sequences sharing up to the first four
//! elements receive a bonus proportional to the remaining distance:
//!
//! ```text
//! jaro_winkler = jaro + prefix * prefix_weight * (1 - jaro)
//! ```
//!
//! The bonus is applied regardless of the underlying Jaro score.
//!
//! [`Jaro`]: ../jaro/index.html

use crate::details::common::{find_common_prefix, normalize, ratio_to_percent};
use crate::distance::jaro;

/// Default scaling factor for the common prefix bonus.
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Number of leading elements that can contribute to the prefix bonus.
pub const MAX_PREFIX: usize = 4;

pub(crate) fn similarity_slices<Elem1, Elem2>(
    s1: &[Elem1],
    s2: &[Elem2],
    prefix_weight: f64,
) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    let prefix = find_common_prefix(s1.iter(), s2.iter()).min(MAX_PREFIX);
    let sim = jaro::similarity_slices(s1, s2);
    sim + prefix as f64 * prefix_weight * (1.0 - sim)
}

/// Percentage score on already normalized sequences.
pub(crate) fn score_slices<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    ratio_to_percent(similarity_slices(s1, s2, DEFAULT_PREFIX_WEIGHT))
}

/// Jaro-Winkler similarity in the range [0.0, 1.0].
///
/// `prefix_weight` defaults to `0.1`. Values above `0.25` can push the result
/// above `1.0`.
///
/// # Example
/// ```
/// use matchscore::distance::jaro_winkler;
///
/// let sim = jaro_winkler::similarity("martha".chars(), "marhta".chars(), None);
/// assert!((sim - 0.961_111).abs() < 0.000_1);
/// ```
pub fn similarity<Iter1, Iter2, PrefixWeight>(
    s1: Iter1,
    s2: Iter2,
    prefix_weight: PrefixWeight,
) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    PrefixWeight: Into<Option<f64>>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    similarity_slices(
        &s1,
        &s2,
        prefix_weight.into().unwrap_or(DEFAULT_PREFIX_WEIGHT),
    )
}

/// Jaro-Winkler distance in the range [0.0, 1.0].
///
/// This is calculated as `1.0 - `[`similarity`].
pub fn distance<Iter1, Iter2, PrefixWeight>(
    s1: Iter1,
    s2: Iter2,
    prefix_weight: PrefixWeight,
) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    PrefixWeight: Into<Option<f64>>,
{
    1.0 - similarity(s1, s2, prefix_weight)
}

/// Case insensitive Jaro-Winkler similarity as a percentage rounded to two
/// decimals.
///
/// # Example
/// ```
/// use matchscore::distance::jaro_winkler;
///
/// assert_eq!(100.0, jaro_winkler::score("DC", "dc"));
/// assert_eq!(96.11, jaro_winkler::score("Martha", "MARHTA"));
/// ```
pub fn score(a: &str, b: &str) -> f64 {
    let s1: Vec<char> = normalize(a).chars().collect();
    let s2: Vec<char> = normalize(b).chars().collect();
    score_slices(&s1, &s2)
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

    fn test_similarity(s1: &str, s2: &str) -> f64 {
        let res1 = similarity(s1.chars(), s2.chars(), None);
        let res2 = similarity(s2.chars(), s1.chars(), None);
        assert_delta!(res1, res2, 0.000_001);
        res1
    }

    #[test]
    fn prefix_bonus() {
        assert_delta!(0.961_111, test_similarity("martha", "marhta"), 0.000_1);
        assert_delta!(0.84, test_similarity("dwayne", "duane"), 0.000_1);
        assert_delta!(0.76, test_similarity("night", "nacht"), 0.000_1);
        // no shared prefix, no bonus
        assert_delta!(
            jaro::similarity("kitten".chars(), "sitting".chars()),
            test_similarity("kitten", "sitting"),
            0.000_001
        );
    }

    #[test]
    fn prefix_is_capped() {
        let jaro_sim = jaro::similarity("1730 7th st".chars(), "1730 7th nw".chars());
        let expected = jaro_sim + 4.0 * 0.1 * (1.0 - jaro_sim);
        assert_delta!(expected, test_similarity("1730 7th st", "1730 7th nw"), 0.000_001);
        // nine shared characters still only earn four steps of bonus
        assert_delta!(0.927_273, test_similarity("1730 7th st", "1730 7th nw"), 0.000_001);
        // jaro 11/12, seven shared characters
        assert_delta!(0.95, test_similarity("abcdefgx", "abcdefgy"), 0.000_001);
    }

    #[test]
    fn bonus_applies_below_jaro_threshold() {
        // jaro("abxyz", "abqrs") is 0.6, the bonus is still applied
        let jaro_sim = jaro::similarity("abxyz".chars(), "abqrs".chars());
        assert_delta!(0.6, jaro_sim, 0.000_001);
        assert_delta!(0.68, test_similarity("abxyz", "abqrs"), 0.000_001);
    }

    #[test]
    fn custom_prefix_weight() {
        let sim = similarity("martha".chars(), "marhta".chars(), 0.2);
        assert_delta!(0.944_444 + 3.0 * 0.2 * (1.0 - 0.944_444), sim, 0.000_1);
        assert_delta!(
            1.0 - sim,
            distance("martha".chars(), "marhta".chars(), 0.2),
            0.000_001
        );
    }

    #[test]
    fn score_rounding() {
        assert_eq!(100.0, score("", ""));
        assert_eq!(0.0, score("", "abc"));
        assert_eq!(
            90.75,
            score(
                "1730 7th st nw washington dc 20001",
                "1730 7th St NW Apt 411, Washington, DC 20001"
            )
        );
    }

    #[test]
    fn unicode() {
        assert_eq!(100.0, score("ÉCOLE", "école"));
        assert!(test_similarity("Иванко", "Петрунко") < 0.7);
    }
}
