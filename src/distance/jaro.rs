//! Jaro similarity
//!
//! The Jaro similarity rewards elements that occur in both sequences within a
//! bounded window of each other and penalizes matched elements that appear in
//! a different order (transpositions).
//!
//! ```text
//! jaro = (m / |s1| + m / |s2| + (m - t / 2) / m) / 3
//! ```
//!
//! where `m` is the number of matched elements and `t` the number of matched
//! positions whose elements differ when both sides are walked in order.
//!
//! # Performance
//!
//! The implementation has a runtime complexity of `O(N*W)` with `W` the size
//! of the match window and a memory usage of `O(N+M)`.

fn sequences_equal<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> bool
where
    Elem1: PartialEq<Elem2>,
{
    s1.len() == s2.len() && s1.iter().zip(s2).all(|(ch1, ch2)| ch1 == ch2)
}

/// Half width of the match window. Clamped so that very short inputs end up
/// with a window of zero instead of a negative one.
fn match_window(len1: usize, len2: usize) -> usize {
    (len1.max(len2) / 2).saturating_sub(1)
}

fn jaro_calculate_similarity(
    len1: usize,
    len2: usize,
    common_chars: usize,
    transpositions: usize,
) -> f64 {
    let matches = common_chars as f64;
    let mut sim = 0.0;
    sim += matches / len1 as f64;
    sim += matches / len2 as f64;
    sim += (matches - transpositions as f64 / 2.0) / matches;

    sim / 3.0
}

pub(crate) fn similarity_slices<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    // also covers two empty sequences, which would otherwise divide by zero
    if sequences_equal(s1, s2) {
        return 1.0;
    }

    let len1 = s1.len();
    let len2 = s2.len();
    let bound = match_window(len1, len2);

    let mut s1_flags = vec![false; len1];
    let mut s2_flags = vec![false; len2];
    let mut common_chars = 0;

    // greedy: every element of s1 takes the first unmatched equal element of
    // s2 inside its window
    for (i, ch1) in s1.iter().enumerate() {
        let start = i.saturating_sub(bound);
        let end = (i + bound + 1).min(len2);

        for j in start..end {
            if s2_flags[j] || *ch1 != s2[j] {
                continue;
            }
            s1_flags[i] = true;
            s2_flags[j] = true;
            common_chars += 1;
            break;
        }
    }

    if common_chars == 0 {
        return 0.0;
    }

    let mut transpositions = 0;
    let mut k = 0;
    for (i, ch1) in s1.iter().enumerate() {
        if !s1_flags[i] {
            continue;
        }
        while !s2_flags[k] {
            k += 1;
        }
        if *ch1 != s2[k] {
            transpositions += 1;
        }
        k += 1;
    }

    jaro_calculate_similarity(len1, len2, common_chars, transpositions)
}

/// Jaro similarity in the range [0.0, 1.0].
///
/// Identical sequences (including two empty ones) have a similarity of `1.0`,
/// sequences without any matched element a similarity of `0.0`.
///
/// # Example
/// ```
/// use matchscore::distance::jaro;
///
/// let sim = jaro::similarity("martha".chars(), "marhta".chars());
/// assert!((sim - 0.944_444).abs() < 0.000_1);
/// ```
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    similarity_slices(&s1, &s2)
}

/// Jaro distance in the range [0.0, 1.0].
///
/// This is calculated as `1.0 - `[`similarity`].
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    1.0 - similarity(s1, s2)
}
