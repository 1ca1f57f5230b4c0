/// Lowercased copy of `s`. Every metric observes text through this, so the
/// original casing never reaches a comparison.
pub(crate) fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Rounds half away from zero to two decimal places.
///
/// Ties are decided on the binary value scaled by 100, so `0.125` becomes
/// `0.13` where half to even rounding would report `0.12`.
pub(crate) fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Maps a ratio in `[0.0, 1.0]` onto a percentage rounded to two decimals.
pub(crate) fn ratio_to_percent(ratio: f64) -> f64 {
    round_hundredths(ratio * 100.0)
}

pub(crate) fn find_common_prefix<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: Iterator,
    Iter2: Iterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    s1.zip(s2)
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(77.27, round_hundredths(77.272_727));
        // tie goes away from zero, not to the even neighbour
        assert_eq!(0.13, round_hundredths(0.125));
        assert_eq!(100.0, ratio_to_percent(0.999_999_999_999_999_8));
        assert_eq!(75.59, ratio_to_percent(0.755_928_946));
    }

    #[test]
    fn common_prefix() {
        assert_eq!(5, find_common_prefix("1730 7th".chars(), "1730 8th".chars()));
        assert_eq!(0, find_common_prefix("".chars(), "abc".chars()));
        assert_eq!(3, find_common_prefix("abc".bytes(), "abc".bytes()));
    }
}
