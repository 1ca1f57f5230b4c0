#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use matchscore::distance::levenshtein;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = levenshtein::distance(texts.s1.chars(), texts.s2.chars());
    assert_eq!(dist, levenshtein::distance(texts.s2.chars(), texts.s1.chars()));
    assert!(dist <= texts.s1.chars().count().max(texts.s2.chars().count()));

    let score = levenshtein::score(&texts.s1, &texts.s2);
    assert!((0.0..=100.0).contains(&score));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
