#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use matchscore::distance::cosine;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let score = cosine::score(&texts.s1, &texts.s2);
    assert_eq!(score, cosine::score(&texts.s2, &texts.s1));
    assert!((0.0..=100.0).contains(&score));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
