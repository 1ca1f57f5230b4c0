#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use matchscore::distance::ngram;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
    pub n: u8,
}

fn fuzz(texts: Texts) {
    let n = usize::from(texts.n % 8);
    let sim = ngram::similarity(texts.s1.chars(), texts.s2.chars(), n);
    assert!((0.0..=1.0).contains(&sim));

    let score = ngram::score(&texts.s1, &texts.s2);
    assert_eq!(score, ngram::score(&texts.s2, &texts.s1));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
