#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use matchscore::distance::{jaro, jaro_winkler};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let sim = jaro::similarity(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&sim));

    let boosted = jaro_winkler::similarity(texts.s1.chars(), texts.s2.chars(), None);
    assert!(boosted >= sim);

    let score = jaro_winkler::score(&texts.s1, &texts.s2);
    assert_eq!(score, jaro_winkler::score(&texts.s2, &texts.s1));
    assert!((0.0..=100.0).contains(&score));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
