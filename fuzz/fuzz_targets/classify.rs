#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use matchscore::process::{extract, Args};
use matchscore::{BatchComparator, MatchProfile};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub query: String,
    pub choices: Vec<String>,
}

fn fuzz(texts: Texts) {
    let profile = MatchProfile::standard();
    let scorer = BatchComparator::new(&texts.query);
    for choice in &texts.choices {
        let classification = profile.classify(&texts.query, choice);
        assert_eq!(scorer.scores(choice), classification.scores);
        assert!((0.0..=100.0).contains(&classification.weighted_score));
    }

    let candidates = extract(&texts.query, &texts.choices, &Args::default());
    assert_eq!(texts.choices.len(), candidates.len());
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
