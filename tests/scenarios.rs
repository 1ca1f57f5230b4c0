use matchscore::distance::{cosine, jaro_winkler, levenshtein, ngram};
use matchscore::{
    classify_match, compute_similarity_scores, MatchProfile, MatchTier, Metric, ScoreSet,
    Thresholds, Weights,
};

macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {
        if ($x - $y).abs() > $d {
            panic!("{} != {} (delta {})", $x, $y, $d);
        }
    };
}

const UNIT: &str = "1730 7th St NW Apt 411, Washington, DC 20001";

#[test]
fn address_without_unit() {
    let a = "1730 7th st nw washington dc 20001";
    let scores = compute_similarity_scores(a, UNIT);
    assert_eq!(ScoreSet::new(77.27, 90.75, 75.59, 75.61), scores);

    let classification = MatchProfile::standard().classify(a, UNIT);
    assert_delta!(81.91, classification.weighted_score, 0.000_1);
    assert_eq!(MatchTier::StrongPartialMatch, classification.tier);
    assert_eq!(MatchTier::StrongPartialMatch, classify_match(a, UNIT));

    let legacy = MatchProfile::legacy().classify(a, UNIT);
    assert_delta!(85.358, legacy.weighted_score, 0.000_1);
    assert_eq!(MatchTier::StrongPartialMatch, legacy.tier);
}

#[test]
fn unit_without_street() {
    let a = "Apt 411 Washington DC 20001";
    let classification = MatchProfile::standard().classify(a, UNIT);
    assert_eq!(ScoreSet::new(61.36, 71.07, 44.72, 54.76), classification.scores);
    assert_delta!(59.764, classification.weighted_score, 0.000_1);
    assert_eq!(MatchTier::PartialMatch, classification.tier);

    let legacy = MatchProfile::legacy().classify(a, UNIT);
    assert_delta!(67.186, legacy.weighted_score, 0.000_1);
    assert_eq!(MatchTier::PartialMatch, legacy.tier);
}

#[test]
fn identical_addresses() {
    let scores = compute_similarity_scores(UNIT, UNIT);
    assert!(scores.iter().all(|(_, score)| score == 100.0));
    assert_eq!(MatchTier::FullMatch, classify_match(UNIT, UNIT));
}

#[test]
fn case_is_ignored() {
    let lower = UNIT.to_lowercase();
    let upper = UNIT.to_uppercase();
    assert_eq!(MatchTier::FullMatch, classify_match(&lower, &upper));
    assert_eq!(
        compute_similarity_scores("Apt 411 Washington DC 20001", UNIT),
        compute_similarity_scores("APT 411 WASHINGTON DC 20001", &lower)
    );
}

#[test]
fn unrelated_addresses() {
    let scores = compute_similarity_scores("99 Ocean Drive Miami FL", UNIT);
    assert_eq!(0.0, scores.get(Metric::Cosine));
    assert_eq!(
        MatchTier::NoSignificantMatch,
        classify_match("99 Ocean Drive Miami FL", UNIT)
    );
}

#[test]
fn empty_inputs() {
    let scores = compute_similarity_scores("", "");
    assert_eq!(100.0, scores.get(Metric::Levenshtein));
    assert_eq!(100.0, scores.get(Metric::JaroWinkler));
    assert_eq!(0.0, scores.get(Metric::Cosine));
    assert_eq!(0.0, scores.get(Metric::NGram));
    assert_eq!(MatchTier::PartialMatch, classify_match("", ""));

    let scores = compute_similarity_scores("", UNIT);
    assert!(scores.iter().all(|(_, score)| score == 0.0));
    assert_eq!(MatchTier::NoSignificantMatch, classify_match(UNIT, ""));
}

#[test]
fn whitespace_only_inputs() {
    assert_eq!(0.0, cosine::score("   ", "\t"));
    assert_eq!(0.0, cosine::score("dc", " "));
    assert_eq!(100.0, ngram::score("  ", "  "));
}

#[test]
fn single_characters() {
    assert_eq!(0.0, ngram::score("a", "a"));
    assert_eq!(100.0, levenshtein::score("a", "A"));
    assert_eq!(100.0, jaro_winkler::score("a", "a"));
    assert_eq!(0.0, jaro_winkler::score("a", "b"));
}

#[test]
fn well_known_pairs() {
    assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
    assert_eq!(57.14, levenshtein::score("kitten", "sitting"));
    assert_eq!(22.22, ngram::score("kitten", "sitting"));
    assert_eq!(96.11, jaro_winkler::score("martha", "marhta"));
    assert_eq!(84.0, jaro_winkler::score("dwayne", "duane"));
    assert_eq!(76.0, jaro_winkler::score("night", "nacht"));
    assert_eq!(14.29, ngram::score("night", "nacht"));
    assert_eq!(62.5, jaro_winkler::score("Иванко", "Петрунко"));
}

#[test]
fn strict_profile() {
    let profile = MatchProfile::by_name("strict").unwrap();
    assert_eq!(MatchProfile::strict(), profile);

    let classification = profile.classify("Apt 411 Washington DC 20001", UNIT);
    assert_delta!(61.9135, classification.weighted_score, 0.000_1);
    assert_eq!(MatchTier::PartialMatch, classification.tier);

    let classification = profile.classify("1730 7th st nw washington dc 20001", UNIT);
    assert_eq!(MatchTier::StrongPartialMatch, classification.tier);
}

#[test]
fn custom_profile() {
    let profile = MatchProfile::new(
        Weights {
            levenshtein: 0.5,
            jaro_winkler: 0.5,
            cosine: 0.0,
            n_gram: 0.0,
        },
        Thresholds {
            full_match: 90.0,
            strong_partial_match: 70.0,
            partial_match: 50.0,
            weak_partial_match: 30.0,
        },
    )
    .unwrap();
    let classification = profile.classify("Apt 411 Washington DC 20001", UNIT);
    assert_delta!(66.215, classification.weighted_score, 0.000_1);
    assert_eq!(MatchTier::PartialMatch, classification.tier);
}

#[test]
fn classification_serializes() {
    let classification = MatchProfile::standard().classify(UNIT, UNIT);
    let json = serde_json::to_value(classification).unwrap();
    assert_eq!(100.0, json["scores"]["jaroWinkler"]);
    assert_eq!(100.0, json["weightedScore"]);
    assert!(json["tier"].is_string());
}
