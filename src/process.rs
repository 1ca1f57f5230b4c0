//! Matching one query against a list of choices.
//!
//! The query is normalized once through a [`BatchComparator`] and every
//! choice is classified with the profile given in [`Args`].

use serde::Serialize;
use tracing::debug;

use crate::classify::{Classification, MatchProfile, MatchTier};
use crate::score::BatchComparator;

#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Args {
    profile: MatchProfile,
    min_tier: MatchTier,
    limit: Option<usize>,
}

impl Default for Args {
    fn default() -> Args {
        Args {
            profile: MatchProfile::standard(),
            min_tier: MatchTier::NoSignificantMatch,
            limit: None,
        }
    }
}

impl Args {
    /// Profile used to classify the choices.
    pub fn profile(mut self, profile: MatchProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Drops every choice classified below `min_tier`.
    pub fn min_tier(mut self, min_tier: MatchTier) -> Self {
        self.min_tier = min_tier;
        self
    }

    /// Returns at most `limit` candidates.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A classified choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate<'a> {
    pub choice: &'a str,
    /// Position of the choice in the input slice.
    pub index: usize,
    pub classification: Classification,
}

fn classify_choice<'a>(
    scorer: &BatchComparator,
    args: &Args,
    index: usize,
    choice: &'a str,
) -> Option<Candidate<'a>> {
    let classification = args.profile.classify_scores(scorer.scores(choice));
    (classification.tier >= args.min_tier).then_some(Candidate {
        choice,
        index,
        classification,
    })
}

/// Classifies every choice against `query`.
///
/// Candidates are sorted by weighted score, best first. Choices with equal
/// scores keep their input order.
///
/// # Example
/// ```
/// use matchscore::process::{extract, Args};
/// use matchscore::MatchTier;
///
/// let choices = [
///     "1730 7th St NW, Washington",
///     "42 Elm Road, Springfield",
///     "1730 7th st nw washington",
/// ];
/// let args = Args::default().min_tier(MatchTier::PartialMatch);
/// let matches = extract("1730 7th st nw washington", &choices, &args);
/// assert_eq!(2, matches.len());
/// assert_eq!(2, matches[0].index);
/// assert_eq!(MatchTier::FullMatch, matches[0].classification.tier);
/// ```
pub fn extract<'a, S>(query: &str, choices: &'a [S], args: &Args) -> Vec<Candidate<'a>>
where
    S: AsRef<str>,
{
    let scorer = BatchComparator::new(query);
    let mut result: Vec<Candidate<'a>> = choices
        .iter()
        .enumerate()
        .filter_map(|(index, choice)| classify_choice(&scorer, args, index, choice.as_ref()))
        .collect();

    result.sort_by(|a, b| {
        b.classification
            .weighted_score
            .total_cmp(&a.classification.weighted_score)
    });
    if let Some(limit) = args.limit {
        result.truncate(limit);
    }

    debug!(
        choices = choices.len(),
        matches = result.len(),
        min_tier = %args.min_tier,
        "extracted candidates"
    );
    result
}

/// Best matching choice, or `None` if no choice reaches the minimum tier.
///
/// The first of several equally scored choices wins.
pub fn extract_one<'a, S>(query: &str, choices: &'a [S], args: &Args) -> Option<Candidate<'a>>
where
    S: AsRef<str>,
{
    let scorer = BatchComparator::new(query);
    let mut best: Option<Candidate<'a>> = None;

    for (index, choice) in choices.iter().enumerate() {
        let Some(candidate) = classify_choice(&scorer, args, index, choice.as_ref()) else {
            continue;
        };
        let better = best.map_or(true, |current| {
            candidate.classification.weighted_score > current.classification.weighted_score
        });
        if better {
            best = Some(candidate);
        }
    }

    debug!(
        choices = choices.len(),
        found = best.is_some(),
        "extracted best candidate"
    );
    best
}
