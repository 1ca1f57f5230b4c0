//! Weighted classification of a [`ScoreSet`] into a [`MatchTier`].
//!
//! A [`MatchProfile`] holds one weight per metric and the inclusive lower
//! bound of every tier. The weighted sum of the scores is checked against the
//! bounds from the best tier downwards and the first tier reached wins.
//!
//! Three profiles are built in:
//!
//! | Profile    | Levenshtein | Jaro-Winkler | Cosine | N-gram | Thresholds        |
//! |------------|-------------|--------------|--------|--------|-------------------|
//! | `standard` | 0.15        | 0.40         | 0.25   | 0.20   | 95 / 75 / 55 / 40 |
//! | `strict`   | 0.20        | 0.45         | 0.15   | 0.20   | 95 / 75 / 60 / 50 |
//! | `legacy`   | 0.40        | 0.60         | 0      | 0      | 95 / 80 / 60 / 40 |

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MatchError, Result};
use crate::score::{compute_similarity_scores, Metric, ScoreSet};

/// Tolerance when checking that the weights of a profile sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Qualitative match category. A better tier compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    NoSignificantMatch,
    WeakPartialMatch,
    PartialMatch,
    StrongPartialMatch,
    FullMatch,
}

impl MatchTier {
    /// All tiers, best first.
    pub const ALL: [MatchTier; 5] = [
        MatchTier::FullMatch,
        MatchTier::StrongPartialMatch,
        MatchTier::PartialMatch,
        MatchTier::WeakPartialMatch,
        MatchTier::NoSignificantMatch,
    ];

    /// Display label of the tier.
    pub const fn label(self) -> &'static str {
        match self {
            MatchTier::FullMatch => "Full Match",
            MatchTier::StrongPartialMatch => "Strong Partial Match",
            MatchTier::PartialMatch => "Partial Match",
            MatchTier::WeakPartialMatch => "Weak Partial Match",
            MatchTier::NoSignificantMatch => "No Significant Match",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight of every metric in the weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Weights {
    pub levenshtein: f64,
    pub jaro_winkler: f64,
    pub cosine: f64,
    pub n_gram: f64,
}

impl Weights {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Levenshtein => self.levenshtein,
            Metric::JaroWinkler => self.jaro_winkler,
            Metric::Cosine => self.cosine,
            Metric::NGram => self.n_gram,
        }
    }
}

/// Inclusive lower bounds of the weighted score for each tier.
///
/// Anything below `weak_partial_match` is a
/// [`MatchTier::NoSignificantMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Thresholds {
    pub full_match: f64,
    pub strong_partial_match: f64,
    pub partial_match: f64,
    pub weak_partial_match: f64,
}

impl Thresholds {
    /// Lower bound of `tier`, `None` for the catch-all tier.
    pub fn get(&self, tier: MatchTier) -> Option<f64> {
        match tier {
            MatchTier::FullMatch => Some(self.full_match),
            MatchTier::StrongPartialMatch => Some(self.strong_partial_match),
            MatchTier::PartialMatch => Some(self.partial_match),
            MatchTier::WeakPartialMatch => Some(self.weak_partial_match),
            MatchTier::NoSignificantMatch => None,
        }
    }
}

/// Unvalidated profile as it appears in configuration files.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileSpec {
    weights: Weights,
    thresholds: Thresholds,
}

impl TryFrom<ProfileSpec> for MatchProfile {
    type Error = MatchError;

    fn try_from(spec: ProfileSpec) -> Result<Self> {
        MatchProfile::new(spec.weights, spec.thresholds)
    }
}

/// Metric weights and tier thresholds used to classify a string pair.
///
/// Profiles are validated on construction and on deserialization.
///
/// # Example
/// ```
/// use matchscore::{MatchProfile, MatchTier};
///
/// let profile = MatchProfile::from_json(
///     r#"{
///         "weights": {"levenshtein": 0.5, "jaroWinkler": 0.5, "cosine": 0.0, "nGram": 0.0},
///         "thresholds": {"fullMatch": 90, "strongPartialMatch": 70, "partialMatch": 50, "weakPartialMatch": 30}
///     }"#,
/// )?;
/// assert_eq!(MatchTier::FullMatch, profile.tier(90.0));
/// # Ok::<(), matchscore::MatchError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileSpec")]
pub struct MatchProfile {
    weights: Weights,
    thresholds: Thresholds,
}

impl Default for MatchProfile {
    fn default() -> Self {
        MatchProfile::standard()
    }
}

impl MatchProfile {
    /// Names accepted by [`MatchProfile::by_name`].
    pub const NAMES: [&'static str; 3] = ["standard", "strict", "legacy"];

    /// Builds a profile after checking that the weights are non-negative and
    /// sum to one and that the thresholds are strictly descending within
    /// `[0, 100]`.
    pub fn new(weights: Weights, thresholds: Thresholds) -> Result<Self> {
        validate(&weights, &thresholds).map_err(|error| {
            warn!(%error, "rejected match profile");
            error
        })?;
        Ok(MatchProfile {
            weights,
            thresholds,
        })
    }

    /// The four metric profile: 15% Levenshtein, 40% Jaro-Winkler, 25% cosine,
    /// 20% n-gram with thresholds 95 / 75 / 55 / 40.
    pub const fn standard() -> Self {
        MatchProfile {
            weights: Weights {
                levenshtein: 0.15,
                jaro_winkler: 0.40,
                cosine: 0.25,
                n_gram: 0.20,
            },
            thresholds: Thresholds {
                full_match: 95.0,
                strong_partial_match: 75.0,
                partial_match: 55.0,
                weak_partial_match: 40.0,
            },
        }
    }

    /// Leans on the character metrics (20% Levenshtein, 45% Jaro-Winkler,
    /// 15% cosine, 20% n-gram) and raises the two lowest thresholds:
    /// 95 / 75 / 60 / 50.
    pub const fn strict() -> Self {
        MatchProfile {
            weights: Weights {
                levenshtein: 0.20,
                jaro_winkler: 0.45,
                cosine: 0.15,
                n_gram: 0.20,
            },
            thresholds: Thresholds {
                full_match: 95.0,
                strong_partial_match: 75.0,
                partial_match: 60.0,
                weak_partial_match: 50.0,
            },
        }
    }

    /// The two metric profile: 40% Levenshtein, 60% Jaro-Winkler with
    /// thresholds 95 / 80 / 60 / 40.
    pub const fn legacy() -> Self {
        MatchProfile {
            weights: Weights {
                levenshtein: 0.40,
                jaro_winkler: 0.60,
                cosine: 0.0,
                n_gram: 0.0,
            },
            thresholds: Thresholds {
                full_match: 95.0,
                strong_partial_match: 80.0,
                partial_match: 60.0,
                weak_partial_match: 40.0,
            },
        }
    }

    /// Looks up a built-in profile.
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "standard" => Ok(MatchProfile::standard()),
            "strict" => Ok(MatchProfile::strict()),
            "legacy" => Ok(MatchProfile::legacy()),
            _ => Err(MatchError::UnknownProfile(name.to_string())),
        }
    }

    /// Parses and validates a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: ProfileSpec = serde_json::from_str(json)?;
        MatchProfile::try_from(spec)
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Weighted sum of `scores`, within `[0, 100]`.
    pub fn weighted_score(&self, scores: &ScoreSet) -> f64 {
        let weighted: f64 = Metric::ALL
            .into_iter()
            .map(|metric| self.weights.get(metric) * scores.get(metric))
            .sum();
        // weights summing to 1.0 only up to rounding can overshoot by an ulp
        weighted.clamp(0.0, 100.0)
    }

    /// Tier reached by a weighted score.
    ///
    /// # Example
    /// ```
    /// use matchscore::{MatchProfile, MatchTier};
    ///
    /// let profile = MatchProfile::standard();
    /// assert_eq!(MatchTier::FullMatch, profile.tier(95.0));
    /// assert_eq!(MatchTier::StrongPartialMatch, profile.tier(94.99));
    /// ```
    pub fn tier(&self, weighted_score: f64) -> MatchTier {
        MatchTier::ALL
            .into_iter()
            .find(|&tier| {
                self.thresholds
                    .get(tier)
                    .map_or(true, |bound| weighted_score >= bound)
            })
            .unwrap_or(MatchTier::NoSignificantMatch)
    }

    /// Scores and classifies a string pair.
    pub fn classify(&self, a: &str, b: &str) -> Classification {
        self.classify_scores(compute_similarity_scores(a, b))
    }

    /// Classifies an already computed [`ScoreSet`].
    pub fn classify_scores(&self, scores: ScoreSet) -> Classification {
        let weighted_score = self.weighted_score(&scores);
        let tier = self.tier(weighted_score);
        debug!(
            levenshtein = scores.get(Metric::Levenshtein),
            jaro_winkler = scores.get(Metric::JaroWinkler),
            cosine = scores.get(Metric::Cosine),
            n_gram = scores.get(Metric::NGram),
            weighted_score,
            %tier,
            "classified string pair"
        );
        Classification {
            scores,
            weighted_score,
            tier,
        }
    }
}

fn validate(weights: &Weights, thresholds: &Thresholds) -> Result<()> {
    for metric in Metric::ALL {
        let value = weights.get(metric);
        if !value.is_finite() || value < 0.0 {
            return Err(MatchError::InvalidWeight { metric, value });
        }
    }

    let sum: f64 = Metric::ALL.into_iter().map(|metric| weights.get(metric)).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(MatchError::WeightSum(sum));
    }

    let bounds: Vec<(MatchTier, f64)> = MatchTier::ALL
        .into_iter()
        .filter_map(|tier| thresholds.get(tier).map(|bound| (tier, bound)))
        .collect();

    for &(tier, value) in &bounds {
        if !(0.0..=100.0).contains(&value) {
            return Err(MatchError::ThresholdOutOfRange { tier, value });
        }
    }

    for pair in bounds.windows(2) {
        let (higher, higher_value) = pair[0];
        let (lower, lower_value) = pair[1];
        if higher_value <= lower_value {
            return Err(MatchError::ThresholdOrder {
                higher,
                higher_value,
                lower,
                lower_value,
            });
        }
    }

    Ok(())
}

/// Outcome of classifying a string pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub scores: ScoreSet,
    pub weighted_score: f64,
    pub tier: MatchTier,
}

/// Classifies a string pair with the [`standard`](MatchProfile::standard)
/// profile.
///
/// # Example
/// ```
/// use matchscore::{classify_match, MatchTier};
///
/// assert_eq!(MatchTier::FullMatch, classify_match("ABC", "abc"));
/// assert_eq!(
///     MatchTier::PartialMatch,
///     classify_match(
///         "Apt 411 Washington DC 20001",
///         "1730 7th St NW Apt 411, Washington, DC 20001"
///     )
/// );
/// ```
pub fn classify_match(a: &str, b: &str) -> MatchTier {
    MatchProfile::standard().classify(a, b).tier
}
