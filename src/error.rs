//! Error types for match profile configuration.
//!
//! Scoring and classification never fail. Only building or loading a
//! [`MatchProfile`](crate::MatchProfile) and parsing metric keys can be
//! rejected.

use thiserror::Error;

use crate::classify::MatchTier;
use crate::score::Metric;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Reasons a profile or metric key is rejected.
#[derive(Error, Debug)]
pub enum MatchError {
    /// A metric weight is negative, infinite or NaN
    #[error("weight for {metric} must be finite and non-negative, got {value}")]
    InvalidWeight { metric: Metric, value: f64 },

    /// Weights do not add up to one
    #[error("metric weights must sum to 1.0, got {0}")]
    WeightSum(f64),

    /// A tier threshold lies outside the percentage scale
    #[error("threshold for {tier} must lie within [0, 100], got {value}")]
    ThresholdOutOfRange { tier: MatchTier, value: f64 },

    /// A better tier does not require a strictly higher score
    #[error("threshold for {higher} ({higher_value}) must exceed threshold for {lower} ({lower_value})")]
    ThresholdOrder {
        higher: MatchTier,
        higher_value: f64,
        lower: MatchTier,
        lower_value: f64,
    },

    /// Not one of the four metric keys
    #[error("unknown metric `{0}`")]
    UnknownMetric(String),

    /// No built-in profile with this name
    #[error("unknown match profile `{0}`")]
    UnknownProfile(String),

    /// Profile JSON could not be parsed
    #[error("invalid profile configuration: {0}")]
    Config(#[from] serde_json::Error),
}
