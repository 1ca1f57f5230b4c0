//! `matchscore` measures how similar two free-text strings are (street
//! addresses, names, short descriptions) and buckets the result into a
//! qualitative match tier.
//!
//! ## Key Features
//!
//! - **Four independent metrics**: the Levenshtein edit distance, the
//!   prefix-weighted Jaro-Winkler similarity, a bag-of-words cosine
//!   similarity and a character n-gram Jaccard overlap. Each lives in its own
//!   module under [`distance`].
//! - **Weighted classification**: the four scores are combined into a single
//!   weighted score and mapped onto one of five [`MatchTier`]s by a
//!   [`MatchProfile`].
//! - **Batch extraction**: one query can be compared against many candidates
//!   through the [`process`] module without renormalizing the query each time.
//!
//! ## Usage
//!
//! ```rust
//! use matchscore::{classify_match, compute_similarity_scores, MatchTier, Metric};
//!
//! let scores = compute_similarity_scores("Main St 12", "main st 12");
//! assert_eq!(scores.get(Metric::Levenshtein), 100.0);
//!
//! assert_eq!(classify_match("ABC", "abc"), MatchTier::FullMatch);
//! assert_eq!(
//!     classify_match(
//!         "1730 7th st nw washington dc 20001",
//!         "1730 7th St NW Apt 411, Washington, DC 20001"
//!     ),
//!     MatchTier::StrongPartialMatch
//! );
//! ```
//!
//! The individual metrics operate on any sequence of comparable elements:
//!
//! ```rust
//! use matchscore::distance::levenshtein;
//!
//! assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
//! assert_eq!(3, levenshtein::distance("kitten".bytes(), "sitting".bytes()));
//! ```

#![forbid(unsafe_code)]
#![allow(
    // lengths and counts are converted to f64 for the ratios
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
)]

pub mod classify;
pub(crate) mod details;
pub mod distance;
pub mod error;
pub mod process;
pub mod score;

pub use classify::{classify_match, Classification, MatchProfile, MatchTier, Thresholds, Weights};
pub use error::{MatchError, Result};
pub use score::{compute_similarity_scores, BatchComparator, Metric, ScoreSet};
