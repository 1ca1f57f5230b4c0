//! String metrics combined by the classifier.
//!
//! Every metric works on arbitrary element sequences (`chars()`, `bytes()` or
//! tokens) and offers a `score` function that lowercases two strings and
//! reports the result as a percentage rounded to two decimals.

pub mod cosine;
pub mod jaro;
pub mod jaro_winkler;
pub mod levenshtein;
pub mod ngram;
