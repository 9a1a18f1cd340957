//! Preconfigured Finders keyed by algorithm name
//!
//! Every algorithm is registered twice: under its canonical name and under
//! a `"case-blind "` variant that maps strings to lower case first. All
//! registered Finders use [`DEFAULT_MIN_STR_LENGTH`], the default n-gram
//! configuration and [`DEFAULT_CACHE_SIZE`].
//!
//! The prototypes are built once per process. [`default_finder`] hands out
//! clones, so each caller gets its own cache.

use ahash::AHashMap;
use std::sync::LazyLock;

use crate::algorithms::{
    Algo, Cosine, Hamming, Jaccard, Levenshtein, NGramConfig, ScaledLevenshtein, WeightedJaccard,
    NAME_COSINE, NAME_HAMMING, NAME_JACCARD, NAME_LEVENSHTEIN, NAME_SCALED_LEVENSHTEIN,
    NAME_WEIGHTED_JACCARD,
};
use crate::cache::DEFAULT_CACHE_SIZE;
use crate::finder::{Finder, FinderConfig, DEFAULT_MIN_STR_LENGTH};

/// Prefix of the registry names that fold case before comparing
pub const CASE_BLIND_PREFIX: &str = "case-blind ";

pub const LEVENSHTEIN: &str = NAME_LEVENSHTEIN;
pub const SCALED_LEVENSHTEIN: &str = NAME_SCALED_LEVENSHTEIN;
pub const COSINE: &str = NAME_COSINE;
pub const HAMMING: &str = NAME_HAMMING;
pub const JACCARD: &str = NAME_JACCARD;
pub const WEIGHTED_JACCARD: &str = NAME_WEIGHTED_JACCARD;

pub const CASE_BLIND_LEVENSHTEIN: &str = "case-blind Levenshtein";
pub const CASE_BLIND_SCALED_LEVENSHTEIN: &str = "case-blind scaled Levenshtein";
pub const CASE_BLIND_COSINE: &str = "case-blind cosine";
pub const CASE_BLIND_HAMMING: &str = "case-blind Hamming";
pub const CASE_BLIND_JACCARD: &str = "case-blind Jaccard";
pub const CASE_BLIND_WEIGHTED_JACCARD: &str = "case-blind weighted Jaccard";

// Suggested thresholds per algorithm
pub const DEFAULT_THRESHOLD_LEVENSHTEIN: f64 = 5.0;
pub const DEFAULT_THRESHOLD_SCALED_LEVENSHTEIN: f64 = 0.33;
pub const DEFAULT_THRESHOLD_COSINE: f64 = 0.4;
pub const DEFAULT_THRESHOLD_HAMMING: f64 = 5.0;
pub const DEFAULT_THRESHOLD_JACCARD: f64 = 0.5;
pub const DEFAULT_THRESHOLD_WEIGHTED_JACCARD: f64 = 0.7;

type AlgoBuilder = fn() -> Algo;

const ALGORITHMS: [(&str, &str, f64, AlgoBuilder); 6] = [
    (
        LEVENSHTEIN,
        CASE_BLIND_LEVENSHTEIN,
        DEFAULT_THRESHOLD_LEVENSHTEIN,
        levenshtein,
    ),
    (
        SCALED_LEVENSHTEIN,
        CASE_BLIND_SCALED_LEVENSHTEIN,
        DEFAULT_THRESHOLD_SCALED_LEVENSHTEIN,
        scaled_levenshtein,
    ),
    (COSINE, CASE_BLIND_COSINE, DEFAULT_THRESHOLD_COSINE, cosine),
    (HAMMING, CASE_BLIND_HAMMING, DEFAULT_THRESHOLD_HAMMING, hamming),
    (JACCARD, CASE_BLIND_JACCARD, DEFAULT_THRESHOLD_JACCARD, jaccard),
    (
        WEIGHTED_JACCARD,
        CASE_BLIND_WEIGHTED_JACCARD,
        DEFAULT_THRESHOLD_WEIGHTED_JACCARD,
        weighted_jaccard,
    ),
];

fn levenshtein() -> Algo {
    Levenshtein::new().into()
}

fn scaled_levenshtein() -> Algo {
    ScaledLevenshtein::new().into()
}

fn hamming() -> Algo {
    Hamming::new().into()
}

fn cosine() -> Algo {
    Cosine::new_or_panic(NGramConfig::default(), DEFAULT_CACHE_SIZE).into()
}

fn jaccard() -> Algo {
    Jaccard::new_or_panic(NGramConfig::default(), DEFAULT_CACHE_SIZE).into()
}

fn weighted_jaccard() -> Algo {
    WeightedJaccard::new_or_panic(NGramConfig::default(), DEFAULT_CACHE_SIZE).into()
}

static DEFAULT_FINDERS: LazyLock<AHashMap<&'static str, Finder>> = LazyLock::new(|| {
    let mut finders = AHashMap::with_capacity(ALGORITHMS.len() * 2);
    for (name, case_blind_name, threshold, build) in ALGORITHMS {
        let config = FinderConfig {
            threshold,
            min_str_length: DEFAULT_MIN_STR_LENGTH,
            ..FinderConfig::default()
        };
        finders.insert(name, Finder::new_or_panic(config.clone(), build()));
        finders.insert(
            case_blind_name,
            Finder::new_or_panic(config.with_lower_case(true), build()),
        );
    }
    finders
});

/// A fresh copy of the Finder registered under `name`.
#[must_use]
pub fn default_finder(name: &str) -> Option<Finder> {
    DEFAULT_FINDERS.get(name).cloned()
}

/// The suggested threshold for `name`, with or without the case-blind prefix.
#[must_use]
pub fn default_threshold(name: &str) -> Option<f64> {
    let name = name.strip_prefix(CASE_BLIND_PREFIX).unwrap_or(name);
    ALGORITHMS
        .iter()
        .find(|(algo, ..)| *algo == name)
        .map(|&(_, _, threshold, _)| threshold)
}

/// Every registered name, sorted.
#[must_use]
pub fn algorithm_names() -> Vec<&'static str> {
    let mut names: Vec<_> = DEFAULT_FINDERS.keys().copied().collect();
    names.sort_unstable();
    names
}
