//! String distance algorithms
//!
//! Each algorithm is implemented as standalone functions for composability,
//! plus a [`Metric`] implementation so the Finder can drive any of them.
//! [`Algo`] closes the set of algorithms the Finder accepts.

pub mod cosine;
pub mod hamming;
pub mod jaccard;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;

pub use cosine::*;
pub use hamming::*;
pub use jaccard::*;
pub use levenshtein::*;
pub use ngram::{NGramConfig, NGramSet};

/// Trait for all distance metrics.
///
/// Distances are non-negative and `distance(s, s)` is zero for the edit
/// based metrics. Larger values mean less similar strings.
///
/// `distance` takes `&mut self` because the n-gram based metrics memoize
/// per-string work in an internal cache. A metric is not safe to share
/// between threads without external synchronization; use one instance per
/// thread or wrap it in a lock.
pub trait Metric {
    /// Distance between `a` and `b`, updating any internal cache.
    fn distance(&mut self, a: &str, b: &str) -> f64;

    /// Distance between `a` and `b`, reading but never updating the cache.
    fn distance_cached_only(&self, a: &str, b: &str) -> f64;

    /// Canonical name of the algorithm
    fn name(&self) -> &'static str;

    /// Description of the algorithm configuration, empty when there is none
    fn describe(&self) -> String;
}

/// The distance algorithms a Finder can use
#[derive(Debug, Clone)]
pub enum Algo {
    Levenshtein(Levenshtein),
    ScaledLevenshtein(ScaledLevenshtein),
    Hamming(Hamming),
    Cosine(Cosine),
    Jaccard(Jaccard),
    WeightedJaccard(WeightedJaccard),
}

macro_rules! dispatch {
    ($self:expr, $algo:ident => $body:expr) => {
        match $self {
            Algo::Levenshtein($algo) => $body,
            Algo::ScaledLevenshtein($algo) => $body,
            Algo::Hamming($algo) => $body,
            Algo::Cosine($algo) => $body,
            Algo::Jaccard($algo) => $body,
            Algo::WeightedJaccard($algo) => $body,
        }
    };
}

impl Metric for Algo {
    fn distance(&mut self, a: &str, b: &str) -> f64 {
        dispatch!(self, algo => algo.distance(a, b))
    }

    fn distance_cached_only(&self, a: &str, b: &str) -> f64 {
        dispatch!(self, algo => algo.distance_cached_only(a, b))
    }

    fn name(&self) -> &'static str {
        dispatch!(self, algo => algo.name())
    }

    fn describe(&self) -> String {
        dispatch!(self, algo => algo.describe())
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Algo {
                fn from(algo: $variant) -> Self {
                    Algo::$variant(algo)
                }
            }
        )*
    };
}

impl_from!(
    Levenshtein,
    ScaledLevenshtein,
    Hamming,
    Cosine,
    Jaccard,
    WeightedJaccard
);

#[cfg(test)]
mod tests {
    use super::*;

    fn all_algos() -> Vec<Algo> {
        let config = NGramConfig::default();
        vec![
            Levenshtein::new().into(),
            ScaledLevenshtein::new().into(),
            Hamming::new().into(),
            Cosine::new(config, 3).unwrap().into(),
            Jaccard::new(config, 3).unwrap().into(),
            WeightedJaccard::new(config, 3).unwrap().into(),
        ]
    }

    #[test]
    fn test_names_are_canonical() {
        let names: Vec<_> = all_algos().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "Levenshtein",
                "scaled Levenshtein",
                "Hamming",
                "cosine",
                "Jaccard",
                "weighted Jaccard"
            ]
        );
    }

    #[test]
    fn test_dispatch_reaches_variant() {
        let mut algo: Algo = Levenshtein::new().into();
        assert_eq!(algo.distance("Kitten", "Sitting"), 3.0);

        let mut algo: Algo = Hamming::new().into();
        assert_eq!(algo.distance("abc", "ab"), 1.0);
    }

    #[test]
    fn test_distances_are_non_negative() {
        for mut algo in all_algos() {
            for (a, b) in [("", ""), ("", "abc"), ("hello", "world"), ("hello", "hello")] {
                assert!(algo.distance(a, b) >= 0.0, "{} {a:?} {b:?}", algo.name());
            }
        }
    }

    #[test]
    fn test_describe_only_for_ngram_algos() {
        for algo in all_algos() {
            let ngram_based = matches!(
                algo,
                Algo::Cosine(_) | Algo::Jaccard(_) | Algo::WeightedJaccard(_)
            );
            assert_eq!(!algo.describe().is_empty(), ngram_based);
        }
    }
}
