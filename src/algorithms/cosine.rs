//! Cosine distance implementation
//!
//! Treats each string as the frequency vector of its n-grams and measures
//! one minus the cosine of the angle between the two vectors.
//!
//! # Complexity
//! - Time: O(m+n) for building the n-gram sets (amortized by the cache)
//!   plus O(min set size) for the dot product
//! - Space: O(unique n-grams) per cached string

use super::ngram::{self, NGramConfig, NGramSet};
use super::Metric;
use crate::cache::Cache;
use crate::error::ConfigError;
use std::sync::Arc;
use tracing::debug;

/// Canonical name of the cosine algorithm
pub const NAME_COSINE: &str = "cosine";

/// An n-gram set together with its squared magnitude
#[derive(Debug, Clone, PartialEq)]
struct Profile {
    ngrams: NGramSet,
    length_squared: f64,
}

impl Profile {
    fn new(ngrams: NGramSet) -> Self {
        let length_squared = ngrams.length_squared();
        Self {
            ngrams,
            length_squared,
        }
    }
}

/// Cosine distance calculator over n-gram frequency vectors
///
/// Memoizes the n-gram set and magnitude of recently seen strings. The cache
/// makes `distance` take `&mut self`; see [`Metric`] for sharing across threads.
#[derive(Debug, Clone)]
pub struct Cosine {
    config: NGramConfig,
    cache: Cache<Arc<Profile>>,
}

impl Cosine {
    /// Create a cosine calculator, validating the n-gram configuration.
    pub fn new(config: NGramConfig, cache_size: usize) -> Result<Self, ConfigError> {
        config.check()?;
        debug!(config = %config, cache_size, "cosine_algo_created");
        Ok(Self {
            config,
            cache: Cache::new(cache_size),
        })
    }

    /// Like [`Cosine::new`] but panics on an invalid configuration.
    ///
    /// Only for configurations known to be valid, e.g. static defaults.
    #[must_use]
    pub fn new_or_panic(config: NGramConfig, cache_size: usize) -> Self {
        match Self::new(config, cache_size) {
            Ok(algo) => algo,
            Err(err) => panic!("cannot construct the {NAME_COSINE} algorithm: {err}"),
        }
    }

    #[must_use]
    pub fn config(&self) -> &NGramConfig {
        &self.config
    }

    fn profile(&mut self, s: &str) -> Arc<Profile> {
        if let Some(profile) = self.cache.get(s) {
            return Arc::clone(profile);
        }
        let profile = Arc::new(Profile::new(self.config.ngrams(s)));
        self.cache.set(s, Arc::clone(&profile));
        profile
    }

    fn profile_cached_only(&self, s: &str) -> Arc<Profile> {
        match self.cache.peek(s) {
            Some(profile) => Arc::clone(profile),
            None => Arc::new(Profile::new(self.config.ngrams(s))),
        }
    }
}

impl Metric for Cosine {
    fn distance(&mut self, a: &str, b: &str) -> f64 {
        let pa = self.profile(a);
        let pb = self.profile(b);
        profile_distance(&pa, &pb)
    }

    fn distance_cached_only(&self, a: &str, b: &str) -> f64 {
        profile_distance(&self.profile_cached_only(a), &self.profile_cached_only(b))
    }

    fn name(&self) -> &'static str {
        NAME_COSINE
    }

    fn describe(&self) -> String {
        format!("{} {}", self.cache, self.config.describe("N-Gram:"))
    }
}

fn profile_distance(a: &Profile, b: &Profile) -> f64 {
    1.0 - similarity_from_parts(&a.ngrams, a.length_squared, &b.ngrams, b.length_squared)
}

/// Both empty are identical, one empty or no shared grams are unrelated.
fn similarity_from_parts(a: &NGramSet, len2_a: f64, b: &NGramSet, len2_b: f64) -> f64 {
    if len2_a == 0.0 && len2_b == 0.0 {
        return 1.0;
    }
    if len2_a == 0.0 || len2_b == 0.0 {
        return 0.0;
    }

    let dot = ngram::dot(a, b);
    if dot == 0 {
        return 0.0;
    }

    dot as f64 / (len2_a * len2_b).sqrt()
}

/// Cosine similarity of two n-gram sets.
///
/// Two empty sets have a similarity of 1 (identical); if exactly one is empty,
/// or they share no n-grams, the similarity is 0.
#[must_use]
pub fn cosine_similarity(a: &NGramSet, b: &NGramSet) -> f64 {
    similarity_from_parts(a, a.length_squared(), b, b.length_squared())
}

/// One-shot cosine distance using n-grams of exactly length `n`.
pub fn cosine_distance(a: &str, b: &str, n: usize) -> Result<f64, ConfigError> {
    let ngs_a = ngram::ngrams(a, n)?;
    let ngs_b = ngram::ngrams(b, n)?;
    Ok(1.0 - cosine_similarity(&ngs_a, &ngs_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn bigram_cosine() -> Cosine {
        Cosine::new(NGramConfig::simple(2).unwrap(), 3).unwrap()
    }

    #[test]
    fn test_edge_cases() {
        let mut algo = bigram_cosine();
        assert_eq!(algo.distance("", ""), 0.0);
        assert_eq!(algo.distance("", "abab"), 1.0);
        assert_eq!(algo.distance("abab", ""), 1.0);
        assert_eq!(algo.distance("abab", "cdcd"), 1.0);
    }

    #[test]
    fn test_identical_strings() {
        let mut algo = bigram_cosine();
        assert_eq!(algo.distance("abab", "abab"), 0.0);
        assert_eq!(algo.distance("hello", "hello"), 0.0);
    }

    #[test]
    fn test_known_value() {
        // hello: he el ll lo, hell: he el ll -> 3 / (2 * sqrt(3))
        let mut algo = bigram_cosine();
        let expected = 1.0 - 3.0 / (2.0 * 3f64.sqrt());
        assert!(approx_eq(algo.distance("hello", "hell"), expected));
    }

    #[test]
    fn test_cache_reuse_matches_fresh() {
        let mut algo = bigram_cosine();
        let first = algo.distance("hello", "yellow");
        let second = algo.distance("hello", "yellow");
        assert_eq!(first, second);
        assert_eq!(algo.distance_cached_only("hello", "yellow"), first);
        assert_eq!(algo.distance_cached_only("unseen", "strings"), {
            let mut fresh = bigram_cosine();
            fresh.distance("unseen", "strings")
        });
    }

    #[test]
    fn test_cosine_similarity_sets() {
        let abab = ngram::ngrams("abab", 2).unwrap();
        assert!(approx_eq(cosine_similarity(&abab, &abab), 1.0));
        assert_eq!(cosine_similarity(&NGramSet::new(), &NGramSet::new()), 1.0);
        assert_eq!(cosine_similarity(&NGramSet::new(), &abab), 0.0);
    }

    #[test]
    fn test_cosine_distance_fn() {
        assert!(approx_eq(cosine_distance("abab", "abab", 2).unwrap(), 0.0));
        assert_eq!(cosine_distance("abab", "cdcd", 2).unwrap(), 1.0);
        assert!(cosine_distance("abab", "cdcd", 0).is_err());
    }

    #[test]
    fn test_bad_config_is_rejected() {
        let config = NGramConfig {
            length: 2,
            min_length: 3,
            ..NGramConfig::default()
        };
        assert!(Cosine::new(config, 3).is_err());
    }

    #[test]
    fn test_describe() {
        let algo = Cosine::new(NGramConfig::default(), 3).unwrap();
        assert_eq!(
            algo.describe(),
            "cache sz:   3 N-Gram: Min:  2 Len:  3 O'flow:  true"
        );
        assert_eq!(algo.name(), "cosine");
    }
}
