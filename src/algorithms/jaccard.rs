//! Jaccard and weighted Jaccard distances over n-gram sets
//!
//! The plain Jaccard index compares the distinct n-grams of two strings:
//! `|A ∩ B| / |A ∪ B|`. The weighted form uses occurrence counts instead,
//! taking the smaller count of each shared gram for the intersection and the
//! sum of both weighted sizes for the union. With that union a string compared
//! with itself has a weighted index of 0.5, not 1.
//!
//! Two empty n-gram sets are identical: index 1, distance 0.

use super::ngram::{self, NGramConfig, NGramSet};
use super::Metric;
use crate::cache::Cache;
use crate::error::ConfigError;
use std::sync::Arc;
use tracing::debug;

/// Canonical name of the Jaccard algorithm
pub const NAME_JACCARD: &str = "Jaccard";
/// Canonical name of the weighted Jaccard algorithm
pub const NAME_WEIGHTED_JACCARD: &str = "weighted Jaccard";

/// Jaccard distance calculator
#[derive(Debug, Clone)]
pub struct Jaccard {
    config: NGramConfig,
    cache: Cache<Arc<NGramSet>>,
}

impl Jaccard {
    /// Create a Jaccard calculator, validating the n-gram configuration.
    pub fn new(config: NGramConfig, cache_size: usize) -> Result<Self, ConfigError> {
        config.check()?;
        debug!(config = %config, cache_size, "jaccard_algo_created");
        Ok(Self {
            config,
            cache: Cache::new(cache_size),
        })
    }

    /// Like [`Jaccard::new`] but panics on an invalid configuration.
    #[must_use]
    pub fn new_or_panic(config: NGramConfig, cache_size: usize) -> Self {
        match Self::new(config, cache_size) {
            Ok(algo) => algo,
            Err(err) => panic!("cannot construct the {NAME_JACCARD} algorithm: {err}"),
        }
    }

    #[must_use]
    pub fn config(&self) -> &NGramConfig {
        &self.config
    }

    fn ngram_set(&mut self, s: &str) -> Arc<NGramSet> {
        if let Some(ngs) = self.cache.get(s) {
            return Arc::clone(ngs);
        }
        let ngs = Arc::new(self.config.ngrams(s));
        self.cache.set(s, Arc::clone(&ngs));
        ngs
    }

    fn ngram_set_cached_only(&self, s: &str) -> Arc<NGramSet> {
        match self.cache.peek(s) {
            Some(ngs) => Arc::clone(ngs),
            None => Arc::new(self.config.ngrams(s)),
        }
    }
}

impl Metric for Jaccard {
    fn distance(&mut self, a: &str, b: &str) -> f64 {
        let ngs_a = self.ngram_set(a);
        let ngs_b = self.ngram_set(b);
        1.0 - jaccard_index(&ngs_a, &ngs_b)
    }

    fn distance_cached_only(&self, a: &str, b: &str) -> f64 {
        let ngs_a = self.ngram_set_cached_only(a);
        let ngs_b = self.ngram_set_cached_only(b);
        1.0 - jaccard_index(&ngs_a, &ngs_b)
    }

    fn name(&self) -> &'static str {
        NAME_JACCARD
    }

    fn describe(&self) -> String {
        format!("{} {}", self.cache, self.config.describe("N-Gram:"))
    }
}

/// Weighted Jaccard distance calculator
///
/// Shares its configuration and cache layout with [`Jaccard`].
#[derive(Debug, Clone)]
pub struct WeightedJaccard {
    inner: Jaccard,
}

impl WeightedJaccard {
    /// Create a weighted Jaccard calculator, validating the n-gram configuration.
    pub fn new(config: NGramConfig, cache_size: usize) -> Result<Self, ConfigError> {
        let inner = Jaccard::new(config, cache_size)?;
        Ok(Self { inner })
    }

    /// Like [`WeightedJaccard::new`] but panics on an invalid configuration.
    #[must_use]
    pub fn new_or_panic(config: NGramConfig, cache_size: usize) -> Self {
        match Self::new(config, cache_size) {
            Ok(algo) => algo,
            Err(err) => panic!("cannot construct the {NAME_WEIGHTED_JACCARD} algorithm: {err}"),
        }
    }

    #[must_use]
    pub fn config(&self) -> &NGramConfig {
        self.inner.config()
    }
}

impl Metric for WeightedJaccard {
    fn distance(&mut self, a: &str, b: &str) -> f64 {
        let ngs_a = self.inner.ngram_set(a);
        let ngs_b = self.inner.ngram_set(b);
        1.0 - weighted_jaccard_index(&ngs_a, &ngs_b)
    }

    fn distance_cached_only(&self, a: &str, b: &str) -> f64 {
        let ngs_a = self.inner.ngram_set_cached_only(a);
        let ngs_b = self.inner.ngram_set_cached_only(b);
        1.0 - weighted_jaccard_index(&ngs_a, &ngs_b)
    }

    fn name(&self) -> &'static str {
        NAME_WEIGHTED_JACCARD
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

/// Jaccard index of the distinct n-grams of two sets.
#[must_use]
pub fn jaccard_index(a: &NGramSet, b: &NGramSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    ngram::len_intersection(a, b) as f64 / ngram::len_union(a, b) as f64
}

/// Jaccard index using occurrence counts as weights.
#[must_use]
pub fn weighted_jaccard_index(a: &NGramSet, b: &NGramSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    ngram::weighted_len_intersection(a, b) as f64 / ngram::weighted_len_union(a, b) as f64
}

/// One-shot Jaccard distance using n-grams of exactly length `n`.
pub fn jaccard_distance(a: &str, b: &str, n: usize) -> Result<f64, ConfigError> {
    let ngs_a = ngram::ngrams(a, n)?;
    let ngs_b = ngram::ngrams(b, n)?;
    Ok(1.0 - jaccard_index(&ngs_a, &ngs_b))
}

/// One-shot weighted Jaccard distance using n-grams of exactly length `n`.
pub fn weighted_jaccard_distance(a: &str, b: &str, n: usize) -> Result<f64, ConfigError> {
    let ngs_a = ngram::ngrams(a, n)?;
    let ngs_b = ngram::ngrams(b, n)?;
    Ok(1.0 - weighted_jaccard_index(&ngs_a, &ngs_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.00001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_indices() {
        let abc = ngram::ngrams("abc", 2).unwrap();
        let abcd = ngram::ngrams("abcd", 2).unwrap();
        assert!(approx_eq(jaccard_index(&abc, &abcd), 2.0 / 3.0));
        assert!(approx_eq(weighted_jaccard_index(&abc, &abcd), 0.4));

        let empty = NGramSet::new();
        assert_eq!(jaccard_index(&empty, &empty), 1.0);
        assert_eq!(weighted_jaccard_index(&empty, &empty), 1.0);
    }

    #[test]
    fn test_distance_fns() {
        assert!(approx_eq(jaccard_distance("abc", "abcd", 2).unwrap(), 1.0 / 3.0));
        assert!(approx_eq(weighted_jaccard_distance("abc", "abcd", 2).unwrap(), 0.6));
        assert_eq!(jaccard_distance("", "", 2).unwrap(), 0.0);
        assert!(jaccard_distance("abc", "abcd", 0).is_err());
        assert!(weighted_jaccard_distance("abc", "abcd", 0).is_err());
    }

    #[test]
    fn test_jaccard_algo() {
        let mut algo = Jaccard::new(NGramConfig::simple(2).unwrap(), 3).unwrap();
        assert_eq!(algo.distance("hello", "hello"), 0.0);
        assert_eq!(algo.distance("", ""), 0.0);
        assert_eq!(algo.distance("abab", "cdcd"), 1.0);
        assert!(approx_eq(algo.distance("abc", "abcd"), 1.0 / 3.0));
        assert_eq!(algo.name(), "Jaccard");
    }

    #[test]
    fn test_weighted_jaccard_algo() {
        let mut algo = WeightedJaccard::new(NGramConfig::simple(2).unwrap(), 3).unwrap();
        assert_eq!(algo.distance("", ""), 0.0);
        assert!(approx_eq(algo.distance("abc", "abcd"), 0.6));
        // the union adds both weighted sizes
        assert!(approx_eq(algo.distance("abc", "abc"), 0.5));
        assert_eq!(algo.name(), "weighted Jaccard");
    }

    #[test]
    fn test_cached_only_matches() {
        let mut algo = Jaccard::new(NGramConfig::default(), 2).unwrap();
        let d = algo.distance("target", "targets");
        assert_eq!(algo.distance_cached_only("target", "targets"), d);
    }

    #[test]
    fn test_bad_config_is_rejected() {
        let config = NGramConfig {
            length: 0,
            ..NGramConfig::default()
        };
        assert_eq!(
            WeightedJaccard::new(config, 3).unwrap_err(),
            ConfigError::NGramLength { length: 0 }
        );
    }
}
