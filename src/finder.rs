//! Finder: filter and rank a population of strings against a target
//!
//! A [`Finder`] owns a validated [`FinderConfig`] and one [`Algo`]. Each
//! lookup normalizes the target and every population entry the same way,
//! drops strings shorter than the configured minimum, keeps entries whose
//! distance is within the threshold and ranks them deterministically:
//!
//! 1. ascending distance
//! 2. ascending squared difference between the entry's length and the
//!    target's length (both unnormalized, in code points)
//! 3. lexical order of the original entry
//!
//! Results carry the original, unnormalized text of each entry.
//!
//! # Example
//!
//! ```rust
//! use strdist::{Finder, FinderConfig, Levenshtein};
//!
//! let config = FinderConfig::new(2.0, 4).unwrap();
//! let mut finder = Finder::new(config, Levenshtein::new()).unwrap();
//!
//! let found = finder.find_str_like("hell", &["HELLO", "hellos", "hel", "world"]);
//! assert_eq!(found, vec!["hellos"]);
//! ```

use crate::algorithms::normalize::Normalizer;
use crate::algorithms::{Algo, Metric};
use crate::error::ConfigError;
use crate::PARALLEL_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Default minimum length of strings to be compared
pub const DEFAULT_MIN_STR_LENGTH: usize = 3;

fn default_min_str_length() -> usize {
    DEFAULT_MIN_STR_LENGTH
}

/// Configuration constraining a [`Finder`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// A string matches when its distance is `<=` the threshold
    pub threshold: f64,
    /// Strings shorter than this (after normalization) are never compared.
    /// Very short targets tend to match many unrelated alternatives.
    #[serde(default = "default_min_str_length")]
    pub min_str_length: usize,
    /// Map strings to lower case before calculating the distance
    #[serde(default)]
    pub map_to_lower_case: bool,
    /// Code points removed from strings before calculating the distance
    #[serde(default)]
    pub strip_runes: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            min_str_length: DEFAULT_MIN_STR_LENGTH,
            map_to_lower_case: false,
            strip_runes: String::new(),
        }
    }
}

impl FinderConfig {
    /// Create a validated configuration with no case folding or stripping.
    pub fn new(threshold: f64, min_str_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            threshold,
            min_str_length,
            ..Self::default()
        };
        config.check()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_lower_case(mut self, map_to_lower_case: bool) -> Self {
        self.map_to_lower_case = map_to_lower_case;
        self
    }

    #[must_use]
    pub fn with_strip_runes(mut self, strip_runes: impl Into<String>) -> Self {
        self.strip_runes = strip_runes.into();
        self
    }

    /// Returns an error if the threshold is negative or NaN.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(self.threshold >= 0.0) {
            return Err(ConfigError::Threshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

impl fmt::Display for FinderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Threshold: {:7.4}, MinStrLength: {:2}, MapToLowerCase: {:<5}, StripRunes: {:<9}",
            self.threshold,
            self.min_str_length,
            self.map_to_lower_case,
            format!("{:?}", self.strip_runes)
        )
    }
}

/// A population entry and its distance from the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrDist {
    pub value: String,
    pub distance: f64,
}

impl StrDist {
    #[must_use]
    pub fn new(value: impl Into<String>, distance: f64) -> Self {
        Self {
            value: value.into(),
            distance,
        }
    }
}

impl fmt::Display for StrDist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Str: {:?}, Dist: {:.5}", self.value, self.distance)
    }
}

/// Finds the strings in a population that are similar to a target
#[derive(Debug, Clone)]
pub struct Finder {
    config: FinderConfig,
    normalizer: Normalizer,
    algo: Algo,
}

impl Finder {
    /// Create a Finder after validating `config`.
    pub fn new(config: FinderConfig, algo: impl Into<Algo>) -> Result<Self, ConfigError> {
        config.check()?;
        let algo = algo.into();
        debug!(algo = algo.name(), config = %config, "finder_created");
        Ok(Self {
            normalizer: Normalizer::new(config.map_to_lower_case, &config.strip_runes),
            config,
            algo,
        })
    }

    /// Like [`Finder::new`] but panics on an invalid configuration.
    ///
    /// Only for configurations known to be valid, e.g. static defaults.
    #[must_use]
    pub fn new_or_panic(config: FinderConfig, algo: impl Into<Algo>) -> Self {
        match Self::new(config, algo) {
            Ok(finder) => finder,
            Err(err) => panic!("cannot construct the Finder: {err}"),
        }
    }

    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    #[must_use]
    pub fn algo(&self) -> &Algo {
        &self.algo
    }

    /// Description of the algorithm and configuration in use
    #[must_use]
    pub fn describe(&self) -> String {
        let algo_desc = self.algo.describe();
        if algo_desc.is_empty() {
            format!("{}: {}", self.algo.name(), self.config)
        } else {
            format!("{}: {} {}", self.algo.name(), self.config, algo_desc)
        }
    }

    /// Entries of `population` within the threshold of `target`, ranked.
    ///
    /// Never fails: an empty population, or a target shorter than the
    /// minimum length, gives an empty result. Updates the algorithm's cache.
    pub fn find_like<S: AsRef<str>>(&mut self, target: &str, population: &[S]) -> Vec<StrDist> {
        let norm_target = self.normalizer.normalize(target);
        if population.is_empty() || norm_target.chars().count() < self.config.min_str_length {
            return Vec::new();
        }

        let mut dists = Vec::with_capacity(population.len());
        for entry in population {
            let entry = entry.as_ref();
            let norm_entry = self.normalizer.normalize(entry);
            if norm_entry.chars().count() < self.config.min_str_length {
                continue;
            }

            let distance = self.algo.distance(&norm_target, &norm_entry);
            if distance > self.config.threshold {
                continue;
            }
            dists.push(StrDist::new(entry, distance));
        }

        rank(&mut dists, target);
        trace!(
            algo = self.algo.name(),
            target_len = target.len(),
            population = population.len(),
            matches = dists.len(),
            "find_like"
        );
        dists
    }

    /// Same contract as [`Finder::find_like`] without updating the cache.
    ///
    /// Large populations are scanned in parallel. Strings missing from the
    /// cache are decomposed afresh on every call.
    pub fn par_find_like<S>(&self, target: &str, population: &[S]) -> Vec<StrDist>
    where
        S: AsRef<str> + Sync,
    {
        let norm_target = self.normalizer.normalize(target);
        if population.is_empty() || norm_target.chars().count() < self.config.min_str_length {
            return Vec::new();
        }

        let score = |entry: &S| -> Option<StrDist> {
            let entry = entry.as_ref();
            let norm_entry = self.normalizer.normalize(entry);
            if norm_entry.chars().count() < self.config.min_str_length {
                return None;
            }
            let distance = self.algo.distance_cached_only(&norm_target, &norm_entry);
            (distance <= self.config.threshold).then(|| StrDist::new(entry, distance))
        };

        let mut dists: Vec<StrDist> = if population.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            population.par_iter().filter_map(score).collect()
        } else {
            population.iter().filter_map(score).collect()
        };

        rank(&mut dists, target);
        dists
    }

    /// The first `n` results of [`Finder::find_like`].
    pub fn find_n_like<S: AsRef<str>>(&mut self, n: usize, target: &str, population: &[S]) -> Vec<StrDist> {
        let mut dists = self.find_like(target, population);
        dists.truncate(n);
        dists
    }

    /// The strings of [`Finder::find_like`] without their distances.
    pub fn find_str_like<S: AsRef<str>>(&mut self, target: &str, population: &[S]) -> Vec<String> {
        into_strings(self.find_like(target, population))
    }

    /// The first `n` strings of [`Finder::find_like`].
    pub fn find_n_str_like<S: AsRef<str>>(&mut self, n: usize, target: &str, population: &[S]) -> Vec<String> {
        into_strings(self.find_n_like(n, target, population))
    }
}

fn into_strings(dists: Vec<StrDist>) -> Vec<String> {
    dists.into_iter().map(|sd| sd.value).collect()
}

/// Sort results by distance, then closeness in length to the target, then
/// lexically.
pub(crate) fn rank(dists: &mut [StrDist], target: &str) {
    let target_len = target.chars().count();
    let length_penalty = |s: &str| -> u128 {
        let diff = s.chars().count().abs_diff(target_len) as u128;
        diff * diff
    };

    dists.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| length_penalty(&a.value).cmp(&length_penalty(&b.value)))
            .then_with(|| a.value.cmp(&b.value))
    });
}
