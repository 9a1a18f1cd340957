//! N-gram decomposition
//!
//! Turns a string into a weighted set of its substrings. The set maps each
//! n-gram to the number of times it occurs in the source, which lets the
//! cosine and weighted Jaccard metrics treat a string as a frequency vector.
//!
//! # Edge handling
//!
//! [`NGramConfig`] controls which lengths are produced at each position and
//! whether n-grams may run off either end of the source. Overflowing grams are
//! padded with an explicit filler (`pad_char`, NUL by default) so that edge
//! grams carry distinct content, e.g. `"\0ab"` for a gram that starts one
//! place before `"ab..."`.
//!
//! # Complexity
//! - Time: O(n * k) where k is the number of lengths per position
//! - Space: O(distinct n-grams)

use crate::error::ConfigError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Default filler for grams that run off the source string
pub const DEFAULT_PAD_CHAR: char = '\0';

fn default_pad_char() -> char {
    DEFAULT_PAD_CHAR
}

/// Configuration for building an [`NGramSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramConfig {
    /// Target length of an n-gram
    pub length: usize,
    /// Minimum length of an n-gram. When non-zero, grams of every length in
    /// `min_length..=length` are generated; zero means `length` only.
    #[serde(default)]
    pub min_length: usize,
    /// Whether grams may start before and finish after the source string
    #[serde(default)]
    pub overflow: bool,
    /// Filler for the positions outside the source string
    #[serde(default = "default_pad_char")]
    pub pad_char: char,
}

impl Default for NGramConfig {
    fn default() -> Self {
        Self {
            length: 3,
            min_length: 2,
            overflow: true,
            pad_char: DEFAULT_PAD_CHAR,
        }
    }
}

impl NGramConfig {
    /// Create a validated configuration.
    pub fn new(length: usize, min_length: usize, overflow: bool) -> Result<Self, ConfigError> {
        let config = Self {
            length,
            min_length,
            overflow,
            pad_char: DEFAULT_PAD_CHAR,
        };
        config.check()?;
        Ok(config)
    }

    /// Configuration producing only grams of exactly `length`, no overflow.
    pub fn simple(length: usize) -> Result<Self, ConfigError> {
        Self::new(length, 0, false)
    }

    #[must_use]
    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// Returns an error if the configuration has invalid entries.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::NGramLength {
                length: self.length,
            });
        }
        if self.min_length > self.length {
            return Err(ConfigError::NGramMinLength {
                min_length: self.min_length,
                length: self.length,
            });
        }
        Ok(())
    }

    /// Short description used in algorithm descriptions.
    #[must_use]
    pub fn describe(&self, prefix: &str) -> String {
        format!(
            "{} Min: {:2} Len: {:2} O'flow: {:>5}",
            prefix, self.min_length, self.length, self.overflow
        )
    }

    #[inline]
    fn effective_min_length(&self) -> usize {
        if self.min_length == 0 {
            self.length
        } else {
            self.min_length
        }
    }

    /// Build the n-gram set for `s`.
    #[must_use]
    pub fn ngrams(&self, s: &str) -> NGramSet {
        let mut set = NGramSet::new();
        if self.length == 0 {
            return set;
        }

        let chars: SmallVec<[char; 64]> = s.chars().collect();
        let Some(last) = chars.len().checked_sub(1) else {
            return set;
        };
        let min_length = self.effective_min_length();
        let mut tail: SmallVec<[String; 4]> = SmallVec::new();

        for end in 0..chars.len() {
            for len in min_length..=self.length {
                let gram: String = if len <= end + 1 {
                    chars[end + 1 - len..=end].iter().collect()
                } else if self.overflow {
                    std::iter::repeat(self.pad_char)
                        .take(len - (end + 1))
                        .chain(chars[..=end].iter().copied())
                        .collect()
                } else {
                    // longer grams would start even earlier
                    break;
                };

                if end == last && self.overflow && len < self.length {
                    tail.push(gram.clone());
                }
                set.add(gram);
            }
        }

        for mut gram in tail {
            let len = gram.chars().count();
            for _ in len..self.length {
                gram.push(self.pad_char);
                set.add(gram.clone());
            }
        }

        set
    }
}

impl fmt::Display for NGramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MinLength: {:2}, Length: {:2}, Overflow: {:<5}",
            self.min_length, self.length, self.overflow
        )
    }
}

/// Build the n-grams of exactly length `n` from `s`, without overflow.
///
/// Fails if `n` is zero.
pub fn ngrams(s: &str, n: usize) -> Result<NGramSet, ConfigError> {
    if n == 0 {
        return Err(ConfigError::NGramSize { n });
    }
    Ok(NGramConfig::simple(n)?.ngrams(s))
}

/// Weighted set of n-grams. Each gram maps to its number of occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGramSet {
    counts: AHashMap<String, usize>,
}

impl NGramSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `gram`.
    pub fn add(&mut self, gram: impl Into<String>) {
        *self.counts.entry(gram.into()).or_insert(0) += 1;
    }

    /// Occurrence count of `gram`, zero when absent.
    #[must_use]
    pub fn get(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, gram: &str) -> bool {
        self.counts.contains_key(gram)
    }

    /// Number of distinct n-grams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Sum of all occurrence counts.
    #[must_use]
    pub fn weighted_len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.counts
            .values()
            .map(|&v| {
                let v = v as f64;
                v * v
            })
            .sum()
    }

    /// Euclidean length (magnitude) of the count vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for NGramSet {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut set = NGramSet::new();
        for (gram, count) in iter {
            *set.counts.entry(gram.into()).or_insert(0) += count;
        }
        set
    }
}

/// Orders a pair so that the smaller set is iterated.
#[inline]
fn smaller_first<'a>(a: &'a NGramSet, b: &'a NGramSet) -> (&'a NGramSet, &'a NGramSet) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Dot product of the two count vectors.
#[must_use]
pub fn dot(a: &NGramSet, b: &NGramSet) -> u64 {
    let (small, large) = smaller_first(a, b);
    small
        .iter()
        .map(|(k, v)| (v as u64) * (large.get(k) as u64))
        .sum()
}

/// Union of the two sets, counts added together.
#[must_use]
pub fn union(a: &NGramSet, b: &NGramSet) -> NGramSet {
    a.iter().chain(b.iter()).collect()
}

/// Number of distinct grams in the union, without building it.
#[must_use]
pub fn len_union(a: &NGramSet, b: &NGramSet) -> usize {
    a.len() + b.len() - len_intersection(a, b)
}

/// Weighted size of the union: the sum of both weighted lengths.
#[must_use]
pub fn weighted_len_union(a: &NGramSet, b: &NGramSet) -> usize {
    a.weighted_len() + b.weighted_len()
}

/// Intersection of the two sets, taking the smaller count for each gram.
#[must_use]
pub fn intersection(a: &NGramSet, b: &NGramSet) -> NGramSet {
    let (small, large) = smaller_first(a, b);
    small
        .iter()
        .filter(|(k, _)| large.contains(k))
        .map(|(k, v)| (k, v.min(large.get(k))))
        .collect()
}

/// Number of distinct grams in the intersection, without building it.
#[must_use]
pub fn len_intersection(a: &NGramSet, b: &NGramSet) -> usize {
    let (small, large) = smaller_first(a, b);
    small.iter().filter(|(k, _)| large.contains(k)).count()
}

/// Weighted size of the intersection: the sum of the smaller counts.
#[must_use]
pub fn weighted_len_intersection(a: &NGramSet, b: &NGramSet) -> usize {
    let (small, large) = smaller_first(a, b);
    small.iter().map(|(k, v)| v.min(large.get(k))).sum()
}

/// Overlap (Szymkiewicz-Simpson) coefficient of the two sets.
///
/// Returns 1.0 when the smaller set is empty.
#[must_use]
pub fn overlap_coefficient(a: &NGramSet, b: &NGramSet) -> f64 {
    let min_len = a.len().min(b.len());
    if min_len == 0 {
        return 1.0;
    }
    len_intersection(a, b) as f64 / min_len as f64
}

/// Overlap coefficient using occurrence counts as weights.
#[must_use]
pub fn weighted_overlap_coefficient(a: &NGramSet, b: &NGramSet) -> f64 {
    let min_len = a.weighted_len().min(b.weighted_len());
    if min_len == 0 {
        return 1.0;
    }
    weighted_len_intersection(a, b) as f64 / min_len as f64
}
