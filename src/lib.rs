//! strdist - string distance and similar-string lookup
//!
//! Finds the entries of a population of strings that look like a target,
//! for spelling suggestions and fuzzy lookups.
//!
//! # Features
//! - Edit distances (Levenshtein, scaled Levenshtein, Hamming)
//! - N-gram distances (cosine, Jaccard, weighted Jaccard) with memoized
//!   n-gram sets
//! - A [`Finder`] that normalizes, filters and ranks candidates
//! - Preconfigured Finders in [`registry`] and "did you mean" helpers in
//!   [`suggest`]
//! - Parallel lookups over large populations
//!
//! # Example
//!
//! ```rust
//! use strdist::{Cosine, Finder, FinderConfig, NGramConfig};
//!
//! let config = FinderConfig::new(0.3, 4).unwrap().with_lower_case(true);
//! let algo = Cosine::new(NGramConfig::simple(2).unwrap(), 3).unwrap();
//! let mut finder = Finder::new(config, algo).unwrap();
//!
//! assert_eq!(finder.find_str_like("hello", &["HELL", "world"]), vec!["HELL"]);
//! ```

pub mod algorithms;
pub mod cache;
pub mod error;
pub mod finder;
pub mod registry;
pub mod suggest;
pub mod sync;

pub use algorithms::{
    cosine_distance, cosine_similarity, hamming, jaccard_distance, jaccard_index, levenshtein,
    scaled_levenshtein, weighted_jaccard_distance, weighted_jaccard_index, Algo, Cosine, Hamming,
    Jaccard, Levenshtein, Metric, NGramConfig, NGramSet, ScaledLevenshtein, WeightedJaccard,
};
pub use cache::Cache;
pub use error::ConfigError;
pub use finder::{Finder, FinderConfig, StrDist, DEFAULT_MIN_STR_LENGTH};
pub use sync::SharedFinder;

/// Minimum population size for parallel lookups.
///
/// Below this, sequential scanning is faster than coordinating the
/// thread pool.
pub const PARALLEL_THRESHOLD: usize = 100;
