//! Configuration errors
//!
//! Every fallible constructor in the crate returns [`ConfigError`]. Errors are
//! only ever raised while building an algorithm or a Finder; computing a
//! distance or ranking a population never fails.

use thiserror::Error;

/// Errors that can occur while validating a configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The target n-gram length must be at least one
    #[error("the N-Gram Length ({length}) must be > 0")]
    NGramLength { length: usize },

    /// The minimum n-gram length may not exceed the target length
    #[error("the N-Gram MinLength ({min_length}) must be <= the Length ({length})")]
    NGramMinLength { min_length: usize, length: usize },

    /// The simple n-gram form was asked for zero-length n-grams
    #[error("invalid length of the n-gram: {n}")]
    NGramSize { n: usize },

    /// The Finder threshold is negative or not a number
    #[error("FinderConfig: the Threshold ({threshold}) must be >= 0")]
    Threshold { threshold: f64 },
}
