//! Hamming distance implementation
//!
//! Counts positions where code points differ. Strings of unequal length are
//! compared over the shorter one and the length difference is added to the
//! mismatch count, so `hamming("abc", "ab") == 1`.
//!
//! # Complexity
//! - Time: O(n) where n is the longer string length
//! - Space: O(1)

use super::Metric;

/// Canonical name of the Hamming algorithm
pub const NAME_HAMMING: &str = "Hamming";

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Metric for Hamming {
    fn distance(&mut self, a: &str, b: &str) -> f64 {
        hamming(a, b) as f64
    }

    fn distance_cached_only(&self, a: &str, b: &str) -> f64 {
        hamming(a, b) as f64
    }

    fn name(&self) -> &'static str {
        NAME_HAMMING
    }

    fn describe(&self) -> String {
        String::new()
    }
}

/// Hamming distance extended to unequal lengths.
#[must_use]
pub fn hamming(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    let mismatches = a
        .chars()
        .zip(b.chars())
        .filter(|(ac, bc)| ac != bc)
        .count();

    mismatches + a_len.abs_diff(b_len)
}
