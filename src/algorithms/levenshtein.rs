//! Levenshtein (edit) distance implementation
//!
//! Insert, delete and substitute each cost 1. Strings are compared as
//! sequences of Unicode code points.
//!
//! # Complexity
//! - Time: O(m*n) where m and n are string lengths
//! - Space: O(min(m,n)) using single-row DP

use super::Metric;
use smallvec::SmallVec;

/// Canonical name of the Levenshtein algorithm
pub const NAME_LEVENSHTEIN: &str = "Levenshtein";
/// Canonical name of the scaled Levenshtein algorithm
pub const NAME_SCALED_LEVENSHTEIN: &str = "scaled Levenshtein";

/// Edit distance over code point slices, keeping one DP row sized by the
/// shorter input.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: SmallVec<[usize; 64]> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let substitute = diag + usize::from(lc != sc);
            row[j + 1] = substitute.min(above + 1).min(row[j] + 1);
            diag = above;
        }
    }

    row[short.len()]
}

/// Levenshtein distance between `a` and `b`.
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    edit_distance(&a_chars, &b_chars)
}

/// Levenshtein distance divided by the length of the longer string.
///
/// Two empty strings are identical and have a distance of zero.
#[inline]
#[must_use]
pub fn scaled_levenshtein(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let max_len = a_chars.len().max(b_chars.len());
    if max_len == 0 {
        return 0.0;
    }

    edit_distance(&a_chars, &b_chars) as f64 / max_len as f64
}

/// Levenshtein distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Metric for Levenshtein {
    fn distance(&mut self, a: &str, b: &str) -> f64 {
        levenshtein(a, b) as f64
    }

    fn distance_cached_only(&self, a: &str, b: &str) -> f64 {
        levenshtein(a, b) as f64
    }

    fn name(&self) -> &'static str {
        NAME_LEVENSHTEIN
    }

    fn describe(&self) -> String {
        String::new()
    }
}

/// Scaled Levenshtein calculator, distances fall in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaledLevenshtein;

impl ScaledLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Metric for ScaledLevenshtein {
    fn distance(&mut self, a: &str, b: &str) -> f64 {
        scaled_levenshtein(a, b)
    }

    fn distance_cached_only(&self, a: &str, b: &str) -> f64 {
        scaled_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        NAME_SCALED_LEVENSHTEIN
    }

    fn describe(&self) -> String {
        String::new()
    }
}
