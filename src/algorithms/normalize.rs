//! String normalization applied before comparison
//!
//! A [`Normalizer`] optionally folds to lower case and then removes every
//! code point from a configured strip set. Folding uses Unicode
//! `to_lowercase`, with no locale-specific rules.

use ahash::AHashSet;
use std::borrow::Cow;

/// Normalizes target and population strings the same way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    lowercase: bool,
    strip: AHashSet<char>,
}

impl Normalizer {
    /// Create a normalizer. `strip_runes` lists the code points to remove.
    #[must_use]
    pub fn new(lowercase: bool, strip_runes: &str) -> Self {
        Self {
            lowercase,
            strip: strip_runes.chars().collect(),
        }
    }

    /// True when normalizing never changes a string
    #[must_use]
    pub fn is_identity(&self) -> bool {
        !self.lowercase && self.strip.is_empty()
    }

    /// Normalize `s`, borrowing it unchanged when there is nothing to do.
    #[must_use]
    pub fn normalize<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.is_identity() {
            return Cow::Borrowed(s);
        }

        let folded = if self.lowercase {
            Cow::Owned(s.to_lowercase())
        } else {
            Cow::Borrowed(s)
        };

        if self.strip.is_empty() {
            return folded;
        }
        Cow::Owned(folded.chars().filter(|c| !self.strip.contains(c)).collect())
    }
}
