//! Thread-safe wrapper for a [`Finder`].
//!
//! Distance algorithms memoize per-string work, so a plain `Finder` needs
//! `&mut self` for lookups. [`SharedFinder`] puts one behind a
//! `parking_lot::RwLock` so clones of it can be handed to other threads.
//!
//! # Usage
//!
//! ```rust
//! use strdist::registry::{self, COSINE};
//! use strdist::SharedFinder;
//!
//! let finder = SharedFinder::new(registry::default_finder(COSINE).unwrap());
//!
//! let worker = finder.clone();
//! let handle = std::thread::spawn(move || worker.find_str_like("hello", &["hellos", "world"]));
//! assert_eq!(handle.join().unwrap(), vec!["hellos"]);
//! ```
//!
//! # Locking
//!
//! - `find_*` lookups warm the cache and acquire an exclusive write lock
//! - `par_find_like` only reads the cache and acquires a shared read lock

use parking_lot::RwLock;
use std::sync::Arc;

use crate::finder::{Finder, FinderConfig, StrDist};

/// A [`Finder`] that can be shared between threads.
#[derive(Debug, Clone)]
pub struct SharedFinder {
    inner: Arc<RwLock<Finder>>,
}

impl SharedFinder {
    pub fn new(finder: Finder) -> Self {
        Self {
            inner: Arc::new(RwLock::new(finder)),
        }
    }

    /// Copy of the wrapped Finder's configuration.
    pub fn config(&self) -> FinderConfig {
        self.inner.read().config().clone()
    }

    /// See [`Finder::find_like`]. Acquires an exclusive write lock.
    pub fn find_like<S: AsRef<str>>(&self, target: &str, population: &[S]) -> Vec<StrDist> {
        self.inner.write().find_like(target, population)
    }

    /// See [`Finder::find_n_like`]. Acquires an exclusive write lock.
    pub fn find_n_like<S: AsRef<str>>(&self, n: usize, target: &str, population: &[S]) -> Vec<StrDist> {
        self.inner.write().find_n_like(n, target, population)
    }

    /// See [`Finder::find_str_like`]. Acquires an exclusive write lock.
    pub fn find_str_like<S: AsRef<str>>(&self, target: &str, population: &[S]) -> Vec<String> {
        self.inner.write().find_str_like(target, population)
    }

    /// See [`Finder::find_n_str_like`]. Acquires an exclusive write lock.
    pub fn find_n_str_like<S: AsRef<str>>(&self, n: usize, target: &str, population: &[S]) -> Vec<String> {
        self.inner.write().find_n_str_like(n, target, population)
    }

    /// See [`Finder::par_find_like`]. Acquires a shared read lock.
    pub fn par_find_like<S>(&self, target: &str, population: &[S]) -> Vec<StrDist>
    where
        S: AsRef<str> + Sync,
    {
        self.inner.read().par_find_like(target, population)
    }

    /// Take back the wrapped Finder if this is the only handle.
    pub fn try_unwrap(self) -> Result<Finder, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<Finder> for SharedFinder {
    fn from(finder: Finder) -> Self {
        Self::new(finder)
    }
}
