//! Memo table for dictionary lookups that complete later
//!
//! A word is marked [`Lookup::Pending`] while a lookup is in flight and
//! [`Lookup::Resolved`] once its answer arrives, so each word is looked up
//! at most once.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Pending,
    Resolved(T),
}

impl<T> Lookup<T> {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn resolved(&self) -> Option<&T> {
        match self {
            Self::Pending => None,
            Self::Resolved(value) => Some(value),
        }
    }
}

/// Lookup cache keyed by lowercase word text
///
/// # Examples
/// ```
/// use wordle_constraints::wordlists::{Lookup, LookupCache};
///
/// let mut cache = LookupCache::new();
/// assert!(cache.begin("crane"));
/// assert!(!cache.begin("CRANE"));
/// assert!(cache.is_pending("crane"));
///
/// cache.resolve("crane", true);
/// assert_eq!(cache.get("crane"), Some(&Lookup::Resolved(true)));
/// ```
#[derive(Debug, Clone)]
pub struct LookupCache<T> {
    entries: FxHashMap<String, Lookup<T>>,
}

impl<T> Default for LookupCache<T> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<T> LookupCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `word` as being looked up
    ///
    /// Returns `false` when the word is already pending or resolved, in
    /// which case the caller should not start another lookup.
    pub fn begin(&mut self, word: &str) -> bool {
        let key = word.to_ascii_lowercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, Lookup::Pending);
        true
    }

    /// Store the result for `word`, returning the previous entry
    pub fn resolve(&mut self, word: &str, value: T) -> Option<Lookup<T>> {
        self.entries
            .insert(word.to_ascii_lowercase(), Lookup::Resolved(value))
    }

    /// Drop the entry for `word`, e.g. after a failed lookup
    pub fn forget(&mut self, word: &str) -> Option<Lookup<T>> {
        self.entries.remove(&word.to_ascii_lowercase())
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Lookup<T>> {
        self.entries.get(&word.to_ascii_lowercase())
    }

    #[must_use]
    pub fn is_pending(&self, word: &str) -> bool {
        self.get(word).is_some_and(Lookup::is_pending)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
