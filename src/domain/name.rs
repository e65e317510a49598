//! Localized display names
//!
//! A tag's name maps locale codes (`en`, `it`, ...) to display strings.
//! Entries are kept ordered by locale so serialization is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale code to display string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedValue(BTreeMap<String, String>);

impl LocalizedValue {
    /// Creates an empty value
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a value with a single entry
    pub fn single(locale: impl Into<String>, value: impl Into<String>) -> Self {
        let mut name = Self::new();
        name.insert(locale, value);
        name
    }

    /// Sets the string for a locale, returning the previous one
    pub fn insert(&mut self, locale: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(locale.into(), value.into())
    }

    /// Removes a locale
    pub fn remove(&mut self, locale: &str) -> Option<String> {
        self.0.remove(locale)
    }

    /// Returns the string for an exact locale
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of locales
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over locale codes in order
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(locale, value)` pairs in locale order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Picks a display string
    ///
    /// Lookup order: `preferred`, then `fallback`, then the first locale.
    pub fn display(&self, preferred: &str, fallback: &str) -> Option<&str> {
        self.get(preferred)
            .or_else(|| self.get(fallback))
            .or_else(|| self.0.values().next().map(String::as_str))
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedValue
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LocalizedValue
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
