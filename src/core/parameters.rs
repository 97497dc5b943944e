// src/core/parameters.rs

use crate::constants::PARAMETER_PREFIX;
use std::fmt;

/// The keyed parameters of one SAGA tool invocation.
///
/// Behaves as an insertion-ordered `name -> value` map for lookups, while
/// iterating yields the rendered command-line tokens (`-ELEVATION=dem.sgrd`),
/// so a `Parameters` can be spliced straight into a [`Command`](crate::Command).
///
/// Keys keep their original spelling; only the token uppercases them.
/// The set is immutable once built: reconfiguring a tool builds a new one.
///
/// ```
/// use sagacmd::Parameters;
///
/// let params = Parameters::new([("elevation", "dem.sgrd"), ("method", "0")]);
/// assert_eq!(params.get("elevation"), Some("dem.sgrd"));
/// assert_eq!(params.to_string(), "-ELEVATION=dem.sgrd -METHOD=0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
    tokens: Vec<String>,
}

impl Parameters {
    /// Builds the map and its tokens from `(name, value)` pairs. Values are
    /// stored in their `Display` form. A repeated name keeps its first
    /// position and takes the last value.
    pub fn new<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, value) in params {
            let key = key.into();
            let value = value.to_string();
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }

        let tokens = entries
            .iter()
            .map(|(key, value)| render_token(key, value))
            .collect();

        Self { entries, tokens }
    }

    /// The value stored under `key`, matched on its original spelling.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, value)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    /// The rendered command-line tokens, one per entry.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterates the rendered tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }
}

fn render_token(key: &str, value: &str) -> String {
    format!("{}{}={}", PARAMETER_PREFIX, key.to_uppercase(), value)
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// MARK: --- UNIT TESTS ---
