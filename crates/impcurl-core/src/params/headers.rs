//! Header store that preserves case and first-insertion order.

use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Request headers passed to curl as `-H 'Name: Value'`.
///
/// Keys are case-sensitive. Re-setting a key replaces its value but keeps the
/// position it was first inserted at, so a derived preset can override a
/// header without reordering the block.
///
/// Values are wrapped in single quotes and must not contain one themselves;
/// this is not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    m: HashMap<String, String>,
    keys: Vec<String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a header, keeping the original position on replace.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.m.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.m.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.m.get(key).map(String::as_str)
    }

    /// Apply every header of `other` in its insertion order.
    pub fn extend(&mut self, other: &Headers) {
        for (k, v) in other.iter() {
            self.set(k, v);
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .map(move |k| (k.as_str(), self.m[k].as_str()))
    }

    /// Serialize into curl arguments (`-H`, `'key: value'` pairs).
    ///
    /// With `shuffle` the pairs come out in random order so user-supplied
    /// headers do not form a stable ordering signature.
    pub fn generate(&self, shuffle: bool) -> Vec<String> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        if shuffle {
            entries.shuffle(&mut rand::thread_rng());
        }
        let mut result = Vec::with_capacity(entries.len() * 2);
        for (k, v) in entries {
            result.push("-H".to_string());
            result.push(format!("'{}: {}'", k, v));
        }
        result
    }
}
