//! Insertion-ordered mapping from grouping key to value.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Grouping key → numeric summary, in order of first appearance.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    entries: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the total for `key`, creating the key at the end if new.
    pub fn add(&mut self, key: &str, value: f64) {
        match self.positions.get(key) {
            Some(&position) => self.entries[position].1 += value,
            None => {
                self.positions.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.positions.get(key).map(|&position| self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// A copy with keys in ascending lexicographic order.
    ///
    /// For "YYYY-MM" month keys this is also chronological order.
    pub fn sorted_by_key(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().collect()
    }
}

impl FromIterator<(String, f64)> for Aggregation {
    /// Collects pairs, summing values of repeated keys.
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut aggregation = Aggregation::new();
        for (key, value) in iter {
            aggregation.add(&key, value);
        }
        aggregation
    }
}

impl Serialize for Aggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
