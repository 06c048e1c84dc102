//! Keyed frequency tables with stable ranking.
//!
//! Every aggregate statistic in replayed is a [`FrequencyTable`]: a mapping
//! from a grouping key to a play count. The table remembers the order in
//! which keys were first inserted so that ranking is deterministic: when two
//! keys have the same count, the one encountered first in the history ranks
//! first, and repeated runs over the same input render identical reports.

use std::collections::HashMap;
use std::hash::Hash;

/// A key → count table that preserves first-insertion order of keys.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<K: Eq + Hash + Clone> {
    counts: HashMap<K, u64>,
    // Keys in the order they were first inserted; the stable tie-break.
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Increment the count for `key`, inserting it at count 1 if new.
    pub fn increment(&mut self, key: K) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.order.push(key);
            }
        }
    }

    /// Count for `key`, 0 if never seen.
    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of events that contributed.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// All entries sorted by count descending.
    ///
    /// The sort is stable over first-insertion order, so equal counts keep
    /// the order in which the keys first appeared in the history.
    pub fn ranked(&self) -> Vec<(K, u64)> {
        let mut entries: Vec<(K, u64)> = self
            .order
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect();
        entries.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
        entries
    }

    /// The top `n` entries of [`ranked`](Self::ranked); all of them if the
    /// table has fewer than `n` distinct keys.
    pub fn top_n(&self, n: usize) -> Vec<(K, u64)> {
        let mut entries = self.ranked();
        entries.truncate(n);
        entries
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}
