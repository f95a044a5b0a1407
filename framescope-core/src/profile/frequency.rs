use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: u64,
}

/// Tallies occurrences of non-missing values for categorical columns.
pub struct FrequencyCounter {
    map: HashMap<String, u64>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, val: String) {
        *self.map.entry(val).or_insert(0) += 1;
    }

    /// Distinct non-missing value count seen so far.
    pub fn distinct(&self) -> u64 {
        self.map.len() as u64
    }

    /// Counts sorted by descending frequency (value ascending as tie-break),
    /// optionally truncated to the `limit` most frequent.
    pub fn finish(self, limit: Option<usize>) -> Vec<ValueCount> {
        let mut entries: Vec<(String, u64)> = self.map.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let take = limit.unwrap_or(entries.len());
        entries
            .into_iter()
            .take(take)
            .map(|(value, count)| ValueCount { value, count })
            .collect()
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}
