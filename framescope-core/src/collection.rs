use crate::profile::{ColumnProfile, ColumnSummary};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use framescope_common::{FrameScopeError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Insertion-ordered keyed set of column profiles.
///
/// Profiles are held behind `Arc` so that sub-collections produced by
/// [`fragment`](Self::fragment) share the same instances — statistics are
/// computed once and referenced from every collection that contains the column.
#[derive(Debug, Clone, Default)]
pub struct ProfileCollection {
    entries: Vec<Arc<ColumnProfile>>,
    index: HashMap<String, usize>,
}

impl ProfileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile, overwriting in place (original position kept) when the
    /// key already exists. No validation against any dataset.
    pub fn add(&mut self, profile: Arc<ColumnProfile>) {
        let key = profile.key().to_string();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos] = profile,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(profile);
            }
        }
    }

    /// Graceful lookup; unknown keys yield `None`.
    pub fn get(&self, key: &str) -> Option<&Arc<ColumnProfile>> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Strict lookup; unknown keys fail with a lookup error.
    pub fn column(&self, key: &str) -> Result<&Arc<ColumnProfile>> {
        self.get(key).ok_or_else(|| FrameScopeError::ColumnNotFound {
            key: key.to_string(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, profile)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ColumnProfile>)> {
        self.entries.iter().map(|p| (p.key(), p))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.key())
    }

    /// Sub-collection sharing the same profile instances. Unknown keys are
    /// silently skipped; result order follows `keys`.
    pub fn fragment<S: AsRef<str>>(&self, keys: &[S]) -> ProfileCollection {
        let mut fragment = ProfileCollection::new();
        for key in keys {
            if let Some(profile) = self.get(key.as_ref()) {
                fragment.add(Arc::clone(profile));
            }
        }
        fragment
    }

    /// One summary record per profile, in collection order.
    pub fn summaries(&self) -> Vec<ColumnSummary> {
        self.entries.iter().map(|p| p.summary()).collect()
    }

    /// Flat tabular export: one row per profile, one column per statistic,
    /// `value_counts` carried as a nested JSON mapping.
    pub fn to_table(&self) -> Result<RecordBatch> {
        let summaries = self.summaries();
        let schema = Arc::new(Schema::new(vec![
            Field::new("key", DataType::Utf8, false),
            Field::new("is_numerical", DataType::Boolean, false),
            Field::new("is_categorical", DataType::Boolean, false),
            Field::new("unique", DataType::UInt64, true),
            Field::new("nunique", DataType::UInt64, true),
            Field::new("min", DataType::Float64, true),
            Field::new("max", DataType::Float64, true),
            Field::new("mean", DataType::Float64, true),
            Field::new("median", DataType::Float64, true),
            Field::new("null_count", DataType::UInt64, true),
            Field::new("non_null_count", DataType::UInt64, true),
            Field::new("value_counts", DataType::Utf8, true),
        ]));
        let value_counts_json: Vec<Option<String>> = summaries
            .iter()
            .map(|s| {
                s.value_counts
                    .as_ref()
                    .and_then(|vc| serde_json::to_string(vc).ok())
            })
            .collect();
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(
                summaries.iter().map(|s| s.key.as_str()),
            )),
            Arc::new(BooleanArray::from_iter(
                summaries.iter().map(|s| Some(s.is_numerical)),
            )),
            Arc::new(BooleanArray::from_iter(
                summaries.iter().map(|s| Some(s.is_categorical)),
            )),
            Arc::new(UInt64Array::from_iter(summaries.iter().map(|s| s.unique))),
            Arc::new(UInt64Array::from_iter(summaries.iter().map(|s| s.nunique))),
            Arc::new(Float64Array::from_iter(summaries.iter().map(|s| s.min))),
            Arc::new(Float64Array::from_iter(summaries.iter().map(|s| s.max))),
            Arc::new(Float64Array::from_iter(summaries.iter().map(|s| s.mean))),
            Arc::new(Float64Array::from_iter(summaries.iter().map(|s| s.median))),
            Arc::new(UInt64Array::from_iter(
                summaries.iter().map(|s| s.null_count),
            )),
            Arc::new(UInt64Array::from_iter(
                summaries.iter().map(|s| s.non_null_count),
            )),
            Arc::new(StringArray::from(value_counts_json)),
        ];
        Ok(RecordBatch::try_new(schema, columns)?)
    }
}
