use crate::dataset::{is_categorical_type, is_numerical_type, numeric_values, scalar_string};
use crate::profile::frequency::{FrequencyCounter, ValueCount};
use crate::profile::numeric::{interpolated_quantile, NumericAccumulator};
use crate::sample::sample_array;
use arrow::array::{Array, ArrayRef};
use arrow::datatypes::DataType;
use framescope_common::{FrameScopeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

pub const DEFAULT_QUANTILES: [f64; 3] = [0.25, 0.5, 0.75];

/// How a column participates in profiling, fixed from its element type at
/// construction. Columns that are neither numerical nor categorical (timestamps,
/// nested types) still get null/distinct counts but no class-specific statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnClass {
    Numerical,
    Categorical,
    Other,
}

impl ColumnClass {
    pub fn of(dt: &DataType) -> Self {
        if is_numerical_type(dt) {
            ColumnClass::Numerical
        } else if is_categorical_type(dt) {
            ColumnClass::Categorical
        } else {
            ColumnClass::Other
        }
    }
}

/// Descriptive statistics for one column of the snapshot.
///
/// Holds a shared view of the column (an `ArrayRef` clone, never a copy of the
/// data) and derived statistics that stay unset until [`compute`](Self::compute)
/// runs. A profile transitions unprocessed → processed exactly once; after that
/// every field is frozen and the instance can be shared between collections.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    key: String,
    column: ArrayRef,
    class: ColumnClass,
    is_processed: bool,
    sample_seed: u64,
    value_counts_limit: Option<usize>,
    unique: Option<u64>,
    // populated only on the numerical path; equals `unique` whenever the
    // column's values survive widening to f64 (64-bit integers beyond 2^53
    // can collapse), and `unique` alone counts NaN as a distinct value
    nunique: Option<u64>,
    min: Option<f64>,
    max: Option<f64>,
    mean: Option<f64>,
    median: Option<f64>,
    null_count: Option<u64>,
    non_null_count: Option<u64>,
    value_counts: Option<Vec<ValueCount>>,
}

impl ColumnProfile {
    pub fn new(key: impl Into<String>, column: ArrayRef) -> Self {
        let class = ColumnClass::of(column.data_type());
        Self {
            key: key.into(),
            column,
            class,
            is_processed: false,
            sample_seed: 0,
            value_counts_limit: None,
            unique: None,
            nunique: None,
            min: None,
            max: None,
            mean: None,
            median: None,
            null_count: None,
            non_null_count: None,
            value_counts: None,
        }
    }

    pub fn with_sample_seed(mut self, seed: u64) -> Self {
        self.sample_seed = seed;
        self
    }

    pub fn with_value_counts_limit(mut self, limit: Option<usize>) -> Self {
        self.value_counts_limit = limit;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shared view into the underlying column data.
    pub fn column(&self) -> &ArrayRef {
        &self.column
    }

    pub fn class(&self) -> ColumnClass {
        self.class
    }

    pub fn is_numerical(&self) -> bool {
        self.class == ColumnClass::Numerical
    }

    pub fn is_categorical(&self) -> bool {
        self.class == ColumnClass::Categorical
    }

    pub fn is_processed(&self) -> bool {
        self.is_processed
    }

    pub fn unique(&self) -> Option<u64> {
        self.unique
    }

    pub fn nunique(&self) -> Option<u64> {
        self.nunique
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    pub fn median(&self) -> Option<f64> {
        self.median
    }

    pub fn null_count(&self) -> Option<u64> {
        self.null_count
    }

    pub fn non_null_count(&self) -> Option<u64> {
        self.non_null_count
    }

    pub fn value_counts(&self) -> Option<&[ValueCount]> {
        self.value_counts.as_deref()
    }

    /// Compute every statistic this column's class calls for. Idempotent: once
    /// processed a second call logs and returns without touching any field.
    pub fn compute(&mut self) {
        if self.is_processed {
            debug!(key = %self.key, "column already profiled, skipping");
            return;
        }
        let array = self.column.as_ref();
        let null_count = array.null_count() as u64;
        self.null_count = Some(null_count);
        self.non_null_count = Some(array.len() as u64 - null_count);

        // distinct count over rendered values, every class gets this
        let mut distinct: HashSet<String> = HashSet::new();
        for row in 0..array.len() {
            if !array.is_null(row) {
                distinct.insert(scalar_string(array, row));
            }
        }
        self.unique = Some(distinct.len() as u64);

        if self.class == ColumnClass::Numerical {
            let mut acc = NumericAccumulator::new();
            for v in numeric_values(array) {
                acc.add(v);
            }
            match acc.finish() {
                Some(stats) => {
                    self.min = Some(stats.min);
                    self.max = Some(stats.max);
                    self.mean = Some(stats.mean);
                    self.median = Some(stats.median);
                    self.nunique = Some(stats.nunique);
                }
                // all-missing numeric column: aggregates stay unset
                None => self.nunique = Some(0),
            }
        }

        if self.class == ColumnClass::Categorical {
            let mut counter = FrequencyCounter::new();
            for row in 0..array.len() {
                if !array.is_null(row) {
                    counter.add(scalar_string(array, row));
                }
            }
            self.value_counts = Some(counter.finish(self.value_counts_limit));
        }

        self.is_processed = true;
    }

    /// Interpolated quantiles of the non-missing values, `(q, value)` pairs in
    /// the order requested. Undefined for non-numerical columns.
    pub fn quantiles(&self, q: &[f64]) -> Result<Vec<(f64, f64)>> {
        if !self.is_numerical() {
            return Err(FrameScopeError::NonNumerical {
                key: self.key.clone(),
            });
        }
        let mut values = numeric_values(self.column.as_ref());
        values.retain(|v| !v.is_nan());
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let pairs = q
            .iter()
            .map(|&p| {
                if values.is_empty() {
                    (p, f64::NAN)
                } else {
                    (p, interpolated_quantile(&values, p))
                }
            })
            .collect();
        Ok(pairs)
    }

    /// `n` values drawn without replacement from the raw column, nulls included.
    pub fn sample(&self, n: usize) -> Result<ArrayRef> {
        sample_array(&self.column, n, self.sample_seed)
    }

    /// Flat record of every statistic; fields the column's class never computes
    /// stay `None`.
    pub fn summary(&self) -> ColumnSummary {
        ColumnSummary {
            key: self.key.clone(),
            is_numerical: self.is_numerical(),
            is_categorical: self.is_categorical(),
            unique: self.unique,
            nunique: self.nunique,
            min: self.min,
            max: self.max,
            mean: self.mean,
            median: self.median,
            null_count: self.null_count,
            non_null_count: self.non_null_count,
            value_counts: self
                .value_counts
                .as_ref()
                .map(|vc| vc.iter().map(|e| (e.value.clone(), e.count)).collect()),
        }
    }
}

/// One row of the tabular profiling summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub key: String,
    pub is_numerical: bool,
    pub is_categorical: bool,
    pub unique: Option<u64>,
    pub nunique: Option<u64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub null_count: Option<u64>,
    pub non_null_count: Option<u64>,
    pub value_counts: Option<BTreeMap<String, u64>>,
}
