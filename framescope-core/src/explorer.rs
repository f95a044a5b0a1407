use crate::collection::ProfileCollection;
use crate::dataset::validate_batch;
use crate::profile::ColumnProfile;
use crate::sample::sample_rows;
use arrow::record_batch::RecordBatch;
use framescope_common::{ExplorerOptions, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrates profiling of one dataset snapshot.
///
/// The explorer owns its snapshot exclusively: Arrow arrays are immutable after
/// construction, so the clone taken here can never observe later changes on the
/// caller's side. Transformations never mutate the receiver — each one computes
/// a new batch and funnels through [`rebuilt`](Self::rebuilt), which wraps it in
/// a brand-new, fully profiled explorer.
#[derive(Debug, Clone)]
pub struct Explorer {
    data: RecordBatch,
    profiles: ProfileCollection,
    options: ExplorerOptions,
}

impl Explorer {
    pub const DEFAULT_DROPNA_THRESHOLD: f64 = 0.5;

    pub fn try_new(data: &RecordBatch) -> Result<Self> {
        Self::with_options(data, ExplorerOptions::default())
    }

    pub fn with_options(data: &RecordBatch, options: ExplorerOptions) -> Result<Self> {
        validate_batch(data)?;
        Ok(Self {
            data: data.clone(),
            profiles: ProfileCollection::new(),
            options,
        })
    }

    /// The dataset snapshot this explorer profiles.
    pub fn data(&self) -> &RecordBatch {
        &self.data
    }

    /// All profiles from the latest pass, in dataset column order.
    pub fn profiles(&self) -> &ProfileCollection {
        &self.profiles
    }

    /// Strict profile lookup by column name.
    pub fn column(&self, key: &str) -> Result<&Arc<ColumnProfile>> {
        self.profiles.column(key)
    }

    /// Profile every column of the snapshot. Chainable:
    /// `Explorer::try_new(&batch)?.analyze()`. Re-running rebuilds the whole
    /// collection from scratch; profiles from a prior pass are discarded.
    pub fn analyze(mut self) -> Self {
        let mut profiles = ProfileCollection::new();
        for (field, column) in self
            .data
            .schema_ref()
            .fields()
            .iter()
            .zip(self.data.columns())
        {
            let mut profile = ColumnProfile::new(field.name().as_str(), Arc::clone(column))
                .with_sample_seed(self.options.sample_seed)
                .with_value_counts_limit(self.options.value_counts_limit);
            profile.compute();
            profiles.add(Arc::new(profile));
        }
        debug!(columns = profiles.len(), "profiling pass complete");
        self.profiles = profiles;
        self
    }

    /// Sub-collection of numerical profiles, sharing the underlying instances.
    pub fn numerical(&self) -> ProfileCollection {
        let keys: Vec<&str> = self
            .profiles
            .iter()
            .filter(|(_, p)| p.is_numerical())
            .map(|(k, _)| k)
            .collect();
        self.profiles.fragment(&keys)
    }

    /// Sub-collection of categorical profiles, sharing the underlying instances.
    pub fn categorical(&self) -> ProfileCollection {
        let keys: Vec<&str> = self
            .profiles
            .iter()
            .filter(|(_, p)| p.is_categorical())
            .map(|(k, _)| k)
            .collect();
        self.profiles.fragment(&keys)
    }

    /// `n` rows drawn without replacement from the snapshot.
    pub fn sample(&self, n: usize) -> Result<RecordBatch> {
        sample_rows(&self.data, n, self.options.sample_seed)
    }

    /// Drop every column whose non-missing count is strictly below
    /// `floor(row_count * threshold)`. Returns a new, fully profiled explorer;
    /// the receiver is untouched.
    pub fn dropna(&self, threshold: f64) -> Result<Explorer> {
        let data = self.dropna_batch(threshold)?;
        self.rebuilt("dropna", data)
    }

    // Transformation bodies only compute the new batch; wrapping it in a new
    // explorer is rebuilt()'s job.
    fn dropna_batch(&self, threshold: f64) -> Result<RecordBatch> {
        let required = (self.data.num_rows() as f64 * threshold).floor() as usize;
        let keep: Vec<usize> = (0..self.data.num_columns())
            .filter(|&i| {
                let col = self.data.column(i);
                col.len() - col.null_count() >= required
            })
            .collect();
        Ok(self.data.project(&keep)?)
    }

    fn rebuilt(&self, op: &str, data: RecordBatch) -> Result<Explorer> {
        info!(op, "transformation returns a new explorer instance");
        Ok(Explorer::with_options(&data, self.options.clone())?.analyze())
    }
}

/// Profile a dataset in one call.
pub fn analyze(data: &RecordBatch) -> Result<Explorer> {
    Ok(Explorer::try_new(data)?.analyze())
}
