pub mod collection;
pub mod dataset;
pub mod explorer;
pub mod export;
pub mod profile;
pub mod sample;

pub use collection::ProfileCollection;
pub use explorer::{analyze, Explorer};
pub use framescope_common::{ExplorerOptions, FrameScopeError, Result};
pub use profile::{ColumnClass, ColumnProfile, ColumnSummary, ValueCount, DEFAULT_QUANTILES};
