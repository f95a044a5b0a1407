pub mod column;
pub mod frequency;
pub mod numeric;

pub use column::{ColumnClass, ColumnProfile, ColumnSummary, DEFAULT_QUANTILES};
pub use frequency::ValueCount;
pub use numeric::NumericStats;
