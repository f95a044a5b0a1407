use crate::collection::ProfileCollection;
use crate::explorer::Explorer;
use arrow::util::pretty::pretty_format_batches;
use framescope_common::Result;

/// Headless one-screen overview of a profiled explorer.
pub fn print_summary(explorer: &Explorer) {
    println!("{:<16} {}", "Rows:", explorer.data().num_rows());
    println!("{:<16} {}", "Columns:", explorer.data().num_columns());
    println!("{:<16} {}", "Numerical:", explorer.numerical().len());
    println!("{:<16} {}", "Categorical:", explorer.categorical().len());
}

/// Render the collection's summary table for terminal display.
pub fn format_table(collection: &ProfileCollection) -> Result<String> {
    let batch = collection.to_table()?;
    let rendered = pretty_format_batches(&[batch])?;
    Ok(rendered.to_string())
}

/// JSON document with one record per profiled column, for downstream reporting.
pub fn summary_json(collection: &ProfileCollection) -> serde_json::Value {
    serde_json::json!({ "columns": collection.summaries() })
}
