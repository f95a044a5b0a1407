use arrow::array::*;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use framescope_common::{FrameScopeError, Result};
use std::collections::HashSet;

/// Check that a batch is a well-formed tabular snapshot: every column name unique.
pub fn validate_batch(batch: &RecordBatch) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(batch.num_columns());
    for field in batch.schema_ref().fields() {
        if !seen.insert(field.name().as_str()) {
            return Err(FrameScopeError::InvalidDataset(format!(
                "duplicate column name '{}'",
                field.name()
            )));
        }
    }
    Ok(())
}

pub fn is_numerical_type(dt: &DataType) -> bool {
    matches!(
        dt,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

pub fn is_categorical_type(dt: &DataType) -> bool {
    match dt {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Boolean => true,
        // dictionary-encoded strings are enumerated labels
        DataType::Dictionary(_, value) => {
            matches!(value.as_ref(), DataType::Utf8 | DataType::LargeUtf8)
        }
        _ => false,
    }
}

/// Non-null values of a numeric column widened to f64. Empty for non-numeric types.
pub fn numeric_values(array: &dyn Array) -> Vec<f64> {
    macro_rules! gather {
        ($arr:ty) => {{
            let a = array.as_any().downcast_ref::<$arr>().unwrap();
            a.iter().flatten().map(|v| v as f64).collect()
        }};
    }
    match array.data_type() {
        DataType::Int8 => gather!(Int8Array),
        DataType::Int16 => gather!(Int16Array),
        DataType::Int32 => gather!(Int32Array),
        DataType::Int64 => gather!(Int64Array),
        DataType::UInt8 => gather!(UInt8Array),
        DataType::UInt16 => gather!(UInt16Array),
        DataType::UInt32 => gather!(UInt32Array),
        DataType::UInt64 => gather!(UInt64Array),
        DataType::Float32 => gather!(Float32Array),
        DataType::Float64 => gather!(Float64Array),
        _ => Vec::new(),
    }
}

/// String rendering of one cell, used for distinct counting and frequency tallies.
/// Row must not be null.
pub fn scalar_string(array: &dyn Array, row: usize) -> String {
    match array.data_type() {
        DataType::Utf8 => array
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        DataType::LargeUtf8 => array
            .as_any()
            .downcast_ref::<LargeStringArray>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        DataType::Boolean => array
            .as_any()
            .downcast_ref::<BooleanArray>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        _ => array_value_to_string(array, row).unwrap_or_default(),
    }
}
