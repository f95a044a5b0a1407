use arrow::array::{ArrayRef, UInt64Array};
use arrow::compute::take;
use arrow::record_batch::RecordBatch;
use framescope_common::Result;

/// Pick `n` of `len` indices without replacement, deterministically per seed:
/// XOR each index with the seed then order by knuth multiplicative hash.
pub fn select_indices(len: usize, n: usize, seed: u64) -> Vec<u64> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.sort_by_key(|&i| (i as u64 ^ seed).wrapping_mul(2654435761));
    indices.truncate(n.min(len));
    indices.into_iter().map(|i| i as u64).collect()
}

/// `n` values drawn without replacement from one column.
pub fn sample_array(array: &ArrayRef, n: usize, seed: u64) -> Result<ArrayRef> {
    let idx = UInt64Array::from(select_indices(array.len(), n, seed));
    Ok(take(array.as_ref(), &idx, None)?)
}

/// `n` whole rows drawn without replacement, the same indices across columns.
pub fn sample_rows(batch: &RecordBatch, n: usize, seed: u64) -> Result<RecordBatch> {
    let idx = UInt64Array::from(select_indices(batch.num_rows(), n, seed));
    let columns = batch
        .columns()
        .iter()
        .map(|col| take(col.as_ref(), &idx, None))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(RecordBatch::try_new(batch.schema(), columns)?)
}

#[cfg(test)]
mod tests_select {
    use super::*;

    #[test]
    fn without_replacement_and_deterministic() {
        let a = select_indices(10, 4, 7);
        let b = select_indices(10, 4, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        let mut dedup = a.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 4);
    }

    #[test]
    fn clamps_to_population() {
        assert_eq!(select_indices(3, 10, 0).len(), 3);
        assert!(select_indices(0, 5, 0).is_empty());
    }

    #[test]
    fn seed_changes_selection() {
        let a = select_indices(100, 10, 1);
        let b = select_indices(100, 10, 2);
        assert_ne!(a, b);
    }
}
