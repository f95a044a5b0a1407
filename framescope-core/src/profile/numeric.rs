use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Exact numeric statistics over the non-missing values of one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub nunique: u64,
    pub count: u64,
}

/// Collects non-null values and produces exact aggregates. Built for datasets
/// sized for interactive analysis, so values are held in full rather than
/// sketched — quantiles must interpolate exactly.
pub struct NumericAccumulator {
    values: Vec<f64>,
    sum: f64,
    min: f64,
    max: f64,
    // distinct f64 bit patterns, counted after widening: integers beyond 2^53
    // that collapse to the same f64 count once
    distinct: HashSet<u64>,
}

impl NumericAccumulator {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            sum: 0.0,
            min: f64::MAX,
            max: f64::MIN,
            distinct: HashSet::new(),
        }
    }

    pub fn add(&mut self, v: f64) {
        // NaN is non-null in Arrow but excluded from aggregates like a
        // missing value
        if v.is_nan() {
            return;
        }
        self.values.push(v);
        self.sum += v;
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
        self.distinct.insert(v.to_bits());
    }

    pub fn finish(mut self) -> Option<NumericStats> {
        if self.values.is_empty() {
            return None;
        }
        let n = self.values.len() as f64;
        self.values
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = interpolated_quantile(&self.values, 0.5);
        Some(NumericStats {
            min: self.min,
            max: self.max,
            mean: self.sum / n,
            median,
            nunique: self.distinct.len() as u64,
            count: self.values.len() as u64,
        })
    }
}

impl Default for NumericAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Linearly interpolated quantile over an ascending-sorted slice.
/// `sorted` must be non-empty and `q` in [0, 1].
pub fn interpolated_quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    if lo + 1 >= n {
        return sorted[n - 1];
    }
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

#[cfg(test)]
mod tests_quantile {
    use super::*;

    fn q(vals: &[f64], p: f64) -> f64 {
        let mut v = vals.to_vec();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        interpolated_quantile(&v, p)
    }

    #[test] fn q25_of_1234() { assert!((q(&[1.0, 2.0, 3.0, 4.0], 0.25) - 1.75).abs() < 1e-12); }
    #[test] fn q50_of_1234() { assert!((q(&[1.0, 2.0, 3.0, 4.0], 0.5) - 2.5).abs() < 1e-12); }
    #[test] fn q75_of_1234() { assert!((q(&[1.0, 2.0, 3.0, 4.0], 0.75) - 3.25).abs() < 1e-12); }
    #[test] fn q_extremes() { assert_eq!(q(&[5.0, 1.0, 3.0], 0.0), 1.0); assert_eq!(q(&[5.0, 1.0, 3.0], 1.0), 5.0); }
    #[test] fn q_single_value() { assert_eq!(q(&[7.0], 0.75), 7.0); }

    #[test]
    fn accumulator_exact_stats() {
        let mut acc = NumericAccumulator::new();
        for v in [20.0, 25.0, 30.0] {
            acc.add(v);
        }
        let s = acc.finish().unwrap();
        assert_eq!(s.min, 20.0);
        assert_eq!(s.max, 30.0);
        assert_eq!(s.mean, 25.0);
        assert_eq!(s.median, 25.0);
        assert_eq!(s.nunique, 3);
    }

    #[test]
    fn accumulator_empty_is_none() {
        assert!(NumericAccumulator::new().finish().is_none());
    }

    #[test]
    fn accumulator_ignores_nan() {
        let mut acc = NumericAccumulator::new();
        for v in [1.0, f64::NAN, 3.0] {
            acc.add(v);
        }
        let s = acc.finish().unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.median, 2.0);
        assert_eq!(s.count, 2);
    }

    #[test]
    fn accumulator_all_nan_is_none() {
        let mut acc = NumericAccumulator::new();
        acc.add(f64::NAN);
        assert!(acc.finish().is_none());
    }
}
