//! Summary Statistics Module
//! Descriptive statistics for numeric columns.

use polars::prelude::*;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Default for ColumnSummary {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Compute descriptive statistics for an array of values.
///
/// Standard deviation is the sample deviation (n-1 denominator).
pub fn summarize(values: &[f64]) -> ColumnSummary {
    let n = values.len();
    if n == 0 {
        return ColumnSummary::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = if n > 1 {
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
    } else {
        0.0
    };

    ColumnSummary {
        count: n,
        mean,
        std: variance.sqrt(),
        min: sorted[0],
        q25: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q75: percentile(&sorted, 75.0),
        max: sorted[n - 1],
    }
}

/// Calculate percentile using linear interpolation (NumPy compatible).
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// Extract a column's non-null values as f64, casting integers.
pub fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, PolarsError> {
    let series = df.column(column)?;
    let values_f64 = series.cast(&DataType::Float64)?;
    let ca = values_f64.f64()?;

    Ok(ca.into_iter().flatten().filter(|v| !v.is_nan()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_one_to_four() {
        let s = summarize(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(s.count, 4);
        assert!((s.mean - 2.5).abs() < 1e-9);
        assert!((s.std - 1.290_994_448_735_805_6).abs() < 1e-9);
        assert!((s.min - 1.0).abs() < 1e-9);
        assert!((s.q25 - 1.75).abs() < 1e-9);
        assert!((s.median - 2.5).abs() < 1e-9);
        assert!((s.q75 - 3.25).abs() < 1e-9);
        assert!((s.max - 4.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_nan_stats() {
        let s = summarize(&[]);

        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
        assert!(s.std.is_nan());
    }

    #[test]
    fn single_value_has_zero_std() {
        let s = summarize(&[7.0]);

        assert_eq!(s.count, 1);
        assert!((s.std - 0.0).abs() < 1e-9);
        assert!((s.median - 7.0).abs() < 1e-9);
    }

    #[test]
    fn numeric_values_skips_nulls_and_casts_ints() {
        let df = DataFrame::new(vec![Column::new(
            "Stock".into(),
            vec![Some(3i64), None, Some(12)],
        )])
        .unwrap();

        let values = numeric_values(&df, "Stock").unwrap();
        assert_eq!(values, vec![3.0, 12.0]);
    }

    #[test]
    fn numeric_values_missing_column_fails() {
        let df = DataFrame::new(vec![Column::new("A".into(), vec![1.0, 2.0])]).unwrap();
        assert!(numeric_values(&df, "B").is_err());
    }
}
