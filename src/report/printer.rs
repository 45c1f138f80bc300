//! Console Report Module
//! Renders the loaded DataFrame into the printed report sections.

use polars::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

use crate::data;
use crate::stats;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report failed: {0}")]
    Polars(#[from] PolarsError),
}

/// Statistics table rows, in print order.
const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Row/column count as `(rows, columns)`.
pub fn render_shape(df: &DataFrame) -> String {
    let (rows, cols) = df.shape();
    format!("({}, {})", rows, cols)
}

/// One aligned line per column: name and inferred dtype.
pub fn render_dtypes(df: &DataFrame) -> String {
    let width = name_width(df);
    df.get_columns()
        .iter()
        .map(|c| format!("{:<width$}  {}", c.name(), c.dtype(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Descriptive statistics table for the numeric columns.
///
/// One column per numeric column, one row per statistic. Counts are
/// non-null counts; floats print with six decimal places.
pub fn render_describe(df: &DataFrame) -> Result<String, ReportError> {
    let columns = data::numeric_columns(df);
    if columns.is_empty() {
        return Ok("(no numeric columns)".to_string());
    }

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(columns.len());
    for name in &columns {
        let values = stats::numeric_values(df, name)?;
        let s = stats::summarize(&values);
        cells.push(vec![
            s.count.to_string(),
            format_stat(s.mean),
            format_stat(s.std),
            format_stat(s.min),
            format_stat(s.q25),
            format_stat(s.median),
            format_stat(s.q75),
            format_stat(s.max),
        ]);
    }

    let label_width = STAT_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);
    let widths: Vec<usize> = columns
        .iter()
        .zip(&cells)
        .map(|(name, col)| {
            col.iter()
                .map(|cell| cell.len())
                .max()
                .unwrap_or(0)
                .max(name.len())
        })
        .collect();

    let mut lines = Vec::with_capacity(STAT_LABELS.len() + 1);
    let header = columns
        .iter()
        .zip(&widths)
        .map(|(name, w)| format!("{:>w$}", name, w = w))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!(
        "{:<label_width$}  {}",
        "",
        header,
        label_width = label_width
    ));

    for (row, label) in STAT_LABELS.iter().enumerate() {
        let body = cells
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{:>w$}", col[row], w = w))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!(
            "{:<label_width$}  {}",
            label,
            body,
            label_width = label_width
        ));
    }

    Ok(lines.join("\n"))
}

/// One aligned line per column: name and missing-value count.
pub fn render_null_counts(df: &DataFrame) -> String {
    let width = name_width(df);
    df.get_columns()
        .iter()
        .map(|c| format!("{:<width$}  {}", c.name(), c.null_count(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Frequency of each distinct value in a column, descending.
///
/// Null cells count as a distinct `null` level, so the frequencies
/// total the row count. Ties sort by value for deterministic output.
pub fn render_value_counts(df: &DataFrame, column: &str) -> Result<String, ReportError> {
    let series = df.column(column)?.as_materialized_series();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in series.iter() {
        let key = if value.is_null() {
            "null".to_string()
        } else {
            value.to_string().trim_matches('"').to_string()
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let width = entries.iter().map(|(value, _)| value.len()).max().unwrap_or(0);
    Ok(entries
        .iter()
        .map(|(value, count)| format!("{:<width$}  {}", value, count, width = width))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Print all report sections in order.
///
/// Sections are independent; a failure in a later section leaves the
/// earlier ones already printed.
pub fn print_report(df: &DataFrame, category_column: &str) -> Result<(), ReportError> {
    println!("Data loaded: {}", render_shape(df));

    println!("\nColumn types:");
    println!("{}", render_dtypes(df));

    println!("\nBasic statistics:");
    println!("{}", render_describe(df)?);

    println!("\nMissing values:");
    println!("{}", render_null_counts(df));

    println!("\nCategory distribution:");
    println!("{}", render_value_counts(df, category_column)?);

    Ok(())
}

fn name_width(df: &DataFrame) -> usize {
    df.get_columns()
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0)
}

fn format_stat(v: f64) -> String {
    format!("{:.6}", v)
}
