//! Stats module - descriptive statistics

mod summary;

pub use summary::{numeric_values, summarize, ColumnSummary};
