//! Datapeek - CSV Dataset Summary & Console Report Tool
//!
//! Loads a CSV dataset and prints a console report: shape, column types,
//! descriptive statistics, missing-value counts, and the distribution of
//! the category column.

mod data;
mod report;
mod stats;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Input dataset, relative to the working directory.
const DATA_PATH: &str = "sample_data/products.csv";
/// Column whose value distribution closes the report.
const CATEGORY_COLUMN: &str = "Category";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let df = data::load_csv(DATA_PATH)?;
    info!("loaded {} rows from {}", df.height(), DATA_PATH);

    report::print_report(&df, CATEGORY_COLUMN)?;

    info!("report complete");
    Ok(())
}
