//! Data module - CSV loading

mod loader;

pub use loader::{load_csv, numeric_columns, LoaderError};
