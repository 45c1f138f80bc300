//! CSV Data Loader Module
//! Reads a delimited file into a DataFrame using Polars.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load a CSV file using Polars.
///
/// The header row supplies column names; each column's type is inferred
/// from the file contents. A missing file or malformed content fails the
/// load with the underlying reader error.
pub fn load_csv(file_path: &str) -> Result<DataFrame, LoaderError> {
    let df = LazyCsvReader::new(file_path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    Ok(df)
}

/// Names of columns with a numeric dtype.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| {
            matches!(
                col.dtype(),
                DataType::Float32
                    | DataType::Float64
                    | DataType::Int8
                    | DataType::Int16
                    | DataType::Int32
                    | DataType::Int64
                    | DataType::UInt8
                    | DataType::UInt16
                    | DataType::UInt32
                    | DataType::UInt64
            )
        })
        .map(|col| col.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("temp file");
        tmp.write_all(content.as_bytes()).expect("write csv");
        tmp
    }

    #[test]
    fn loads_shape_and_types() {
        let tmp = write_csv("Product,Price,Stock\nWidget,9.99,12\nGadget,24.50,3\n");
        let df = load_csv(tmp.path().to_str().unwrap()).unwrap();

        assert_eq!(df.shape(), (2, 3));
        assert_eq!(
            numeric_columns(&df),
            vec!["Price".to_string(), "Stock".to_string()]
        );
    }

    #[test]
    fn empty_cells_become_nulls() {
        let tmp = write_csv("Price,Category\n1.5,A\n,B\n2.5,\n");
        let df = load_csv(tmp.path().to_str().unwrap()).unwrap();

        assert_eq!(df.column("Price").unwrap().null_count(), 1);
        assert_eq!(df.column("Category").unwrap().null_count(), 1);
    }

    #[test]
    fn missing_file_fails() {
        let result = load_csv("no/such/file.csv");
        assert!(result.is_err());
    }
}
