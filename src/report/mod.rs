//! Report module - console report sections

mod printer;

pub use printer::{
    print_report, render_describe, render_dtypes, render_null_counts, render_shape,
    render_value_counts, ReportError,
};
