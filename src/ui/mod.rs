//! Terminal presentation layer
//!
//! Validation reports are rendered through the [`ReportFormatter`] trait so
//! the `check` command can switch between text and JSON output.

pub mod formatter;

pub use formatter::{JsonFormatter, ReportFormatter, TextFormatter};
