//! Result output
//!
//! The results file writer plus terminal display for the CLI.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{format_complete, format_sample, print_encode_results, print_search_summary};
pub use report::{ReportSummary, write_results};
