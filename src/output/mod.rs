//! Output formatting for classification results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output helpers

mod csv;
mod terminal;

pub use csv::{classification_row, print_classification, CSV_HEADER};
pub use terminal::format_field;
