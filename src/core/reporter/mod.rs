//! # Reporter Module
//!
//! Turns comparison and batch results into something a person can audit.
//!
//! ## Outputs
//! 1. **Alignment**: each symbol of one string next to its counterpart
//! 2. **Export**: JSON or CSV archive of a validation batch

mod alignment;
mod export;

pub use alignment::{alignment_rows, AlignedRow};
pub use export::{export_csv, export_json, export_to_path, BatchReport, ExportFormat};
