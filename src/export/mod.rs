//! Export functionality
//!
//! Writes materialized target batches to machine-readable formats.

pub mod csv;

pub use csv::export_batch_csv;
