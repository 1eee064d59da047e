//! Display formatting for terminal output
//!
//! Formats the planning grid, materialized batches, and the fiscal calendar
//! for terminal display.

pub mod plan;

pub use plan::{format_batch, format_fiscal_calendar, format_plan_grid};
