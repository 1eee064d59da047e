//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod plan;

pub use plan::{handle_months_command, handle_plan_command, OutputFormat, PlanArgs};
