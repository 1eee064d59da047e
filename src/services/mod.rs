//! Service layer for mandi-targets
//!
//! The service layer carries the editing and aggregation logic: the
//! allocation model, the distribution engine that spreads totals into it,
//! the pure aggregation reads, the record materializer, and the planning
//! session that ties them together.

pub mod aggregation;
pub mod allocation;
pub mod distribution;
pub mod materializer;
pub mod session;

pub use allocation::{AllocationModel, MonthlyAllocation, TargetEntity};
pub use distribution::{distribute, DistributionScope};
pub use materializer::materialize;
pub use session::PlanningSession;
