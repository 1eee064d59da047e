//! mandi-targets - Market fee target planning for agricultural market
//! committees
//!
//! This library implements the target-allocation core used by market
//! committee staff to plan monetary collection targets for a financial year
//! (April through March), broken down by month and by collection point: the
//! committee's central office and its subordinate checkposts. A derived
//! "overall committee" figure always equals the sum of its parts.
//!
//! # Architecture
//!
//! - `models`: money, financial years, committees, persistable records
//! - `services`: allocation model, distribution engine, aggregation,
//!   materializer, planning session
//! - `storage`: the persistence seam (repository trait + in-memory backend)
//! - `display` / `export`: terminal and CSV output
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use mandi_targets::models::{Committee, FinancialYear, Money};
//! use mandi_targets::services::{PlanningSession, TargetEntity};
//!
//! let committee = Committee::new("Indore Mandi");
//! let mut session =
//!     PlanningSession::new(committee, FinancialYear::new(2024), "admin").unwrap();
//! session
//!     .distribute(TargetEntity::Office, Money::from_rupees(1_200_000))
//!     .unwrap();
//! let batch = session.materialize();
//! assert_eq!(batch.len(), 24); // overall + office, for each of 12 months
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TargetError, TargetResult};
