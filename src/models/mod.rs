//! Core data models for mandi-targets
//!
//! This module contains the data structures of the target-planning domain:
//! money, financial years, committees and checkposts, and the persistable
//! target records.

pub mod committee;
pub mod fiscal;
pub mod ids;
pub mod money;
pub mod record;

pub use committee::{Checkpost, Committee};
pub use fiscal::{is_calendar_month, month_name, ordered_fiscal_months, FinancialYear};
pub use ids::{CheckpostId, CommitteeId, TargetRecordId};
pub use money::Money;
pub use record::{NewTargetRecord, TargetRecord, TargetRecordType};
