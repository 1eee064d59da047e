//! Persistable target records
//!
//! The planning core's entire external-facing contract is a batch of
//! [`NewTargetRecord`]s: one per month and entity with a strictly positive
//! amount. Field names serialize in the backend's camelCase convention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ids::{CheckpostId, CommitteeId, TargetRecordId};
use crate::models::money::Money;

/// The three persistable target record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetRecordType {
    /// Per-month total for the whole committee (office + all checkposts)
    OverallCommittee,
    /// The sub-target attributed to the committee's central office staff
    CommitteeOffice,
    /// The sub-target of one checkpost; carries a checkpost id
    Checkpost,
}

impl TargetRecordType {
    /// The backend's wire name for this record type
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::OverallCommittee => "OVERALL_COMMITTEE",
            Self::CommitteeOffice => "COMMITTEE_OFFICE",
            Self::Checkpost => "CHECKPOST",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OverallCommittee => "Overall committee",
            Self::CommitteeOffice => "Committee office",
            Self::Checkpost => "Checkpost",
        }
    }
}

impl fmt::Display for TargetRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A target record as submitted to the persistence collaborator (no id yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTargetRecord {
    /// Calendar year the month falls in, already resolved from the
    /// financial year
    pub year: i32,
    /// Calendar month number, 1-12
    pub month: u32,
    pub committee_id: CommitteeId,
    /// Present only for `CHECKPOST` records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpost_id: Option<CheckpostId>,
    pub market_fee_target: Money,
    pub set_by: String,
    #[serde(rename = "type")]
    pub record_type: TargetRecordType,
}

/// A target record as returned by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub id: TargetRecordId,
    #[serde(flatten)]
    pub target: NewTargetRecord,
    pub created_at: DateTime<Utc>,
}

impl TargetRecord {
    /// Stamp a submitted record with a fresh id and creation time
    pub fn create(target: NewTargetRecord) -> Self {
        Self {
            id: TargetRecordId::new(),
            target,
            created_at: Utc::now(),
        }
    }
}
