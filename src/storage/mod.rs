//! Persistence seam for target records
//!
//! The planning core's job ends at producing a batch; submitting, fetching,
//! and deleting records is a collaborator's contract. [`TargetRepository`]
//! is that narrow interface, and [`InMemoryTargetRepository`] implements it
//! for tests and the CLI. No retry or partial-failure handling lives here.

pub mod memory;

pub use memory::InMemoryTargetRepository;

use crate::error::TargetResult;
use crate::models::{CommitteeId, NewTargetRecord, TargetRecord, TargetRecordId, TargetRecordType};

/// Filter for fetching target records: year, optional type, optional
/// committee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFilter {
    pub year: i32,
    pub record_type: Option<TargetRecordType>,
    pub committee_id: Option<CommitteeId>,
}

impl TargetFilter {
    /// All records for a calendar year
    pub fn year(year: i32) -> Self {
        Self {
            year,
            record_type: None,
            committee_id: None,
        }
    }

    /// Narrow to one record type
    pub fn with_type(mut self, record_type: TargetRecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    /// Narrow to one committee
    pub fn with_committee(mut self, committee_id: CommitteeId) -> Self {
        self.committee_id = Some(committee_id);
        self
    }

    /// Whether a record passes this filter
    pub fn matches(&self, record: &TargetRecord) -> bool {
        record.target.year == self.year
            && self
                .record_type
                .map_or(true, |t| record.target.record_type == t)
            && self
                .committee_id
                .map_or(true, |c| record.target.committee_id == c)
    }
}

/// Black-box persistence operations for target records
pub trait TargetRepository {
    /// Fetch records matching a filter
    fn fetch(&self, filter: &TargetFilter) -> TargetResult<Vec<TargetRecord>>;

    /// Submit a batch of new records; returns them with assigned ids.
    /// An empty batch is a valid submission.
    fn submit(&mut self, batch: Vec<NewTargetRecord>) -> TargetResult<Vec<TargetRecord>>;

    /// Delete a record by id
    fn delete(&mut self, id: TargetRecordId) -> TargetResult<()>;
}
