//! In-memory target record repository
//!
//! Backs tests and the one-shot CLI. Submission is a single atomic batch
//! handoff: every record in the batch is stamped and stored, or the call
//! fails as a whole.

use crate::error::{TargetError, TargetResult};
use crate::models::{NewTargetRecord, TargetRecord, TargetRecordId};
use crate::storage::{TargetFilter, TargetRepository};

/// A `TargetRepository` holding records in process memory
#[derive(Debug, Default)]
pub struct InMemoryTargetRepository {
    records: Vec<TargetRecord>,
}

impl InMemoryTargetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TargetRepository for InMemoryTargetRepository {
    fn fetch(&self, filter: &TargetFilter) -> TargetResult<Vec<TargetRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    fn submit(&mut self, batch: Vec<NewTargetRecord>) -> TargetResult<Vec<TargetRecord>> {
        let created: Vec<TargetRecord> = batch.into_iter().map(TargetRecord::create).collect();
        self.records.extend(created.iter().cloned());
        Ok(created)
    }

    fn delete(&mut self, id: TargetRecordId) -> TargetResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(TargetError::record_not_found(id.to_string()));
        }
        Ok(())
    }
}
