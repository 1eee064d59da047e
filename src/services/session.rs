//! Planning session
//!
//! Holds the two orthogonal pieces of editing state: the active distribution
//! scope and the allocation model's contents. Switching scope is a pure
//! state change that never clears allocation data; the model resets to
//! all-zero only when the committee or its checkpost roster changes, not on
//! year or scope change.

use crate::error::{TargetError, TargetResult};
use crate::models::{Committee, FinancialYear, Money, NewTargetRecord};
use crate::services::aggregation::{month_total, scope_total};
use crate::services::allocation::{AllocationModel, TargetEntity};
use crate::services::distribution::{distribute, DistributionScope};
use crate::services::materializer::materialize;

/// One staff member's target-editing session for a committee and year
#[derive(Debug, Clone)]
pub struct PlanningSession {
    committee: Committee,
    year: FinancialYear,
    set_by: String,
    scope: DistributionScope,
    model: AllocationModel,
}

impl PlanningSession {
    /// Start a fresh session: all-months scope, all amounts zero
    pub fn new(
        committee: Committee,
        year: FinancialYear,
        set_by: impl Into<String>,
    ) -> TargetResult<Self> {
        committee.validate()?;
        let model = AllocationModel::for_committee(&committee);
        Ok(Self {
            committee,
            year,
            set_by: set_by.into(),
            scope: DistributionScope::AllMonths,
            model,
        })
    }

    pub fn committee(&self) -> &Committee {
        &self.committee
    }

    pub fn year(&self) -> FinancialYear {
        self.year
    }

    pub fn scope(&self) -> DistributionScope {
        self.scope
    }

    /// Read access to the allocation model for aggregation and display
    pub fn model(&self) -> &AllocationModel {
        &self.model
    }

    /// Switch the active scope. Pure UI-state change: allocation data is
    /// kept; only distribution writes and the headline total are affected.
    pub fn set_scope(&mut self, scope: DistributionScope) {
        self.scope = scope;
    }

    /// Switch the financial year being planned. Keeps the model.
    pub fn set_year(&mut self, year: FinancialYear) {
        self.year = year;
    }

    /// Switch the active committee. Discards all unsaved edits and rebuilds
    /// a zeroed model, but only when the committee id or checkpost roster
    /// actually changed.
    pub fn set_committee(&mut self, committee: Committee) -> TargetResult<()> {
        committee.validate()?;
        let roster_changed =
            committee.id != self.committee.id || !self.model.matches_roster(&committee);
        if roster_changed {
            self.model = AllocationModel::for_committee(&committee);
        }
        self.committee = committee;
        Ok(())
    }

    /// Directly set one month's amount for one entity
    pub fn set_month(
        &mut self,
        entity: TargetEntity,
        month: u32,
        amount: Money,
    ) -> TargetResult<()> {
        self.model.set_month(entity, month, amount)
    }

    /// Spread a total over the active scope for one entity
    pub fn distribute(&mut self, entity: TargetEntity, total: Money) -> TargetResult<()> {
        distribute(&mut self.model, entity, self.scope, total)
    }

    /// The headline total for the active scope, recomputed on every call
    pub fn headline_total(&self) -> Money {
        scope_total(&self.model, self.scope)
    }

    /// One month's committee-wide total
    pub fn month_total(&self, month: u32) -> Money {
        month_total(&self.model, month)
    }

    /// Resolve a user-facing entity name: "office" (or "supervisor") for the
    /// central office, otherwise a checkpost by name or id
    pub fn resolve_entity(&self, name: &str) -> TargetResult<TargetEntity> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("office") || trimmed.eq_ignore_ascii_case("supervisor") {
            return Ok(TargetEntity::Office);
        }

        if let Some(cp) = self.committee.checkpost_by_name(trimmed) {
            return Ok(TargetEntity::Checkpost(cp.id));
        }
        if let Ok(id) = crate::models::CheckpostId::parse(trimmed) {
            if self.model.has_checkpost(id) {
                return Ok(TargetEntity::Checkpost(id));
            }
        }

        Err(TargetError::checkpost_not_found(trimmed))
    }

    /// Produce the persistable batch for the active scope. The session can
    /// be discarded afterwards; nothing is written until the caller submits
    /// the batch to a repository.
    pub fn materialize(&self) -> Vec<NewTargetRecord> {
        materialize(
            &self.model,
            self.scope,
            self.year,
            self.committee.id,
            &self.set_by,
        )
    }
}
