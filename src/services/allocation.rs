//! Target allocation model
//!
//! Holds the in-memory per-entity, per-month target amounts for one editing
//! session. The model is never persisted; it is rebuilt all-zero whenever the
//! active committee or its checkpost roster changes and discarded once a
//! batch has been materialized.

use std::collections::BTreeMap;

use crate::error::{TargetError, TargetResult};
use crate::models::{is_calendar_month, CheckpostId, Committee, Money};

/// The owner of one monthly allocation: the committee's central office or a
/// specific checkpost, addressed by stable id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEntity {
    Office,
    Checkpost(CheckpostId),
}

impl std::fmt::Display for TargetEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Office => write!(f, "office"),
            Self::Checkpost(id) => write!(f, "checkpost {}", id),
        }
    }
}

/// Twelve per-month amounts for one entity, calendar-month indexed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyAllocation {
    months: [Money; 12],
}

impl MonthlyAllocation {
    /// All twelve months at zero
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// The amount for a calendar month; zero for out-of-range months
    pub fn amount(&self, month: u32) -> Money {
        if is_calendar_month(month) {
            self.months[(month - 1) as usize]
        } else {
            Money::zero()
        }
    }

    /// Sum of all twelve months
    pub fn total(&self) -> Money {
        self.months.iter().copied().sum()
    }

    fn set(&mut self, month: u32, amount: Money) {
        self.months[(month - 1) as usize] = amount;
    }
}

/// Per-entity, per-month amount store for one editing session
///
/// Checkpost allocations are keyed by stable id; roster order is a display
/// concern and lives with the committee descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationModel {
    office: MonthlyAllocation,
    checkposts: BTreeMap<CheckpostId, MonthlyAllocation>,
}

impl AllocationModel {
    /// Create a zeroed model covering the given checkposts
    pub fn new(checkpost_ids: impl IntoIterator<Item = CheckpostId>) -> Self {
        Self {
            office: MonthlyAllocation::zeroed(),
            checkposts: checkpost_ids
                .into_iter()
                .map(|id| (id, MonthlyAllocation::zeroed()))
                .collect(),
        }
    }

    /// Create a zeroed model covering a committee's current roster
    pub fn for_committee(committee: &Committee) -> Self {
        Self::new(committee.checkpost_ids())
    }

    /// Set one month's amount for one entity.
    ///
    /// Rejects out-of-range months, negative amounts, and checkposts the
    /// model does not cover.
    pub fn set_month(
        &mut self,
        entity: TargetEntity,
        month: u32,
        amount: Money,
    ) -> TargetResult<()> {
        if !is_calendar_month(month) {
            return Err(TargetError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        if amount.is_negative() {
            return Err(TargetError::Validation(format!(
                "Target amount cannot be negative: {}",
                amount
            )));
        }

        match entity {
            TargetEntity::Office => {
                self.office.set(month, amount);
                Ok(())
            }
            TargetEntity::Checkpost(id) => {
                let allocation = self
                    .checkposts
                    .get_mut(&id)
                    .ok_or_else(|| TargetError::checkpost_not_found(id.to_string()))?;
                allocation.set(month, amount);
                Ok(())
            }
        }
    }

    /// The amount for one entity and month; zero for entities or months the
    /// model does not cover
    pub fn amount(&self, entity: TargetEntity, month: u32) -> Money {
        match entity {
            TargetEntity::Office => self.office.amount(month),
            TargetEntity::Checkpost(id) => self
                .checkposts
                .get(&id)
                .map(|a| a.amount(month))
                .unwrap_or_else(Money::zero),
        }
    }

    /// Sum of an entity's twelve months
    pub fn entity_total(&self, entity: TargetEntity) -> Money {
        match entity {
            TargetEntity::Office => self.office.total(),
            TargetEntity::Checkpost(id) => self
                .checkposts
                .get(&id)
                .map(|a| a.total())
                .unwrap_or_else(Money::zero),
        }
    }

    /// Ids of all checkposts the model covers, in stable (sorted) order
    pub fn checkpost_ids(&self) -> impl Iterator<Item = CheckpostId> + '_ {
        self.checkposts.keys().copied()
    }

    /// Whether the model covers a given checkpost
    pub fn has_checkpost(&self, id: CheckpostId) -> bool {
        self.checkposts.contains_key(&id)
    }

    /// Whether the model covers exactly a committee's current roster
    pub fn matches_roster(&self, committee: &Committee) -> bool {
        let mut roster = committee.checkpost_ids();
        roster.sort_unstable();
        roster.dedup();
        self.checkposts.keys().copied().eq(roster)
    }
}
