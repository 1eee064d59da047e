//! Distribution engine
//!
//! Spreads a scalar total into the allocation model: either an even split
//! across all twelve fiscal months, or an overwrite of one selected month.
//! Supports the fast "type one annual number" path without twelve manual
//! entries, while single-month mode allows precise drill-down edits.

use std::fmt;

use crate::error::{TargetError, TargetResult};
use crate::models::{is_calendar_month, month_name, ordered_fiscal_months, Money};
use crate::services::allocation::{AllocationModel, TargetEntity};

/// Whether an entered total applies to all twelve fiscal months or to one
/// selected month only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionScope {
    AllMonths,
    SingleMonth(u32),
}

impl DistributionScope {
    /// The all-months scope
    pub fn all_months() -> Self {
        Self::AllMonths
    }

    /// A single-month scope; the month must be a valid calendar month
    pub fn single_month(month: u32) -> TargetResult<Self> {
        if !is_calendar_month(month) {
            return Err(TargetError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self::SingleMonth(month))
    }

    /// The months this scope touches, in fiscal display order
    pub fn months(&self) -> Vec<u32> {
        match self {
            Self::AllMonths => ordered_fiscal_months().to_vec(),
            Self::SingleMonth(m) => vec![*m],
        }
    }
}

impl fmt::Display for DistributionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllMonths => write!(f, "all months"),
            Self::SingleMonth(m) => write!(f, "{}", month_name(*m)),
        }
    }
}

/// Apply a total to an entity's allocation under the given scope.
///
/// All-months mode overwrites every month with an even integer split of the
/// total; the division remainder goes to the last fiscal month (March) so
/// the twelve months sum back to the total exactly. Single-month mode
/// overwrites only the selected month and leaves the other eleven as they
/// were. Neither mode is additive. Negative totals are rejected.
pub fn distribute(
    model: &mut AllocationModel,
    entity: TargetEntity,
    scope: DistributionScope,
    total: Money,
) -> TargetResult<()> {
    if total.is_negative() {
        return Err(TargetError::Validation(format!(
            "Cannot distribute a negative total: {}",
            total
        )));
    }

    match scope {
        DistributionScope::AllMonths => {
            let (share, remainder) = total.split_even(12);
            for month in ordered_fiscal_months() {
                model.set_month(entity, month, share)?;
            }
            if !remainder.is_zero() {
                model.set_month(entity, 3, share + remainder)?;
            }
            Ok(())
        }
        DistributionScope::SingleMonth(month) => model.set_month(entity, month, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_construction() {
        assert!(DistributionScope::single_month(0).is_err());
        assert!(DistributionScope::single_month(13).is_err());
        assert_eq!(
            DistributionScope::single_month(6).unwrap(),
            DistributionScope::SingleMonth(6)
        );
    }

    #[test]
    fn test_scope_months() {
        assert_eq!(
            DistributionScope::all_months().months(),
            ordered_fiscal_months().to_vec()
        );
        assert_eq!(DistributionScope::SingleMonth(2).months(), vec![2]);
    }

    #[test]
    fn test_even_split_across_all_months() {
        let mut model = AllocationModel::new([]);
        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::AllMonths,
            Money::from_rupees(1_200_000),
        )
        .unwrap();

        for month in 1..=12 {
            assert_eq!(
                model.amount(TargetEntity::Office, month),
                Money::from_rupees(100_000),
                "month {}",
                month
            );
        }
        assert_eq!(
            model.entity_total(TargetEntity::Office),
            Money::from_rupees(1_200_000)
        );
    }

    #[test]
    fn test_uneven_split_puts_remainder_in_march() {
        let mut model = AllocationModel::new([]);
        let total = Money::from_paise(1_000);
        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::AllMonths,
            total,
        )
        .unwrap();

        // 1000 / 12 = 83 paise with 4 left over for March
        for month in [4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2] {
            assert_eq!(model.amount(TargetEntity::Office, month).paise(), 83);
        }
        assert_eq!(model.amount(TargetEntity::Office, 3).paise(), 87);
        assert_eq!(model.entity_total(TargetEntity::Office), total);
    }

    #[test]
    fn test_all_months_split_replaces_prior_values() {
        let mut model = AllocationModel::new([]);
        model
            .set_month(TargetEntity::Office, 6, Money::from_rupees(999))
            .unwrap();

        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::AllMonths,
            Money::from_rupees(120),
        )
        .unwrap();

        assert_eq!(model.amount(TargetEntity::Office, 6), Money::from_rupees(10));
    }

    #[test]
    fn test_zero_total_zeroes_the_scope() {
        let mut model = AllocationModel::new([]);
        model
            .set_month(TargetEntity::Office, 6, Money::from_rupees(999))
            .unwrap();

        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::AllMonths,
            Money::zero(),
        )
        .unwrap();
        assert_eq!(model.entity_total(TargetEntity::Office), Money::zero());
    }

    #[test]
    fn test_single_month_leaves_others_untouched() {
        let mut model = AllocationModel::new([]);
        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::AllMonths,
            Money::from_rupees(1_200),
        )
        .unwrap();

        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::SingleMonth(6),
            Money::from_rupees(777),
        )
        .unwrap();

        assert_eq!(model.amount(TargetEntity::Office, 6), Money::from_rupees(777));
        for month in (1..=12).filter(|m| *m != 6) {
            assert_eq!(
                model.amount(TargetEntity::Office, month),
                Money::from_rupees(100),
                "month {}",
                month
            );
        }
    }

    #[test]
    fn test_single_month_on_fresh_model() {
        let mut model = AllocationModel::new([]);
        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::SingleMonth(6),
            Money::from_rupees(50_000),
        )
        .unwrap();

        assert_eq!(model.amount(TargetEntity::Office, 6), Money::from_rupees(50_000));
        for month in (1..=12).filter(|m| *m != 6) {
            assert!(model.amount(TargetEntity::Office, month).is_zero());
        }
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let mut model = AllocationModel::new([]);
        let err = distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::AllMonths,
            Money::from_rupees(-12),
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(model.entity_total(TargetEntity::Office), Money::zero());
    }
}
