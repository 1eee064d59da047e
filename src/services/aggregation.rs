//! Aggregation engine
//!
//! Pure read-side totals over the allocation model. Every function recomputes
//! from the model on each call; nothing here caches, since the model can be
//! mutated both by direct month edits and by distribution writes.

use crate::models::Money;
use crate::services::allocation::{AllocationModel, TargetEntity};
use crate::services::distribution::DistributionScope;

/// Annual total of the committee office
pub fn office_total(model: &AllocationModel) -> Money {
    model.entity_total(TargetEntity::Office)
}

/// Annual total across all checkposts
pub fn checkposts_total(model: &AllocationModel) -> Money {
    model
        .checkpost_ids()
        .map(|id| model.entity_total(TargetEntity::Checkpost(id)))
        .sum()
}

/// Annual total of the whole committee: office plus all checkposts
pub fn grand_total(model: &AllocationModel) -> Money {
    office_total(model) + checkposts_total(model)
}

/// One month's total across office and all checkposts
pub fn month_total(model: &AllocationModel, month: u32) -> Money {
    let checkposts: Money = model
        .checkpost_ids()
        .map(|id| model.amount(TargetEntity::Checkpost(id), month))
        .sum();
    model.amount(TargetEntity::Office, month) + checkposts
}

/// The headline total for a scope: the grand total for all-months, the
/// month total for a single month
pub fn scope_total(model: &AllocationModel, scope: DistributionScope) -> Money {
    match scope {
        DistributionScope::AllMonths => grand_total(model),
        DistributionScope::SingleMonth(month) => month_total(model, month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Checkpost, CheckpostId, Committee};
    use crate::services::distribution::distribute;

    fn committee_with_two_checkposts() -> Committee {
        let mut committee = Committee::new("Test Mandi");
        for name in ["A", "B"] {
            committee.checkposts.push(Checkpost {
                id: CheckpostId::new(),
                name: name.into(),
            });
        }
        committee
    }

    #[test]
    fn test_totals_over_empty_model() {
        let model = AllocationModel::new([]);
        assert!(office_total(&model).is_zero());
        assert!(checkposts_total(&model).is_zero());
        assert!(grand_total(&model).is_zero());
        assert!(month_total(&model, 4).is_zero());
    }

    #[test]
    fn test_month_total_sums_office_and_checkposts() {
        let committee = committee_with_two_checkposts();
        let mut model = AllocationModel::for_committee(&committee);
        let a = TargetEntity::Checkpost(committee.checkposts[0].id);
        let b = TargetEntity::Checkpost(committee.checkposts[1].id);

        model
            .set_month(TargetEntity::Office, 4, Money::from_rupees(10_000))
            .unwrap();
        model.set_month(a, 4, Money::from_rupees(5_000)).unwrap();
        model.set_month(b, 4, Money::zero()).unwrap();

        assert_eq!(month_total(&model, 4), Money::from_rupees(15_000));
        assert_eq!(office_total(&model), Money::from_rupees(10_000));
        assert_eq!(checkposts_total(&model), Money::from_rupees(5_000));
        assert_eq!(grand_total(&model), Money::from_rupees(15_000));
    }

    #[test]
    fn test_month_total_invariant_after_mixed_edits() {
        let committee = committee_with_two_checkposts();
        let mut model = AllocationModel::for_committee(&committee);
        let a = TargetEntity::Checkpost(committee.checkposts[0].id);
        let b = TargetEntity::Checkpost(committee.checkposts[1].id);

        distribute(
            &mut model,
            TargetEntity::Office,
            DistributionScope::AllMonths,
            Money::from_rupees(120_000),
        )
        .unwrap();
        distribute(
            &mut model,
            a,
            DistributionScope::SingleMonth(7),
            Money::from_rupees(9_999),
        )
        .unwrap();
        model.set_month(b, 7, Money::from_rupees(1)).unwrap();
        model
            .set_month(TargetEntity::Office, 2, Money::from_rupees(42))
            .unwrap();

        for month in 1..=12 {
            let expected = model.amount(TargetEntity::Office, month)
                + model.amount(a, month)
                + model.amount(b, month);
            assert_eq!(month_total(&model, month), expected, "month {}", month);
        }
    }

    #[test]
    fn test_aggregates_track_every_mutation() {
        // Totals are recomputed per call, so a later edit must be visible
        // through the same model reference.
        let mut model = AllocationModel::new([]);
        assert!(grand_total(&model).is_zero());

        model
            .set_month(TargetEntity::Office, 9, Money::from_rupees(777))
            .unwrap();
        assert_eq!(grand_total(&model), Money::from_rupees(777));

        model
            .set_month(TargetEntity::Office, 9, Money::from_rupees(1))
            .unwrap();
        assert_eq!(grand_total(&model), Money::from_rupees(1));
    }

    #[test]
    fn test_scope_total() {
        let mut model = AllocationModel::new([]);
        model
            .set_month(TargetEntity::Office, 4, Money::from_rupees(10))
            .unwrap();
        model
            .set_month(TargetEntity::Office, 5, Money::from_rupees(20))
            .unwrap();

        assert_eq!(
            scope_total(&model, DistributionScope::AllMonths),
            Money::from_rupees(30)
        );
        assert_eq!(
            scope_total(&model, DistributionScope::SingleMonth(5)),
            Money::from_rupees(20)
        );
        assert!(scope_total(&model, DistributionScope::SingleMonth(6)).is_zero());
    }
}
