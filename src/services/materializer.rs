//! Record materializer
//!
//! One-shot terminal transform of the allocation model into the batch of
//! persistable records: per month an overall-committee record, an office
//! record, and one record per checkpost, each emitted only when its amount
//! is strictly positive. A committee, month, or entity with no target
//! produces no record rather than a zero-valued one.

use crate::models::{CommitteeId, FinancialYear, NewTargetRecord, TargetRecordType};
use crate::services::aggregation::month_total;
use crate::services::allocation::{AllocationModel, TargetEntity};
use crate::services::distribution::DistributionScope;

/// Materialize the persistable batch for a scope.
///
/// Months are processed in fiscal order; each record's calendar year is
/// resolved from the financial year. An all-zero scope yields an empty
/// batch, which is still a valid submission.
pub fn materialize(
    model: &AllocationModel,
    scope: DistributionScope,
    year: FinancialYear,
    committee_id: CommitteeId,
    set_by: &str,
) -> Vec<NewTargetRecord> {
    let mut batch = Vec::new();

    for month in scope.months() {
        let calendar_year = year.calendar_year(month);

        let record = |record_type, checkpost_id, amount| NewTargetRecord {
            year: calendar_year,
            month,
            committee_id,
            checkpost_id,
            market_fee_target: amount,
            set_by: set_by.to_string(),
            record_type,
        };

        let overall = month_total(model, month);
        if overall.is_positive() {
            batch.push(record(TargetRecordType::OverallCommittee, None, overall));
        }

        let office = model.amount(TargetEntity::Office, month);
        if office.is_positive() {
            batch.push(record(TargetRecordType::CommitteeOffice, None, office));
        }

        for id in model.checkpost_ids() {
            let amount = model.amount(TargetEntity::Checkpost(id), month);
            if amount.is_positive() {
                batch.push(record(TargetRecordType::Checkpost, Some(id), amount));
            }
        }
    }

    batch
}
