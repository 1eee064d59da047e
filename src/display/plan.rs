//! Planning grid and batch formatting
//!
//! Renders the per-month, per-entity allocation grid in fiscal order and a
//! one-line-per-record view of a materialized batch.

use crate::models::{
    month_name, ordered_fiscal_months, Committee, FinancialYear, Money, NewTargetRecord,
    TargetRecordType,
};
use crate::services::aggregation::{grand_total, month_total, office_total};
use crate::services::{PlanningSession, TargetEntity};

const AMOUNT_WIDTH: usize = 16;

fn amount_cell(amount: Money) -> String {
    format!("{:>width$}", amount.to_string(), width = AMOUNT_WIDTH)
}

/// Format the full allocation grid for a session: one row per fiscal month,
/// one column per entity, committee-wide overall at the right, and an annual
/// totals row at the bottom
pub fn format_plan_grid(session: &PlanningSession) -> String {
    let committee = session.committee();
    let model = session.model();
    let year = session.year();

    let mut output = String::new();
    output.push_str(&format!(
        "Target plan: {}, FY {}\n",
        committee.name, year
    ));

    // Header
    let mut header = format!("{:<10} {:<5}", "Month", "Year");
    header.push_str(&format!("{:>width$}", "Office", width = AMOUNT_WIDTH));
    for cp in &committee.checkposts {
        let name: String = cp.name.chars().take(AMOUNT_WIDTH - 1).collect();
        header.push_str(&format!("{:>width$}", name, width = AMOUNT_WIDTH));
    }
    header.push_str(&format!("{:>width$}", "Overall", width = AMOUNT_WIDTH));
    let width = header.len();
    output.push_str(&header);
    output.push('\n');
    output.push_str(&"-".repeat(width));
    output.push('\n');

    // One row per fiscal month
    for month in ordered_fiscal_months() {
        let mut row = format!(
            "{:<10} {:<5}",
            month_name(month),
            year.calendar_year(month)
        );
        row.push_str(&amount_cell(model.amount(TargetEntity::Office, month)));
        for cp in &committee.checkposts {
            row.push_str(&amount_cell(
                model.amount(TargetEntity::Checkpost(cp.id), month),
            ));
        }
        row.push_str(&amount_cell(month_total(model, month)));
        output.push_str(&row);
        output.push('\n');
    }

    // Annual totals
    output.push_str(&"-".repeat(width));
    output.push('\n');
    let mut totals = format!("{:<10} {:<5}", "Total", "");
    totals.push_str(&amount_cell(office_total(model)));
    for cp in &committee.checkposts {
        totals.push_str(&amount_cell(
            model.entity_total(TargetEntity::Checkpost(cp.id)),
        ));
    }
    totals.push_str(&amount_cell(grand_total(model)));
    output.push_str(&totals);
    output.push('\n');

    output.push_str(&format!(
        "\nHeadline total ({}): {}\n",
        session.scope(),
        session.headline_total()
    ));

    output
}

/// Format a materialized batch, one record per line
pub fn format_batch(batch: &[NewTargetRecord], committee: &Committee) -> String {
    if batch.is_empty() {
        return "No records to submit (all amounts in scope are zero).".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Records to submit ({}):\n", batch.len()));

    for record in batch {
        let entity = match record.record_type {
            TargetRecordType::Checkpost => record
                .checkpost_id
                .and_then(|id| committee.checkpost(id))
                .map(|cp| format!("Checkpost '{}'", cp.name))
                .unwrap_or_else(|| "Checkpost".to_string()),
            other => other.description().to_string(),
        };

        output.push_str(&format!(
            "  {:4}-{:02} {:<28} {:>16} (set by {})\n",
            record.year,
            record.month,
            entity,
            record.market_fee_target.to_string(),
            record.set_by
        ));
    }

    output
}

/// Format the fiscal calendar of a financial year: month order with
/// resolved calendar years
pub fn format_fiscal_calendar(year: FinancialYear) -> String {
    let mut output = String::new();
    output.push_str(&format!("Financial year {}\n", year));
    for (position, month) in ordered_fiscal_months().into_iter().enumerate() {
        output.push_str(&format!(
            "  {:>2}. {:<10} {}\n",
            position + 1,
            month_name(month),
            year.calendar_year(month)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Checkpost, CheckpostId};
    use crate::services::DistributionScope;

    fn session() -> PlanningSession {
        let mut committee = Committee::new("Indore Mandi");
        committee.checkposts.push(Checkpost {
            id: CheckpostId::new(),
            name: "East Gate".into(),
        });
        PlanningSession::new(committee, FinancialYear::new(2024), "admin").unwrap()
    }

    #[test]
    fn test_grid_contains_fiscal_ordered_months() {
        let output = format_plan_grid(&session());
        let april = output.find("April").unwrap();
        let march = output.find("March").unwrap();
        let january = output.find("January").unwrap();
        assert!(april < january && january < march);
        assert!(output.contains("Indore Mandi"));
        assert!(output.contains("East Gate"));
    }

    #[test]
    fn test_grid_shows_headline_total() {
        let mut session = session();
        session
            .set_month(TargetEntity::Office, 6, Money::from_rupees(100))
            .unwrap();
        let output = format_plan_grid(&session);
        assert!(output.contains("Headline total (all months): ₹100.00"));
    }

    #[test]
    fn test_batch_listing_names_checkposts() {
        let mut session = session();
        let cp = session.committee().checkposts[0].id;
        session
            .set_month(TargetEntity::Checkpost(cp), 4, Money::from_rupees(5_000))
            .unwrap();
        session.set_scope(DistributionScope::single_month(4).unwrap());

        let batch = session.materialize();
        let output = format_batch(&batch, session.committee());
        assert!(output.contains("Checkpost 'East Gate'"));
        assert!(output.contains("Overall committee"));
        assert!(output.contains("2024-04"));
    }

    #[test]
    fn test_empty_batch_message() {
        let session = session();
        let output = format_batch(&session.materialize(), session.committee());
        assert!(output.contains("No records to submit"));
    }

    #[test]
    fn test_fiscal_calendar_rolls_over_in_january() {
        let output = format_fiscal_calendar(FinancialYear::new(2024));
        assert!(output.contains("April      2024"));
        assert!(output.contains("January    2025"));
        assert!(output.contains("March      2025"));
    }
}
