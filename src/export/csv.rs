//! CSV export of a materialized target batch
//!
//! One row per record; amounts are written as plain decimal rupees and the
//! checkpost column is empty for overall and office records.

use std::io::Write;

use crate::error::{TargetError, TargetResult};
use crate::models::NewTargetRecord;

/// Write a batch of target records as CSV
pub fn export_batch_csv<W: Write>(batch: &[NewTargetRecord], writer: W) -> TargetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "year",
            "month",
            "type",
            "committeeId",
            "checkpostId",
            "marketFeeTarget",
            "setBy",
        ])
        .map_err(|e| TargetError::Export(e.to_string()))?;

    for record in batch {
        csv_writer
            .write_record([
                record.year.to_string(),
                record.month.to_string(),
                record.record_type.wire_name().to_string(),
                record.committee_id.as_uuid().to_string(),
                record
                    .checkpost_id
                    .map(|id| id.as_uuid().to_string())
                    .unwrap_or_default(),
                record.market_fee_target.format_plain(),
                record.set_by.clone(),
            ])
            .map_err(|e| TargetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TargetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckpostId, CommitteeId, Money, TargetRecordType};

    #[test]
    fn test_export_batch_csv() {
        let committee_id = CommitteeId::new();
        let checkpost_id = CheckpostId::new();
        let batch = vec![
            NewTargetRecord {
                year: 2024,
                month: 4,
                committee_id,
                checkpost_id: None,
                market_fee_target: Money::from_rupees(15_000),
                set_by: "admin".into(),
                record_type: TargetRecordType::OverallCommittee,
            },
            NewTargetRecord {
                year: 2024,
                month: 4,
                committee_id,
                checkpost_id: Some(checkpost_id),
                market_fee_target: Money::from_rupees(5_000),
                set_by: "admin".into(),
                record_type: TargetRecordType::Checkpost,
            },
        ];

        let mut buffer = Vec::new();
        export_batch_csv(&batch, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "year,month,type,committeeId,checkpostId,marketFeeTarget,setBy"
        );
        assert!(lines[1].starts_with("2024,4,OVERALL_COMMITTEE,"));
        assert!(lines[1].contains(",15000.00,admin"));
        assert!(lines[2].contains(&checkpost_id.as_uuid().to_string()));
    }

    #[test]
    fn test_export_empty_batch_writes_header_only() {
        let mut buffer = Vec::new();
        export_batch_csv(&[], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
