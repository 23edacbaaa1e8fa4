// ==========================================
// DOI Dashboard - At-Risk List Export
// ==========================================
// Writes the "Tidak Aman" product list of the selected logic as a
// downloadable CSV with the published column set.
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::record::ReplenishmentRecord;
use std::io::Write;

/// Suggested download filename for the at-risk list.
pub const TIDAK_AMAN_FILENAME: &str = "tidakamanlist.csv";

/// Published column order of the export.
const EXPORT_COLUMNS: [&str; 9] = [
    "Logic",
    "product_id",
    "product_name",
    "Pareto",
    "primary_vendor_name",
    "New RL Qty",
    "New RL Value",
    "New DOI Policy WH",
    "Landed DOI",
];

/// NaN cells export as empty, matching the source-export convention.
fn num_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write the at-risk rows as CSV to any sink.
pub fn write_tidak_aman_csv<W: Write>(rows: &[&ReplenishmentRecord], writer: W) -> ApiResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_COLUMNS)?;

    for rec in rows {
        csv_writer.write_record([
            rec.logic.label().to_string(),
            rec.product_id.clone(),
            rec.product_name.clone(),
            rec.pareto.label().to_string(),
            rec.primary_vendor_name.clone(),
            num_cell(rec.new_rl_qty),
            num_cell(rec.new_rl_value),
            num_cell(rec.new_doi_policy_wh),
            rec.landed_doi.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::DistanceReference;
    use crate::domain::types::{LogicVariant, Pareto};

    fn rec(product_id: &str, logic: LogicVariant) -> ReplenishmentRecord {
        ReplenishmentRecord {
            product_id: product_id.to_string(),
            product_name: "Gula 1kg".to_string(),
            vendor_id: 42,
            primary_vendor_name: "PT Sumber".to_string(),
            location_id: "WH1".to_string(),
            business_tagging: "Core".to_string(),
            pareto: Pareto::NewSkuB,
            ship_date: None,
            coverage: None,
            new_doi_policy_wh: 6.5,
            new_rl_qty: 100.0,
            new_rl_value: 12345.0,
            landed_doi: 3,
            jarak_inbound: DistanceReference::DEFAULT_DAYS,
            landed_doi_minus_ji: -4,
            logic,
        }
    }

    #[test]
    fn test_export_header_and_row() {
        let row = rec("00123", LogicVariant::C);
        let rows = vec![&row];

        let mut out = Vec::new();
        write_tidak_aman_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Logic,product_id,product_name,Pareto,primary_vendor_name,New RL Qty,New RL Value,New DOI Policy WH,Landed DOI"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Logic C,00123,Gula 1kg,New SKU B,PT Sumber,100,12345,6.5,3"
        );
    }

    #[test]
    fn test_export_nan_as_empty_cell() {
        let mut row = rec("00123", LogicVariant::A);
        row.new_rl_value = f64::NAN;
        let rows = vec![&row];

        let mut out = Vec::new();
        write_tidak_aman_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.lines().nth(1).unwrap().contains(",100,,6.5,3"));
    }
}
