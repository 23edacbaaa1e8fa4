// ==========================================
// DOI Dashboard - Logic Merger
// ==========================================
// Concatenates the per-logic tables into one record set with the
// canonical ordering: product_id ascending, then logic rank A < D.
// Cell coercion (coverage dates, comma-separated RL values) already
// happened in the typed parsing layer.
// ==========================================

use crate::domain::record::ReplenishmentRecord;
use crate::importer::source_loader::LogicTable;

/// Merge all loaded logic tables into one sorted record set.
///
/// The sort is stable, so for equal `(product_id, logic)` the source
/// file order is preserved.
pub fn merge_logics(tables: Vec<LogicTable>) -> Vec<ReplenishmentRecord> {
    let mut records: Vec<ReplenishmentRecord> = tables
        .into_iter()
        .flat_map(|table| table.records)
        .collect();

    records.sort_by(|a, b| {
        a.product_id
            .cmp(&b.product_id)
            .then(a.logic.rank().cmp(&b.logic.rank()))
    });

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::DistanceReference;
    use crate::domain::types::{LogicVariant, Pareto};

    fn rec(product_id: &str, logic: LogicVariant) -> ReplenishmentRecord {
        ReplenishmentRecord {
            product_id: product_id.to_string(),
            product_name: String::new(),
            vendor_id: 1,
            primary_vendor_name: "V".to_string(),
            location_id: "WH1".to_string(),
            business_tagging: String::new(),
            pareto: Pareto::A,
            ship_date: None,
            coverage: None,
            new_doi_policy_wh: 0.0,
            new_rl_qty: 0.0,
            new_rl_value: 0.0,
            landed_doi: 0,
            jarak_inbound: DistanceReference::DEFAULT_DAYS,
            landed_doi_minus_ji: -DistanceReference::DEFAULT_DAYS,
            logic,
        }
    }

    fn table(logic: LogicVariant, product_ids: &[&str]) -> LogicTable {
        LogicTable {
            logic,
            records: product_ids.iter().map(|p| rec(p, logic)).collect(),
        }
    }

    #[test]
    fn test_merge_sorts_by_product_then_logic_rank() {
        let tables = vec![
            table(LogicVariant::D, &["002", "001"]),
            table(LogicVariant::A, &["002", "001"]),
            table(LogicVariant::B, &["001"]),
        ];

        let merged = merge_logics(tables);
        let keys: Vec<(String, LogicVariant)> = merged
            .into_iter()
            .map(|r| (r.product_id, r.logic))
            .collect();

        assert_eq!(
            keys,
            vec![
                ("001".to_string(), LogicVariant::A),
                ("001".to_string(), LogicVariant::B),
                ("001".to_string(), LogicVariant::D),
                ("002".to_string(), LogicVariant::A),
                ("002".to_string(), LogicVariant::D),
            ]
        );
    }

    #[test]
    fn test_merge_is_deterministic() {
        let make = || {
            vec![
                table(LogicVariant::C, &["003", "001"]),
                table(LogicVariant::A, &["002"]),
            ]
        };
        let first: Vec<_> = merge_logics(make())
            .into_iter()
            .map(|r| (r.product_id, r.logic))
            .collect();
        let second: Vec<_> = merge_logics(make())
            .into_iter()
            .map(|r| (r.product_id, r.logic))
            .collect();
        assert_eq!(first, second);
    }
}
