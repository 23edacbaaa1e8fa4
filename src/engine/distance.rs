// ==========================================
// DOI Dashboard - Distance Enricher
// ==========================================
// Left-joins the merged record set with the inbound-distance
// reference on product_id (string compare on both sides) and
// computes Landed DOI - JI.
// ==========================================

use crate::domain::record::{DistanceReference, ReplenishmentRecord};

pub struct DistanceEnricher;

impl DistanceEnricher {
    /// Fill `jarak_inbound` and `landed_doi_minus_ji` on every record.
    ///
    /// Products absent from the reference get the business default of
    /// 7 days. The difference may go negative; negative values are
    /// meaningful (inbound lands after coverage runs out) and are
    /// never clamped.
    pub fn apply(records: &mut [ReplenishmentRecord], reference: &DistanceReference) {
        for record in records.iter_mut() {
            record.jarak_inbound = reference.days_for(&record.product_id);
            record.landed_doi_minus_ji = record.landed_doi - record.jarak_inbound;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{LogicVariant, Pareto};

    fn rec(product_id: &str, landed_doi: i64) -> ReplenishmentRecord {
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
            landed_doi,
            jarak_inbound: DistanceReference::DEFAULT_DAYS,
            landed_doi_minus_ji: 0,
            logic: LogicVariant::A,
        }
    }

    #[test]
    fn test_enricher_joins_and_derives() {
        let mut reference = DistanceReference::new();
        reference.insert("001", 3);

        let mut records = vec![rec("001", 8), rec("999", 4)];
        DistanceEnricher::apply(&mut records, &reference);

        assert_eq!(records[0].jarak_inbound, 3);
        assert_eq!(records[0].landed_doi_minus_ji, 5);
        // absent product: default 7
        assert_eq!(records[1].jarak_inbound, 7);
        assert_eq!(records[1].landed_doi_minus_ji, -3);
    }

    #[test]
    fn test_negative_difference_not_clamped() {
        let mut reference = DistanceReference::new();
        reference.insert("001", 10);

        let mut records = vec![rec("001", 2)];
        DistanceEnricher::apply(&mut records, &reference);

        assert_eq!(records[0].landed_doi_minus_ji, -8);
    }
}
