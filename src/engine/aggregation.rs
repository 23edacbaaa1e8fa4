// ==========================================
// DOI Dashboard - Aggregation / Filter Engine
// ==========================================
// Pure functions of (dataset snapshot, selection). Nothing here
// mutates the dataset; an empty selection yields an empty result,
// never an error.
// ==========================================

use crate::domain::record::ReplenishmentRecord;
use crate::domain::types::{LogicVariant, Pareto, Verdict, SAFE_LANDED_DOI};
use crate::engine::dataset::Dataset;
use crate::engine::{nan_mean, nan_sum};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

// ==========================================
// Vendor comparison view
// ==========================================

/// One aggregated (vendor, logic) group of the comparison view.
#[derive(Debug, Clone, Serialize)]
pub struct VendorComparisonGroup {
    pub vendor_id: i64,
    pub primary_vendor_name: String,
    pub logic: LogicVariant,
    pub sum_rl_qty: f64,
    pub sum_rl_value: f64,
    pub max_coverage: Option<NaiveDate>,
    pub mean_doi_policy_wh: f64,
    pub mean_landed_doi: f64,
    /// Computed but not shown by default in the comparison table.
    pub mean_landed_doi_minus_ji: f64,
    pub min_jarak_inbound: i64,
    pub verdict: Verdict,
}

/// Aggregate the selected vendor's rows per logic.
///
/// Rows with `vendor_id == 0` are excluded before selection, and rows
/// without a parsable coverage date are dropped before aggregation
/// (both upstream conventions). The verdict comes from the group's
/// *mean* landed DOI against the safety threshold. An unknown vendor
/// id simply yields an empty vec; the consumer decides how to warn.
pub fn vendor_comparison(dataset: &Dataset, vendor_id: i64) -> Vec<VendorComparisonGroup> {
    struct Acc {
        vendor_id: i64,
        vendor_name: String,
        logic: LogicVariant,
        qty: Vec<f64>,
        value: Vec<f64>,
        coverage: Vec<NaiveDate>,
        doi_policy: Vec<f64>,
        landed_doi: Vec<f64>,
        landed_doi_minus_ji: Vec<f64>,
        jarak_inbound: Vec<i64>,
    }

    let mut groups: BTreeMap<(u8, i64, String), Acc> = BTreeMap::new();

    for rec in dataset.records() {
        if rec.vendor_id == 0 || rec.vendor_id != vendor_id {
            continue;
        }
        if rec.coverage.is_none() {
            continue;
        }

        let key = (rec.logic.rank(), rec.vendor_id, rec.primary_vendor_name.clone());
        let acc = groups.entry(key).or_insert_with(|| Acc {
            vendor_id: rec.vendor_id,
            vendor_name: rec.primary_vendor_name.clone(),
            logic: rec.logic,
            qty: Vec::new(),
            value: Vec::new(),
            coverage: Vec::new(),
            doi_policy: Vec::new(),
            landed_doi: Vec::new(),
            landed_doi_minus_ji: Vec::new(),
            jarak_inbound: Vec::new(),
        });

        acc.qty.push(rec.new_rl_qty);
        acc.value.push(rec.new_rl_value);
        if let Some(cov) = rec.coverage {
            acc.coverage.push(cov);
        }
        acc.doi_policy.push(rec.new_doi_policy_wh);
        acc.landed_doi.push(rec.landed_doi as f64);
        acc.landed_doi_minus_ji.push(rec.landed_doi_minus_ji as f64);
        acc.jarak_inbound.push(rec.jarak_inbound);
    }

    // BTreeMap iteration already yields logic-rank order
    groups
        .into_values()
        .map(|acc| {
            let mean_landed_doi = nan_mean(&acc.landed_doi);
            VendorComparisonGroup {
                vendor_id: acc.vendor_id,
                primary_vendor_name: acc.vendor_name,
                logic: acc.logic,
                sum_rl_qty: nan_sum(&acc.qty),
                sum_rl_value: nan_sum(&acc.value),
                max_coverage: acc.coverage.iter().max().copied(),
                mean_doi_policy_wh: nan_mean(&acc.doi_policy),
                mean_landed_doi,
                mean_landed_doi_minus_ji: nan_mean(&acc.landed_doi_minus_ji),
                min_jarak_inbound: acc.jarak_inbound.iter().min().copied().unwrap_or(0),
                verdict: Verdict::from_landed_doi(mean_landed_doi),
            }
        })
        .collect()
}

// ==========================================
// Product view
// ==========================================

/// Raw per-logic rows for one product, no aggregation and no verdict.
///
/// Unlike the vendor view, rows with `vendor_id == 0` are NOT
/// excluded here; the two views intentionally diverge on that point.
pub fn product_rows<'a>(dataset: &'a Dataset, product_id: &str) -> Vec<&'a ReplenishmentRecord> {
    dataset
        .records()
        .iter()
        .filter(|rec| rec.product_id == product_id)
        .collect()
}

// ==========================================
// Inbound simulation filters
// ==========================================

/// Filter selection of the inbound-simulation view.
///
/// Applied in order: Pareto membership (multi-select, OR semantics),
/// exact business-tag equality, then exact logic equality for the
/// final quantity/threshold computations.
#[derive(Debug, Clone)]
pub struct SimulationFilter {
    pub paretos: Vec<Pareto>,
    pub business_tag: Option<String>,
    pub logic: LogicVariant,
}

impl SimulationFilter {
    pub fn new(logic: LogicVariant) -> Self {
        Self {
            paretos: Vec::new(),
            business_tag: None,
            logic,
        }
    }

    fn matches_classification(&self, rec: &ReplenishmentRecord) -> bool {
        if !self.paretos.is_empty() && !self.paretos.contains(&rec.pareto) {
            return false;
        }
        if let Some(tag) = &self.business_tag {
            if &rec.business_tagging != tag {
                return false;
            }
        }
        true
    }

    /// Rows passing the Pareto and business-tag filters (all logics).
    pub fn classification_rows<'a>(&self, dataset: &'a Dataset) -> Vec<&'a ReplenishmentRecord> {
        dataset
            .records()
            .iter()
            .filter(|rec| self.matches_classification(rec))
            .collect()
    }

    /// Rows additionally restricted to the selected logic.
    pub fn logic_rows<'a>(&self, dataset: &'a Dataset) -> Vec<&'a ReplenishmentRecord> {
        dataset
            .records()
            .iter()
            .filter(|rec| rec.logic == self.logic && self.matches_classification(rec))
            .collect()
    }
}

/// Total recommended quantity over the logic-filtered set.
pub fn total_rl_qty(rows: &[&ReplenishmentRecord]) -> f64 {
    nan_sum(rows.iter().map(|r| r.new_rl_qty))
}

/// Count of at-risk SKUs (landed DOI below the safety threshold)
/// in the logic-filtered set.
pub fn total_sku_tidak_aman(rows: &[&ReplenishmentRecord]) -> usize {
    rows.iter()
        .filter(|r| (r.landed_doi as f64) < SAFE_LANDED_DOI)
        .count()
}

/// The exportable at-risk product list, sorted by logic rank.
pub fn tidak_aman_rows<'a>(rows: &[&'a ReplenishmentRecord]) -> Vec<&'a ReplenishmentRecord> {
    let mut at_risk: Vec<&ReplenishmentRecord> = rows
        .iter()
        .copied()
        .filter(|r| (r.landed_doi as f64) < SAFE_LANDED_DOI)
        .collect();
    at_risk.sort_by_key(|r| r.logic.rank());
    at_risk
}
