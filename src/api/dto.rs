// ==========================================
// DOI Dashboard - Report DTOs
// ==========================================
// Serializable view contracts consumed by the external UI layer.
// Formatting (thousands separators, decimals, cell colors) is the
// renderer's job; DTOs carry the numbers.
// ==========================================

use crate::domain::record::ReplenishmentRecord;
use crate::domain::types::{LogicVariant, Verdict};
use crate::engine::aggregation::VendorComparisonGroup;
use chrono::NaiveDate;
use serde::Serialize;

// ==========================================
// OOS projection - vendor comparison
// ==========================================

/// One row of the vendor comparison table (one logic).
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub logic: LogicVariant,
    pub coverage: Option<NaiveDate>,
    pub new_rl_qty: f64,
    pub new_rl_value: f64,
    pub new_doi_policy_wh: f64,
    pub landed_doi: f64,
    pub verdict: Verdict,
    /// Retained but hidden by default in the rendered table.
    pub landed_doi_minus_ji: f64,
    pub jarak_inbound: i64,
}

impl From<&VendorComparisonGroup> for ComparisonRow {
    fn from(group: &VendorComparisonGroup) -> Self {
        ComparisonRow {
            logic: group.logic,
            coverage: group.max_coverage,
            new_rl_qty: group.sum_rl_qty,
            new_rl_value: group.sum_rl_value,
            new_doi_policy_wh: group.mean_doi_policy_wh,
            landed_doi: group.mean_landed_doi,
            verdict: group.verdict,
            landed_doi_minus_ji: group.mean_landed_doi_minus_ji,
            jarak_inbound: group.min_jarak_inbound,
        }
    }
}

/// Vendor comparison view. `rows` empty means the selection matched
/// nothing; the renderer shows a warning instead of a table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub vendor_id: i64,
    pub vendor_display: String,
    pub rows: Vec<ComparisonRow>,
}

// ==========================================
// OOS projection - product view
// ==========================================

/// One raw per-logic row of the product view. No verdict: the raw
/// view deliberately has none.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    pub logic: LogicVariant,
    pub product_id: String,
    pub product_name: String,
    pub vendor_display: String,
    pub location_id: String,
    pub ship_date: Option<NaiveDate>,
    pub coverage: Option<NaiveDate>,
    pub new_doi_policy_wh: f64,
    pub new_rl_qty: f64,
    pub new_rl_value: f64,
    pub landed_doi: i64,
    pub jarak_inbound: i64,
}

impl From<&ReplenishmentRecord> for ProductRow {
    fn from(rec: &ReplenishmentRecord) -> Self {
        ProductRow {
            logic: rec.logic,
            product_id: rec.product_id.clone(),
            product_name: rec.product_name.clone(),
            vendor_display: rec.vendor_display(),
            location_id: rec.location_id.clone(),
            ship_date: rec.ship_date,
            coverage: rec.coverage,
            new_doi_policy_wh: rec.new_doi_policy_wh,
            new_rl_qty: rec.new_rl_qty,
            new_rl_value: rec.new_rl_value,
            landed_doi: rec.landed_doi,
            jarak_inbound: rec.jarak_inbound,
        }
    }
}

// ==========================================
// Inbound quantity simulation
// ==========================================

/// Headline figures of the simulation page for the selected logic.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub logic: LogicVariant,
    pub total_rl_qty: f64,
    pub total_sku_tidak_aman: usize,
}

/// One row of the frequent-vendor delivery schedule table.
#[derive(Debug, Clone, Serialize)]
pub struct VendorScheduleRow {
    pub primary_vendor_name: String,
    pub inbound_days: Vec<String>,
    pub sum_rl_qty: f64,
    pub first_ship_date: NaiveDate,
    pub rl_qty_per_freq: i64,
}

// ==========================================
// Selector options
// ==========================================

/// Generic (value, label) pair for the UI selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

// ==========================================
// Logic catalog
// ==========================================

/// Static description of one replenishment logic, shown as a footer
/// table on both report pages.
#[derive(Debug, Clone, Serialize)]
pub struct LogicCatalogEntry {
    pub logic: LogicVariant,
    pub details: &'static str,
}

/// The four logic descriptions as published by the replenishment team.
pub fn logic_catalog() -> Vec<LogicCatalogEntry> {
    vec![
        LogicCatalogEntry {
            logic: LogicVariant::A,
            details: "cov sesuai RL everyday, dynamic DOI 50% * JI",
        },
        LogicCatalogEntry {
            logic: LogicVariant::B,
            details: "cov sesuai RL everyday, dynamic DOI JI",
        },
        LogicCatalogEntry {
            logic: LogicVariant::C,
            details: "cov sesuai RL everyday, dynamic DOI JI*FR Performance weight",
        },
        LogicCatalogEntry {
            logic: LogicVariant::D,
            details: "cov 14 Days, DOI Policy 5",
        },
    ]
}
