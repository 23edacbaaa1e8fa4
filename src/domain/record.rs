// ==========================================
// DOI Dashboard - Domain Records
// ==========================================
// One ReplenishmentRecord per (product, vendor, location, logic)
// row of the merged dataset, plus the two reference tables that
// enrich it (inbound distance, vendor frequency)
// ==========================================

use crate::domain::types::{LogicVariant, Pareto};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ReplenishmentRecord
// ==========================================

/// One merged row of the replenishment dataset.
///
/// Numeric fields follow the coercion policy of the typed parsing
/// layer: unparsable `landed_doi` is 0, unparsable quantities and
/// values are NaN, unparsable dates are None. `product_id` is an
/// opaque string so zero-padded codes survive untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentRecord {
    // Identity
    pub product_id: String,
    pub product_name: String,
    pub vendor_id: i64,
    pub primary_vendor_name: String,
    pub location_id: String,

    // Classification
    pub business_tagging: String,
    pub pareto: Pareto,

    // Temporal
    pub ship_date: Option<NaiveDate>,
    pub coverage: Option<NaiveDate>,

    // Logic metrics
    pub new_doi_policy_wh: f64,
    pub new_rl_qty: f64,
    pub new_rl_value: f64,
    pub landed_doi: i64,

    // Enrichment (filled by the distance enricher)
    pub jarak_inbound: i64,
    pub landed_doi_minus_ji: i64,

    // Provenance
    pub logic: LogicVariant,
}

impl ReplenishmentRecord {
    /// Vendor label used by selectors and report tables.
    /// Vendors with the placeholder name "0" show the bare id.
    pub fn vendor_display(&self) -> String {
        if self.primary_vendor_name == "0" {
            self.vendor_id.to_string()
        } else {
            format!("{} - {}", self.vendor_id, self.primary_vendor_name)
        }
    }

    /// Product label used by selectors ("id - name").
    pub fn product_display(&self) -> String {
        format!("{} - {}", self.product_id, self.product_name)
    }
}

// ==========================================
// DistanceReference (Jarak Inbound lookup)
// ==========================================

/// Per-product inbound transit days.
///
/// Products absent from the table resolve to
/// [`DistanceReference::DEFAULT_DAYS`]; that default is a business
/// rule, not a fill value, and lives only here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistanceReference {
    days_by_product: HashMap<String, i64>,
}

impl DistanceReference {
    /// Business default for products with no distance entry.
    pub const DEFAULT_DAYS: i64 = 7;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product_id: impl Into<String>, days: i64) {
        self.days_by_product.insert(product_id.into(), days);
    }

    /// Transit days for a product, falling back to the default.
    pub fn days_for(&self, product_id: &str) -> i64 {
        self.days_by_product
            .get(product_id)
            .copied()
            .unwrap_or(Self::DEFAULT_DAYS)
    }

    pub fn len(&self) -> usize {
        self.days_by_product.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days_by_product.is_empty()
    }
}

// ==========================================
// VendorFrequency (delivery cadence lookup)
// ==========================================

/// Delivery cadence of one frequent vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorFrequencyEntry {
    /// Deliveries per replenishment window.
    pub freq: f64,
    /// Ordered weekday/day labels, e.g. ["Mon", "Wed", "Fri"].
    pub inbound_days: Vec<String>,
}

/// Vendor-name-keyed frequency table. Presence in this table is what
/// classifies a vendor as "Frequent" in the inbound simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorFrequencyTable {
    entries: HashMap<String, VendorFrequencyEntry>,
}

impl VendorFrequencyTable {
    /// Business default for vendors with no frequency entry.
    pub const DEFAULT_FREQ: f64 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vendor_name: impl Into<String>, entry: VendorFrequencyEntry) {
        self.entries.insert(vendor_name.into(), entry);
    }

    pub fn get(&self, vendor_name: &str) -> Option<&VendorFrequencyEntry> {
        self.entries.get(vendor_name)
    }

    /// Whether the vendor is on a fixed delivery cadence.
    pub fn is_frequent(&self, vendor_name: &str) -> bool {
        self.entries.contains_key(vendor_name)
    }

    /// Cadence for a vendor, falling back to the default of 1.
    pub fn freq_for(&self, vendor_name: &str) -> f64 {
        self.entries
            .get(vendor_name)
            .map(|e| e.freq)
            .unwrap_or(Self::DEFAULT_FREQ)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::LogicVariant;

    fn sample_record() -> ReplenishmentRecord {
        ReplenishmentRecord {
            product_id: "00123".to_string(),
            product_name: "Beras 5kg".to_string(),
            vendor_id: 42,
            primary_vendor_name: "PT Sumber".to_string(),
            location_id: "WH1".to_string(),
            business_tagging: "Core".to_string(),
            pareto: Pareto::A,
            ship_date: None,
            coverage: None,
            new_doi_policy_wh: 6.0,
            new_rl_qty: 10.0,
            new_rl_value: 120_000.0,
            landed_doi: 8,
            jarak_inbound: DistanceReference::DEFAULT_DAYS,
            landed_doi_minus_ji: 1,
            logic: LogicVariant::A,
        }
    }

    #[test]
    fn test_vendor_display_named() {
        let rec = sample_record();
        assert_eq!(rec.vendor_display(), "42 - PT Sumber");
    }

    #[test]
    fn test_vendor_display_placeholder_name() {
        let mut rec = sample_record();
        rec.primary_vendor_name = "0".to_string();
        assert_eq!(rec.vendor_display(), "42");
    }

    #[test]
    fn test_distance_default() {
        let mut dist = DistanceReference::new();
        dist.insert("00123", 3);
        assert_eq!(dist.days_for("00123"), 3);
        assert_eq!(dist.days_for("999"), 7);
    }

    #[test]
    fn test_frequency_default() {
        let mut freq = VendorFrequencyTable::new();
        freq.insert(
            "PT Sumber",
            VendorFrequencyEntry {
                freq: 4.0,
                inbound_days: vec!["Mon".into(), "Thu".into()],
            },
        );
        assert!(freq.is_frequent("PT Sumber"));
        assert!(!freq.is_frequent("CV Lain"));
        assert_eq!(freq.freq_for("PT Sumber"), 4.0);
        assert_eq!(freq.freq_for("CV Lain"), 1.0);
    }
}
