// ==========================================
// DOI Dashboard - Vendor Frequency Enricher
// ==========================================
// Inbound-simulation vendor aggregation: per-vendor quantity and
// first ship date, joined with the delivery-cadence table, then
// partitioned into Frequent / Regular series for the chart.
// ==========================================

use crate::domain::record::{ReplenishmentRecord, VendorFrequencyTable};
use crate::domain::types::VendorClass;
use crate::engine::nan_sum;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

// ==========================================
// Per-vendor aggregation
// ==========================================

/// One vendor of the logic-filtered simulation set.
#[derive(Debug, Clone, Serialize)]
pub struct VendorGroup {
    pub primary_vendor_name: String,
    pub sum_rl_qty: f64,
    pub first_ship_date: Option<NaiveDate>,
    /// Delivery cadence; 1 for vendors absent from the frequency table.
    pub freq: f64,
    /// floor(sum_rl_qty / freq); 0 when the quantity is missing or zero.
    pub rl_qty_per_freq: i64,
    pub class: VendorClass,
    pub inbound_days: Vec<String>,
}

/// Group the logic-filtered rows per vendor and join the frequency
/// table. Every vendor lands in exactly one class: Frequent when its
/// name is present in the table, Regular otherwise.
pub fn group_vendors(
    rows: &[&ReplenishmentRecord],
    frequencies: &VendorFrequencyTable,
) -> Vec<VendorGroup> {
    struct Acc {
        qty: Vec<f64>,
        first_ship_date: Option<NaiveDate>,
    }

    let mut by_vendor: BTreeMap<String, Acc> = BTreeMap::new();
    for rec in rows {
        let acc = by_vendor
            .entry(rec.primary_vendor_name.clone())
            .or_insert_with(|| Acc {
                qty: Vec::new(),
                first_ship_date: None,
            });
        acc.qty.push(rec.new_rl_qty);
        acc.first_ship_date = match (acc.first_ship_date, rec.ship_date) {
            (Some(current), Some(d)) => Some(current.min(d)),
            (None, d) => d,
            (current, None) => current,
        };
    }

    by_vendor
        .into_iter()
        .map(|(name, acc)| {
            let sum_rl_qty = nan_sum(&acc.qty);
            let freq = frequencies.freq_for(&name);
            let rl_qty_per_freq = if sum_rl_qty.is_finite() {
                (sum_rl_qty / freq).floor() as i64
            } else {
                0
            };
            let class = if frequencies.is_frequent(&name) {
                VendorClass::Frequent
            } else {
                VendorClass::Regular
            };
            let inbound_days = frequencies
                .get(&name)
                .map(|e| e.inbound_days.clone())
                .unwrap_or_default();

            VendorGroup {
                primary_vendor_name: name,
                sum_rl_qty,
                first_ship_date: acc.first_ship_date,
                freq,
                rl_qty_per_freq,
                class,
                inbound_days,
            }
        })
        .collect()
}

// ==========================================
// Chart-ready inbound series
// ==========================================

/// One bar of the inbound-quantity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboundPoint {
    pub ship_date: NaiveDate,
    pub qty: i64,
    pub class: VendorClass,
}

/// Build the two-class inbound series.
///
/// Regular vendors contribute their raw row quantities summed per
/// ship date; frequent vendors contribute `rl_qty_per_freq` summed
/// per first ship date, modeling a delivery spread evenly across the
/// cadence instead of one lump sum. Rows and groups without a date
/// drop out of the chart. Output is sorted by date then class for
/// deterministic rendering.
pub fn inbound_series(
    rows: &[&ReplenishmentRecord],
    frequencies: &VendorFrequencyTable,
) -> Vec<InboundPoint> {
    let mut buckets: BTreeMap<(NaiveDate, VendorClass), f64> = BTreeMap::new();

    // Regular: raw rows grouped by ship date
    for rec in rows {
        if frequencies.is_frequent(&rec.primary_vendor_name) {
            continue;
        }
        let Some(date) = rec.ship_date else { continue };
        if rec.new_rl_qty.is_nan() {
            continue;
        }
        *buckets.entry((date, VendorClass::Regular)).or_insert(0.0) += rec.new_rl_qty;
    }

    // Frequent: per-vendor cadence quantity grouped by first ship date
    for group in group_vendors(rows, frequencies) {
        if group.class != VendorClass::Frequent {
            continue;
        }
        let Some(date) = group.first_ship_date else { continue };
        *buckets.entry((date, VendorClass::Frequent)).or_insert(0.0) +=
            group.rl_qty_per_freq as f64;
    }

    buckets
        .into_iter()
        .map(|((ship_date, class), qty)| InboundPoint {
            ship_date,
            qty: qty as i64,
            class,
        })
        .collect()
}
