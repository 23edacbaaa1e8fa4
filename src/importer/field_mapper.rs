// ==========================================
// DOI Dashboard - Field Mapper
// ==========================================
// Typed parsing layer: raw header-keyed records -> domain records.
// Coercion never raises. Each field has exactly one default policy:
//   landed_doi            -> 0
//   vendor_id             -> 0
//   coverage / ship_date  -> None
//   new_rl_qty / new_doi_policy_wh -> NaN
//   new_rl_value          -> comma-stripped parse, NaN on failure
//   jarak_inbound cell    -> 0 (absent products default to 7 at join time)
//   freq cell             -> 1
// ==========================================

use crate::domain::record::{ReplenishmentRecord, VendorFrequencyEntry};
use crate::domain::types::{LogicVariant, Pareto};
use crate::importer::schema::{self, HeaderMap};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Date spellings seen in the exports; time-of-day is discarded.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct FieldMapper;

impl FieldMapper {
    /// Map one raw logic-export row to a typed record, tagged with its logic.
    ///
    /// Enrichment fields start at their defaults; the distance enricher
    /// overwrites them once the reference table is joined in.
    pub fn map_logic_row(
        &self,
        row: &HashMap<String, String>,
        headers: &HeaderMap,
        logic: LogicVariant,
    ) -> ReplenishmentRecord {
        let landed_doi = self.coerce_i64(row, headers, schema::LANDED_DOI, 0);

        ReplenishmentRecord {
            // product_id stays an opaque string so zero padding survives
            product_id: self.get_str(row, headers, schema::PRODUCT_ID),
            product_name: self.get_str(row, headers, schema::PRODUCT_NAME),
            vendor_id: self.coerce_i64(row, headers, schema::VENDOR_ID, 0),
            primary_vendor_name: self.get_str(row, headers, schema::PRIMARY_VENDOR_NAME),
            location_id: self.get_str(row, headers, schema::LOCATION_ID),

            business_tagging: self.get_str(row, headers, schema::BUSINESS_TAGGING),
            pareto: Pareto::from_label(&self.get_str(row, headers, schema::PARETO)),

            ship_date: self.coerce_date(row, headers, schema::SHIP_DATE),
            coverage: self.coerce_date(row, headers, schema::COVERAGE),

            new_doi_policy_wh: self.coerce_f64(row, headers, schema::NEW_DOI_POLICY_WH),
            new_rl_qty: self.coerce_f64(row, headers, schema::NEW_RL_QTY),
            new_rl_value: self.coerce_rl_value(row, headers),
            landed_doi,

            jarak_inbound: crate::domain::record::DistanceReference::DEFAULT_DAYS,
            landed_doi_minus_ji: landed_doi
                - crate::domain::record::DistanceReference::DEFAULT_DAYS,

            logic,
        }
    }

    /// Map one distance-reference row to `(product_id, transit days)`.
    ///
    /// Non-numeric distance cells coerce to 0, mirroring the upstream
    /// export behavior; only *absent* products get the default of 7.
    pub fn map_distance_row(
        &self,
        row: &HashMap<String, String>,
        headers: &HeaderMap,
    ) -> (String, i64) {
        (
            self.get_str(row, headers, schema::PRODUCT_ID),
            self.coerce_i64(row, headers, schema::JARAK_INBOUND, 0),
        )
    }

    /// Map one vendor-frequency row to `(vendor name, entry)`.
    pub fn map_frequency_row(
        &self,
        row: &HashMap<String, String>,
        headers: &HeaderMap,
    ) -> (String, VendorFrequencyEntry) {
        let name = self.get_str(row, headers, schema::PRIMARY_VENDOR_NAME);
        let freq_raw = self.get_str(row, headers, schema::FREQ);
        let freq = match freq_raw.parse::<f64>() {
            Ok(f) if f.is_finite() && f > 0.0 => f,
            _ => crate::domain::record::VendorFrequencyTable::DEFAULT_FREQ,
        };

        // "Mon, Wed, Fri" -> ["Mon", "Wed", "Fri"]
        let inbound_days = self
            .get_str(row, headers, schema::INBOUND_DAYS)
            .split(',')
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        (name, VendorFrequencyEntry { freq, inbound_days })
    }

    // ==========================================
    // Coercion helpers
    // ==========================================

    /// Raw cell for a canonical field, empty string when the column is
    /// absent from this source.
    fn get_str(&self, row: &HashMap<String, String>, headers: &HeaderMap, field: &str) -> String {
        headers
            .get(field)
            .and_then(|raw_header| row.get(raw_header))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Integer coercion with an explicit default. Accepts float-formatted
    /// cells ("8.0") by truncation.
    fn coerce_i64(
        &self,
        row: &HashMap<String, String>,
        headers: &HeaderMap,
        field: &str,
        default: i64,
    ) -> i64 {
        let value = self.get_str(row, headers, field);
        value
            .parse::<i64>()
            .ok()
            .or_else(|| value.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(default)
    }

    /// Float coercion; unparsable or absent cells become NaN, which the
    /// aggregation layer treats as missing.
    fn coerce_f64(&self, row: &HashMap<String, String>, headers: &HeaderMap, field: &str) -> f64 {
        self.get_str(row, headers, field)
            .parse::<f64>()
            .unwrap_or(f64::NAN)
    }

    /// `New RL Value` carries thousands separators ("12,345"); strip all
    /// commas before parsing. Unparsable values become NaN, never an error.
    fn coerce_rl_value(&self, row: &HashMap<String, String>, headers: &HeaderMap) -> f64 {
        self.get_str(row, headers, schema::NEW_RL_VALUE)
            .replace(',', "")
            .parse::<f64>()
            .unwrap_or(f64::NAN)
    }

    /// Date coercion; tries date-only then datetime spellings, discarding
    /// time-of-day. Unparsable values become None, never an error.
    fn coerce_date(
        &self,
        row: &HashMap<String, String>,
        headers: &HeaderMap,
        field: &str,
    ) -> Option<NaiveDate> {
        let value = self.get_str(row, headers, field);
        if value.is_empty() {
            return None;
        }

        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(&value, fmt) {
                return Some(d);
            }
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(&value, fmt) {
                return Some(dt.date());
            }
        }
        None
    }
}
