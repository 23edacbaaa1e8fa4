// ==========================================
// DOI Dashboard - Source Schemas
// ==========================================
// Declared schema per input format: canonical field name -> accepted
// raw header aliases, validated once at load time. Replaces the
// substring sniffing the upstream exports used to require.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

// ==========================================
// Canonical field names
// ==========================================
// Shared identity/classification columns of every logic export.
pub const PRODUCT_ID: &str = "product_id";
pub const PRODUCT_NAME: &str = "product_name";
pub const VENDOR_ID: &str = "vendor_id";
pub const PRIMARY_VENDOR_NAME: &str = "primary_vendor_name";
pub const BUSINESS_TAGGING: &str = "business_tagging";
pub const LOCATION_ID: &str = "location_id";
pub const PARETO: &str = "Pareto";
pub const SHIP_DATE: &str = "Ship Date";

// Per-logic metric columns.
pub const COVERAGE: &str = "coverage";
pub const NEW_DOI_POLICY_WH: &str = "New DOI Policy WH";
pub const NEW_RL_QTY: &str = "New RL Qty";
pub const NEW_RL_VALUE: &str = "New RL Value";
pub const LANDED_DOI: &str = "Landed DOI";

// Reference-table columns.
pub const JARAK_INBOUND: &str = "Jarak Inbound";
pub const FREQ: &str = "Freq";
pub const INBOUND_DAYS: &str = "Inbound Days";

/// Strip any export prefix ending in `") "` from a raw header.
///
/// The logic exports carry variant prefixes like `"v1) New RL Qty"`;
/// only the part after the last `") "` is the column name.
pub fn normalize_header(raw: &str) -> &str {
    raw.rsplit(") ").next().unwrap_or(raw).trim()
}

// ==========================================
// FieldSpec / SourceSchema
// ==========================================

/// One declared column of a source format.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Canonical name used everywhere downstream.
    pub canonical: &'static str,
    /// Accepted raw header spellings besides the canonical one
    /// (compared after prefix normalization).
    pub aliases: &'static [&'static str],
    /// Required columns fail schema validation when absent;
    /// optional ones fall back to the field's coercion default.
    pub required: bool,
}

/// Declared schema of one source format.
#[derive(Debug, Clone)]
pub struct SourceSchema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Canonical field name -> raw header key of the parsed record.
pub type HeaderMap = HashMap<&'static str, String>;

impl SourceSchema {
    /// Schema of the four per-logic replenishment exports.
    pub fn logic_source() -> Self {
        fn req(canonical: &'static str) -> FieldSpec {
            FieldSpec {
                canonical,
                aliases: &[],
                required: true,
            }
        }
        fn opt(canonical: &'static str, aliases: &'static [&'static str]) -> FieldSpec {
            FieldSpec {
                canonical,
                aliases,
                required: false,
            }
        }

        SourceSchema {
            name: "logic export",
            fields: vec![
                req(PRODUCT_ID),
                req(PRODUCT_NAME),
                req(VENDOR_ID),
                req(PRIMARY_VENDOR_NAME),
                req(BUSINESS_TAGGING),
                req(LOCATION_ID),
                req(PARETO),
                req(SHIP_DATE),
                // metric columns differ per logic and may be absent;
                // absence resolves to the field's coercion default
                opt(COVERAGE, &["Coverage"]),
                opt(NEW_DOI_POLICY_WH, &["New DOI Policy"]),
                opt(NEW_RL_QTY, &[]),
                opt(NEW_RL_VALUE, &[]),
                opt(LANDED_DOI, &[]),
            ],
        }
    }

    /// Schema of the per-product inbound-distance reference table.
    pub fn distance_reference() -> Self {
        SourceSchema {
            name: "distance reference",
            fields: vec![
                FieldSpec {
                    canonical: PRODUCT_ID,
                    aliases: &[],
                    required: true,
                },
                FieldSpec {
                    canonical: JARAK_INBOUND,
                    aliases: &["JI"],
                    required: true,
                },
            ],
        }
    }

    /// Schema of the vendor-frequency reference table.
    pub fn vendor_frequency() -> Self {
        SourceSchema {
            name: "vendor frequency",
            fields: vec![
                FieldSpec {
                    canonical: PRIMARY_VENDOR_NAME,
                    aliases: &["vendor_name"],
                    required: true,
                },
                FieldSpec {
                    canonical: FREQ,
                    aliases: &["Frequency"],
                    required: true,
                },
                FieldSpec {
                    canonical: INBOUND_DAYS,
                    aliases: &[],
                    required: false,
                },
            ],
        }
    }

    /// Resolve raw headers against the schema.
    ///
    /// Every raw header is prefix-normalized, then matched against the
    /// canonical name and the declared aliases. Missing required
    /// columns fail validation in one batch so the error names them all.
    pub fn resolve(&self, raw_headers: &[String]) -> ImportResult<HeaderMap> {
        let mut map: HeaderMap = HashMap::new();

        for raw in raw_headers {
            let normalized = normalize_header(raw);
            for field in &self.fields {
                let matches = normalized == field.canonical
                    || field.aliases.iter().any(|a| *a == normalized);
                // first matching header wins
                if matches && !map.contains_key(field.canonical) {
                    map.insert(field.canonical, raw.clone());
                }
            }
        }

        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.required && !map.contains_key(f.canonical))
            .map(|f| f.canonical.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ImportError::MissingColumns {
                source_name: self.name.to_string(),
                missing,
            });
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_header_strips_prefix() {
        assert_eq!(normalize_header("v1) New RL Qty"), "New RL Qty");
        assert_eq!(normalize_header("(a) v2) Landed DOI"), "Landed DOI");
        assert_eq!(normalize_header("New RL Qty"), "New RL Qty");
    }

    #[test]
    fn test_logic_schema_resolves_prefixed_headers() {
        let schema = SourceSchema::logic_source();
        let raw = headers(&[
            "product_id",
            "product_name",
            "vendor_id",
            "primary_vendor_name",
            "business_tagging",
            "location_id",
            "Pareto",
            "Ship Date",
            "v1) New RL Qty",
            "v1) New RL Value",
            "v1) Landed DOI",
        ]);

        let map = schema.resolve(&raw).unwrap();
        assert_eq!(map.get(NEW_RL_QTY), Some(&"v1) New RL Qty".to_string()));
        assert_eq!(map.get(LANDED_DOI), Some(&"v1) Landed DOI".to_string()));
        // optional metric columns may be absent
        assert!(map.get(COVERAGE).is_none());
    }

    #[test]
    fn test_logic_schema_missing_required() {
        let schema = SourceSchema::logic_source();
        let raw = headers(&["product_id", "Pareto"]);

        let err = schema.resolve(&raw).unwrap_err();
        match err {
            ImportError::MissingColumns { missing, .. } => {
                assert!(missing.contains(&"vendor_id".to_string()));
                assert!(missing.contains(&"Ship Date".to_string()));
                assert!(!missing.contains(&"product_id".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_distance_schema_alias() {
        let schema = SourceSchema::distance_reference();
        let map = schema.resolve(&headers(&["product_id", "JI"])).unwrap();
        assert_eq!(map.get(JARAK_INBOUND), Some(&"JI".to_string()));
    }
}
