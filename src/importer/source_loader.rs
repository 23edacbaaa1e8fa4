// ==========================================
// DOI Dashboard - Source Loader
// ==========================================
// Loads the four per-logic exports plus the two reference tables.
// The four logic loads are independent: one unreadable file is
// reported per logic and never aborts the others.
// ==========================================

use crate::config::SourceConfig;
use crate::domain::record::{DistanceReference, ReplenishmentRecord, VendorFrequencyTable};
use crate::domain::types::LogicVariant;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::CsvParser;
use crate::importer::schema::SourceSchema;
use std::path::Path;
use tracing::{info, warn};

// ==========================================
// Load results
// ==========================================

/// Typed rows of one logic export.
#[derive(Debug, Clone)]
pub struct LogicTable {
    pub logic: LogicVariant,
    pub records: Vec<ReplenishmentRecord>,
}

/// Outcome of loading the four logic exports. Failures carry the
/// failing logic so the consumer can surface which source broke.
#[derive(Debug)]
pub struct LoadReport {
    pub tables: Vec<LogicTable>,
    pub failures: Vec<(LogicVariant, ImportError)>,
}

impl LoadReport {
    /// Total typed rows across all loaded logics.
    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.records.len()).sum()
    }

    /// True when not a single logic export could be loaded.
    pub fn all_failed(&self) -> bool {
        self.tables.is_empty()
    }
}

// ==========================================
// SourceLoader
// ==========================================

pub struct SourceLoader {
    parser: CsvParser,
    mapper: FieldMapper,
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLoader {
    pub fn new() -> Self {
        Self {
            parser: CsvParser,
            mapper: FieldMapper,
        }
    }

    /// Load one logic export: parse, validate against the declared
    /// schema, map every row to a typed record tagged with `logic`.
    pub fn load_logic(&self, logic: LogicVariant, path: &Path) -> ImportResult<LogicTable> {
        let table = self.parser.parse_table(path)?;
        let headers = SourceSchema::logic_source().resolve(&table.headers)?;

        let records = table
            .rows
            .iter()
            .map(|row| self.mapper.map_logic_row(row, &headers, logic))
            .collect::<Vec<_>>();

        info!(logic = %logic, rows = records.len(), path = %path.display(), "logic export loaded");
        Ok(LogicTable { logic, records })
    }

    /// Load all four logic exports independently.
    pub fn load_all_logics(&self, config: &SourceConfig) -> LoadReport {
        let mut tables = Vec::new();
        let mut failures = Vec::new();

        for logic in LogicVariant::ALL {
            let path = config.logic_path(logic);
            match self.load_logic(logic, path) {
                Ok(table) => tables.push(table),
                Err(err) => {
                    warn!(logic = %logic, path = %path.display(), error = %err, "skipping logic export");
                    failures.push((
                        logic,
                        ImportError::LogicSourceFailed {
                            logic,
                            message: err.to_string(),
                        },
                    ));
                }
            }
        }

        LoadReport { tables, failures }
    }

    /// Load the per-product inbound-distance reference table.
    pub fn load_distance(&self, path: &Path) -> ImportResult<DistanceReference> {
        let table = self.parser.parse_table(path)?;
        let headers = SourceSchema::distance_reference().resolve(&table.headers)?;

        let mut reference = DistanceReference::new();
        for row in &table.rows {
            let (product_id, days) = self.mapper.map_distance_row(row, &headers);
            if !product_id.is_empty() {
                reference.insert(product_id, days);
            }
        }

        info!(products = reference.len(), path = %path.display(), "distance reference loaded");
        Ok(reference)
    }

    /// Load the vendor-frequency reference table.
    pub fn load_frequency(&self, path: &Path) -> ImportResult<VendorFrequencyTable> {
        let table = self.parser.parse_table(path)?;
        let headers = SourceSchema::vendor_frequency().resolve(&table.headers)?;

        let mut frequencies = VendorFrequencyTable::new();
        for row in &table.rows {
            let (name, entry) = self.mapper.map_frequency_row(row, &headers);
            if !name.is_empty() {
                frequencies.insert(name, entry);
            }
        }

        info!(vendors = frequencies.len(), path = %path.display(), "vendor frequency table loaded");
        Ok(frequencies)
    }
}
