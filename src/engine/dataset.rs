// ==========================================
// DOI Dashboard - Dataset Snapshot
// ==========================================
// The immutable, fully-enriched record set of one session. Every
// view function takes &Dataset plus a selection and is a pure
// function of both, so re-running a view is always safe.
// ==========================================

use crate::domain::record::{DistanceReference, ReplenishmentRecord, VendorFrequencyTable};
use crate::engine::distance::DistanceEnricher;
use crate::engine::merger::merge_logics;
use crate::importer::source_loader::LogicTable;

/// Merged and enriched dataset of one dashboard session.
///
/// Immutable after construction; consumers only borrow it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ReplenishmentRecord>,
    frequencies: VendorFrequencyTable,
}

impl Dataset {
    /// Build the session snapshot: merge the loaded logic tables,
    /// join the distance reference, keep the frequency table for the
    /// simulation view.
    pub fn build(
        tables: Vec<LogicTable>,
        distance: &DistanceReference,
        frequencies: VendorFrequencyTable,
    ) -> Self {
        let mut records = merge_logics(tables);
        DistanceEnricher::apply(&mut records, distance);

        Self {
            records,
            frequencies,
        }
    }

    /// All merged rows in canonical `(product_id, logic rank)` order.
    pub fn records(&self) -> &[ReplenishmentRecord] {
        &self.records
    }

    pub fn frequencies(&self) -> &VendorFrequencyTable {
        &self.frequencies
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
