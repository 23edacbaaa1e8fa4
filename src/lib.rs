// ==========================================
// DOI Dashboard - Core Library
// ==========================================
// CSV-driven inventory-replenishment reporting: loads four
// replenishment-logic exports plus two reference tables, merges
// them into one immutable session dataset, and serves the OOS
// projection and inbound-simulation report views.
// The interactive UI and chart rendering are external consumers
// of the API layer.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - records and types
pub mod domain;

// Import layer - external data
pub mod importer;

// Engine layer - merge, enrichment, aggregation
pub mod engine;

// API layer - report views for the UI
pub mod api;

// Configuration layer - session source files
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{LogicVariant, Pareto, VendorClass, Verdict, SAFE_LANDED_DOI};

// Domain records
pub use domain::record::{
    DistanceReference, ReplenishmentRecord, VendorFrequencyEntry, VendorFrequencyTable,
};

// Importer
pub use importer::{ImportError, LoadReport, LogicTable, SourceLoader};

// Engine
pub use engine::{Dataset, InboundPoint, SimulationFilter, VendorComparisonGroup, VendorGroup};

// API
pub use api::{ApiError, ReportApi, TIDAK_AMAN_FILENAME};

// Config
pub use config::SourceConfig;

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "DOI Dashboard";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
