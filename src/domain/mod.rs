// ==========================================
// DOI Dashboard - Domain Layer
// ==========================================
// Typed domain model: merged replenishment rows plus the two
// reference tables that enrich them
// ==========================================

pub mod record;
pub mod types;

pub use record::{
    DistanceReference, ReplenishmentRecord, VendorFrequencyEntry, VendorFrequencyTable,
};
pub use types::{LogicVariant, Pareto, VendorClass, Verdict, SAFE_LANDED_DOI};
