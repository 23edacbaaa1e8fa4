// ==========================================
// DOI Dashboard - API Layer
// ==========================================
// Boundary contract for the external UI: report views, selector
// options and the at-risk-list export
// ==========================================

pub mod dto;
pub mod error;
pub mod export;
pub mod report_api;

pub use dto::{
    logic_catalog, ComparisonRow, ComparisonView, LogicCatalogEntry, ProductRow, SelectOption,
    SimulationSummary, VendorScheduleRow,
};
pub use error::{ApiError, ApiResult};
pub use export::{write_tidak_aman_csv, TIDAK_AMAN_FILENAME};
pub use report_api::{Page, ReportApi, ViewBy};
