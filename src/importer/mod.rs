// ==========================================
// DOI Dashboard - Import Layer
// ==========================================
// External data ingestion: CSV parsing, declared schemas,
// typed field mapping, per-logic source loading
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod schema;
pub mod source_loader;

pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, RawTable};
pub use schema::{normalize_header, FieldSpec, HeaderMap, SourceSchema};
pub use source_loader::{LoadReport, LogicTable, SourceLoader};
