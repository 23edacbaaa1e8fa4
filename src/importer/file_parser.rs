// ==========================================
// DOI Dashboard - File Parser
// ==========================================
// Stage 0 of every load: delimited text -> raw header-keyed records.
// All inputs are UTF-8 CSV exports.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Raw parse result: the trimmed header row plus one
/// `HashMap<header, cell>` per data row.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

/// CSV file parser producing raw, untyped records.
pub struct CsvParser;

impl CsvParser {
    /// Parse a CSV file into one `HashMap<header, cell>` per row.
    ///
    /// Headers and cells are trimmed; fully blank rows are skipped.
    /// Rows shorter or longer than the header are tolerated (flexible
    /// mode) since the upstream exports are not strictly rectangular.
    pub fn parse_to_raw_records(
        &self,
        file_path: &Path,
    ) -> ImportResult<Vec<HashMap<String, String>>> {
        Ok(self.parse_table(file_path)?.rows)
    }

    /// Parse a CSV file keeping the header row, which schema
    /// resolution needs even when the file has no data rows.
    pub fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // skip fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(RawTable {
            headers,
            rows: records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let file = temp_csv("product_id,New RL Qty\n00123,10\n00456,20\n");

        let parser = CsvParser;
        let records = parser.parse_to_raw_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("product_id"), Some(&"00123".to_string()));
        assert_eq!(records[1].get("New RL Qty"), Some(&"20".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let parser = CsvParser;
        let result = parser.parse_to_raw_records(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_rejects_other_extensions() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let parser = CsvParser;
        let result = parser.parse_to_raw_records(file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_csv_parser_skip_blank_rows() {
        let file = temp_csv("product_id,New RL Qty\n00123,10\n,\n00456,20\n");

        let parser = CsvParser;
        let records = parser.parse_to_raw_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_csv_parser_keeps_headers_of_empty_file() {
        let file = temp_csv("product_id,Jarak Inbound\n");

        let parser = CsvParser;
        let table = parser.parse_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["product_id", "Jarak Inbound"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_csv_parser_trims_cells_and_headers() {
        let file = temp_csv(" product_id , New RL Qty \n 00123 , 10 \n");

        let parser = CsvParser;
        let records = parser.parse_to_raw_records(file.path()).unwrap();

        assert_eq!(records[0].get("product_id"), Some(&"00123".to_string()));
    }
}
