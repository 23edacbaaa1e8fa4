// ==========================================
// Fixture builder - writes a full session input set
// ==========================================
// Six CSV files in a temp directory, using the upstream export
// file names so SourceConfig::from_data_dir resolves them.
// ==========================================

use doi_dashboard::config::SourceConfig;
use doi_dashboard::domain::types::LogicVariant;
use std::fs;
use tempfile::TempDir;

/// Header of a logic export, with the per-variant metric prefix the
/// upstream tool writes ("v1) New RL Qty" etc.).
pub fn logic_header(prefix: &str) -> String {
    format!(
        "product_id,product_name,vendor_id,primary_vendor_name,business_tagging,location_id,Pareto,Ship Date,\
         {p}coverage,{p}New DOI Policy WH,{p}New RL Qty,{p}New RL Value,{p}Landed DOI",
        p = prefix
    )
}

/// One logic-export row.
#[derive(Clone)]
pub struct LogicRow {
    pub product_id: &'static str,
    pub product_name: &'static str,
    pub vendor_id: i64,
    pub vendor_name: &'static str,
    pub business_tag: &'static str,
    pub pareto: &'static str,
    pub ship_date: &'static str,
    pub coverage: &'static str,
    pub doi_policy: &'static str,
    pub rl_qty: &'static str,
    pub rl_value: &'static str,
    pub landed_doi: &'static str,
}

impl Default for LogicRow {
    fn default() -> Self {
        LogicRow {
            product_id: "001",
            product_name: "Beras 5kg",
            vendor_id: 42,
            vendor_name: "PT Sumber",
            business_tag: "Core",
            pareto: "A",
            ship_date: "2025-02-10",
            coverage: "2025-02-20",
            doi_policy: "6.0",
            rl_qty: "100",
            rl_value: "100,000",
            landed_doi: "8",
        }
    }
}

impl LogicRow {
    fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},WH1,{},{},{},{},{},\"{}\",{}",
            self.product_id,
            self.product_name,
            self.vendor_id,
            self.vendor_name,
            self.business_tag,
            self.pareto,
            self.ship_date,
            self.coverage,
            self.doi_policy,
            self.rl_qty,
            self.rl_value,
            self.landed_doi,
        )
    }
}

/// Session fixture: a temp data dir plus its SourceConfig.
pub struct SessionFixture {
    pub dir: TempDir,
    pub config: SourceConfig,
}

impl SessionFixture {
    /// Write all six input files. `rows_per_logic` supplies the data
    /// rows of each logic export; missing logics get an empty file
    /// with a valid header.
    pub fn build(
        rows_per_logic: &[(LogicVariant, Vec<LogicRow>)],
        distance_rows: &[(&str, &str)],
        frequency_rows: &[(&str, &str, &str)],
    ) -> Self {
        let dir = TempDir::new().unwrap();
        let config = SourceConfig::from_data_dir(dir.path());

        for (idx, logic) in LogicVariant::ALL.iter().enumerate() {
            let prefix = format!("v{}) ", idx + 1);
            let mut contents = logic_header(&prefix);
            contents.push('\n');
            if let Some((_, rows)) = rows_per_logic.iter().find(|(l, _)| l == logic) {
                for row in rows {
                    contents.push_str(&row.to_csv());
                    contents.push('\n');
                }
            }
            fs::write(config.logic_path(*logic), contents).unwrap();
        }

        let mut distance = String::from("product_id,Jarak Inbound\n");
        for (product_id, days) in distance_rows {
            distance.push_str(&format!("{product_id},{days}\n"));
        }
        fs::write(&config.distance_file, distance).unwrap();

        let mut frequency = String::from("primary_vendor_name,Freq,Inbound Days\n");
        for (vendor, freq, days) in frequency_rows {
            frequency.push_str(&format!("{vendor},{freq},\"{days}\"\n"));
        }
        fs::write(&config.frequency_file, frequency).unwrap();

        SessionFixture { dir, config }
    }

    /// Remove one logic export to simulate a missing source.
    pub fn remove_logic(&self, logic: LogicVariant) {
        fs::remove_file(self.config.logic_path(logic)).unwrap();
    }
}
