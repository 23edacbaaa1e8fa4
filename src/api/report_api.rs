// ==========================================
// DOI Dashboard - Report API
// ==========================================
// Facade over the loaded session: owns the immutable dataset plus
// the per-logic load failures, and exposes the two report views and
// their selector option lists. Every view call recomputes from the
// snapshot; there is no cached or incremental state.
// ==========================================

use crate::api::dto::{
    ComparisonRow, ComparisonView, ProductRow, SelectOption, SimulationSummary, VendorScheduleRow,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::export::write_tidak_aman_csv;
use crate::config::SourceConfig;
use crate::domain::types::{LogicVariant, Pareto, VendorClass};
use crate::engine::aggregation::{
    self, tidak_aman_rows, total_rl_qty, total_sku_tidak_aman, SimulationFilter,
};
use crate::engine::dataset::Dataset;
use crate::engine::frequency::{group_vendors, inbound_series, InboundPoint};
use crate::importer::error::ImportError;
use crate::importer::source_loader::SourceLoader;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{info, warn};

// ==========================================
// Page navigation contract
// ==========================================

/// Report pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    OosProjectionWh,
    InboundQuantitySimulation,
}

/// View-by toggle of the OOS projection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewBy {
    ProductId,
    Vendor,
}

// ==========================================
// ReportApi
// ==========================================

pub struct ReportApi {
    dataset: Dataset,
    load_failures: Vec<(LogicVariant, ImportError)>,
    data_basis_note: Option<String>,
}

impl ReportApi {
    /// Load one session from the configured input files.
    ///
    /// Logic exports load independently; their failures are kept on
    /// the session and surfaced per logic. The two reference tables
    /// are required: without them no enrichment is possible.
    pub fn load(config: &SourceConfig) -> ApiResult<Self> {
        let loader = SourceLoader::new();

        let report = loader.load_all_logics(config);
        for (logic, err) in &report.failures {
            warn!(logic = %logic, error = %err, "logic export unavailable for this session");
        }
        if report.all_failed() {
            return Err(ApiError::NoDataLoaded);
        }

        let distance = loader.load_distance(&config.distance_file)?;
        let frequencies = loader.load_frequency(&config.frequency_file)?;

        let failures = report.failures;
        let dataset = Dataset::build(report.tables, &distance, frequencies);
        info!(rows = dataset.len(), failed_logics = failures.len(), "session dataset ready");

        Ok(Self {
            dataset,
            load_failures: failures,
            data_basis_note: config.data_basis_note.clone(),
        })
    }

    /// Build directly from an existing snapshot (tests, embedding).
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            load_failures: Vec::new(),
            data_basis_note: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Per-logic load failures of this session, for the warning banner.
    pub fn load_failures(&self) -> &[(LogicVariant, ImportError)] {
        &self.load_failures
    }

    /// Caption stating which replenishment upload the data came from.
    pub fn data_basis_note(&self) -> Option<&str> {
        self.data_basis_note.as_deref()
    }

    // ==========================================
    // OOS projection views
    // ==========================================

    /// Vendor comparison table: one aggregated row per logic.
    ///
    /// An empty `rows` vec means the vendor matched nothing; the
    /// renderer warns instead of erroring.
    pub fn vendor_comparison_view(&self, vendor_id: i64) -> ApiResult<ComparisonView> {
        if vendor_id == 0 {
            return Err(ApiError::InvalidInput(
                "vendor_id 0 is a placeholder, not a selectable vendor".to_string(),
            ));
        }

        let groups = aggregation::vendor_comparison(&self.dataset, vendor_id);
        let vendor_display = groups
            .first()
            .map(|g| {
                if g.primary_vendor_name == "0" {
                    g.vendor_id.to_string()
                } else {
                    format!("{} - {}", g.vendor_id, g.primary_vendor_name)
                }
            })
            .unwrap_or_else(|| vendor_id.to_string());

        Ok(ComparisonView {
            vendor_id,
            vendor_display,
            rows: groups.iter().map(ComparisonRow::from).collect(),
        })
    }

    /// Product view: raw per-logic rows, no aggregation.
    pub fn product_view(&self, product_id: &str) -> Vec<ProductRow> {
        aggregation::product_rows(&self.dataset, product_id)
            .into_iter()
            .map(ProductRow::from)
            .collect()
    }

    // ==========================================
    // Inbound quantity simulation views
    // ==========================================

    /// Headline totals for the selected filters.
    pub fn simulation_summary(&self, filter: &SimulationFilter) -> SimulationSummary {
        let rows = filter.logic_rows(&self.dataset);
        SimulationSummary {
            logic: filter.logic,
            total_rl_qty: total_rl_qty(&rows),
            total_sku_tidak_aman: total_sku_tidak_aman(&rows),
        }
    }

    /// Chart series: inbound quantity per ship date, split
    /// Frequent / Regular.
    pub fn inbound_chart(&self, filter: &SimulationFilter) -> Vec<InboundPoint> {
        let rows = filter.logic_rows(&self.dataset);
        inbound_series(&rows, self.dataset.frequencies())
    }

    /// Delivery schedule table: frequent vendors with a complete
    /// cadence row (inbound days and a first ship date).
    pub fn vendor_schedule(&self, filter: &SimulationFilter) -> Vec<VendorScheduleRow> {
        let rows = filter.logic_rows(&self.dataset);
        group_vendors(&rows, self.dataset.frequencies())
            .into_iter()
            .filter(|g| g.class == VendorClass::Frequent)
            .filter_map(|g| {
                let first_ship_date = g.first_ship_date?;
                Some(VendorScheduleRow {
                    primary_vendor_name: g.primary_vendor_name,
                    inbound_days: g.inbound_days,
                    sum_rl_qty: g.sum_rl_qty,
                    first_ship_date,
                    rl_qty_per_freq: g.rl_qty_per_freq,
                })
            })
            .collect()
    }

    /// At-risk product list for the selected logic, display form.
    pub fn tidak_aman_list(&self, filter: &SimulationFilter) -> Vec<ProductRow> {
        let rows = filter.logic_rows(&self.dataset);
        tidak_aman_rows(&rows).into_iter().map(ProductRow::from).collect()
    }

    /// Write the at-risk list as downloadable CSV.
    pub fn export_tidak_aman<W: Write>(
        &self,
        filter: &SimulationFilter,
        writer: W,
    ) -> ApiResult<()> {
        let rows = filter.logic_rows(&self.dataset);
        write_tidak_aman_csv(&tidak_aman_rows(&rows), writer)
    }

    // ==========================================
    // Selector options
    // ==========================================

    /// Distinct products as "id - name" options, sorted by id.
    pub fn product_options(&self) -> Vec<SelectOption> {
        let mut by_id: BTreeMap<String, String> = BTreeMap::new();
        for rec in self.dataset.records() {
            by_id
                .entry(rec.product_id.clone())
                .or_insert_with(|| rec.product_display());
        }
        by_id
            .into_iter()
            .map(|(value, label)| SelectOption { value, label })
            .collect()
    }

    /// Distinct vendors sorted by vendor id; the id-0 placeholder is
    /// never offered.
    pub fn vendor_options(&self) -> Vec<SelectOption> {
        let mut by_id: BTreeMap<i64, String> = BTreeMap::new();
        for rec in self.dataset.records() {
            if rec.vendor_id == 0 {
                continue;
            }
            by_id
                .entry(rec.vendor_id)
                .or_insert_with(|| rec.vendor_display());
        }
        by_id
            .into_iter()
            .map(|(id, label)| SelectOption {
                value: id.to_string(),
                label,
            })
            .collect()
    }

    /// Distinct non-empty business tags, sorted.
    pub fn business_tag_options(&self) -> Vec<SelectOption> {
        let mut tags: Vec<String> = self
            .dataset
            .records()
            .iter()
            .map(|r| r.business_tagging.clone())
            .filter(|t| !t.is_empty())
            .collect();
        tags.sort();
        tags.dedup();
        tags.into_iter()
            .map(|t| SelectOption {
                value: t.clone(),
                label: t,
            })
            .collect()
    }

    /// The fixed Pareto multi-select order.
    pub fn pareto_options(&self) -> Vec<Pareto> {
        Pareto::ORDERED.to_vec()
    }

    /// Logics actually present in this session, in rank order.
    pub fn logic_options(&self) -> Vec<LogicVariant> {
        LogicVariant::ALL
            .into_iter()
            .filter(|logic| self.dataset.records().iter().any(|r| r.logic == *logic))
            .collect()
    }
}
