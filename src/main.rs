// ==========================================
// DOI Dashboard - Session Entry Point
// ==========================================
// Loads one session from the configured input files, logs a dataset
// summary, and writes the at-risk list for the first available logic.
// The interactive report UI consumes the same ReportApi externally.
// ==========================================

use doi_dashboard::api::TIDAK_AMAN_FILENAME;
use doi_dashboard::config::{default_data_dir, SourceConfig};
use doi_dashboard::engine::SimulationFilter;
use doi_dashboard::{logging, ReportApi};
use std::fs::File;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", doi_dashboard::APP_NAME, doi_dashboard::VERSION);
    tracing::info!("==================================================");

    // optional argument: a config JSON or a data directory
    let config = match std::env::args().nth(1) {
        Some(arg) if arg.ends_with(".json") => SourceConfig::load(&arg)?,
        Some(dir) => SourceConfig::from_data_dir(dir),
        None => SourceConfig::from_data_dir(default_data_dir()),
    };

    let api = ReportApi::load(&config)?;

    if let Some(note) = api.data_basis_note() {
        tracing::info!("data basis: {note}");
    }
    for (logic, err) in api.load_failures() {
        tracing::warn!("{logic} unavailable: {err}");
    }
    tracing::info!(
        rows = api.dataset().len(),
        products = api.product_options().len(),
        vendors = api.vendor_options().len(),
        "session loaded"
    );

    // headline figures plus the downloadable at-risk list for the
    // first logic present in this session
    if let Some(&logic) = api.logic_options().first() {
        let filter = SimulationFilter::new(logic);
        let summary = api.simulation_summary(&filter);
        tracing::info!(
            logic = %summary.logic,
            total_rl_qty = summary.total_rl_qty,
            total_sku_tidak_aman = summary.total_sku_tidak_aman,
            "inbound simulation summary"
        );

        let file = File::create(TIDAK_AMAN_FILENAME)?;
        api.export_tidak_aman(&filter, file)?;
        tracing::info!("at-risk list written to {TIDAK_AMAN_FILENAME}");
    }

    Ok(())
}
