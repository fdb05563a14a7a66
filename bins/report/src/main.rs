//! Assetbook depreciation report.
//!
//! Reads a registry snapshot (master data plus equipment records) and prints
//! one page of the depreciation listing, with summary totals, as JSON.
//!
//! Usage: assetbook-report <snapshot.json> [--as-of YYYY-MM-DD] [--page N] [--per-page N]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use assetbook_core::lifespan::UsefulLifeTable;
use assetbook_core::registry::{EquipmentRow, ListingSummary, RegistryListing, RegistrySnapshot};
use assetbook_shared::config::LoggingConfig;
use assetbook_shared::types::{PageRequest, PageResponse};
use assetbook_shared::{AppConfig, AppError, AppResult};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "assetbook-report",
    about = "Print the equipment depreciation listing for a registry snapshot."
)]
struct Cli {
    /// Path to the JSON registry snapshot
    snapshot: PathBuf,
    /// Reference date for the calculation (default: today)
    #[arg(long = "as-of")]
    as_of: Option<NaiveDate>,
    /// Page number to print
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Rows per page (default: report.per_page from configuration)
    #[arg(long = "per-page", value_parser = clap::value_parser!(u32).range(1..))]
    per_page: Option<u32>,
}

/// Report document written to stdout.
#[derive(Debug, Serialize)]
struct Report {
    as_of: NaiveDate,
    summary: ListingSummary,
    listing: PageResponse<EquipmentRow>,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let json = std::fs::read_to_string(&cli.snapshot)
        .map_err(|e| AppError::Input(format!("{}: {e}", cli.snapshot.display())))?;
    let snapshot = RegistrySnapshot::from_json(&json)
        .with_context(|| format!("Failed to load snapshot {}", cli.snapshot.display()))?;
    info!(
        path = %cli.snapshot.display(),
        equipment = snapshot.equipment.len(),
        "Snapshot loaded"
    );

    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    let request = PageRequest::new(cli.page, cli.per_page.unwrap_or(config.report.per_page));
    let report = build_report(&snapshot, &config, as_of, request)?;
    info!(
        %as_of,
        page = report.listing.meta.page,
        total_pages = report.listing.meta.total_pages,
        "Report built"
    );

    write_report(std::io::stdout().lock(), &report)?;
    Ok(())
}

fn write_report(mut out: impl Write, report: &Report) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, report)
        .map_err(|e| AppError::Internal(format!("Failed to write report: {e}")))?;
    writeln!(out)
        .and_then(|()| out.flush())
        .map_err(|e| AppError::Internal(format!("Failed to write report: {e}")))
}

fn build_report(
    snapshot: &RegistrySnapshot,
    config: &AppConfig,
    as_of: NaiveDate,
    request: PageRequest,
) -> AppResult<Report> {
    let table = UsefulLifeTable::from_master(
        &snapshot.master,
        config.depreciation.fallback_lifespan_years,
    );
    let listing = RegistryListing::new(&snapshot.master, &table, config.display.scale);

    Ok(Report {
        as_of,
        summary: listing.summarize(&snapshot.equipment, as_of)?,
        listing: listing.page(&snapshot.equipment, as_of, request),
    })
}

/// Initializes tracing on stderr so stdout stays pure JSON.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());

    let json = logging.json;
    let writer = std::io::stderr;
    let json_layer = json.then(|| fmt::layer().json().with_writer(writer));
    let text_layer = (!json).then(|| fmt::layer().with_writer(writer));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
