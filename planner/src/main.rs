//! Main entry point for the planner binary
//!
//! Reads a vendor catalog and a planning request from disk, runs the planner
//! and writes the outcome as JSON.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use planner::{
    services::{JsonCatalog, JsonReportWriter},
    Planner, PlannerConfig, RefreshMode, ReportSink,
};
use shared::{logging, PlanRequest};

/// Environment variable naming a configuration file when `--config` is absent
const CONFIG_ENV: &str = "PLANNER_CONFIG";

/// Vendor combination planner
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Allocates an event budget and shortlists vendor combinations")]
pub struct Args {
    /// Vendor catalog (JSON array of offers)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Planning request (JSON)
    #[arg(long)]
    pub request: PathBuf,

    /// Planner configuration (JSON); falls back to $PLANNER_CONFIG, then defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report destination; stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of combinations kept per round
    #[arg(long)]
    pub beam_width: Option<usize>,

    /// Maximum beam search rounds
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Stop once the best score reaches this value
    #[arg(long)]
    pub threshold: Option<f64>,

    /// How candidates are refreshed between rounds
    #[arg(long, value_enum)]
    pub refresh_mode: Option<RefreshMode>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Load the configuration file (if any) and apply command line overrides
    async fn resolve_config(&self) -> anyhow::Result<PlannerConfig> {
        let path = self
            .config
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => PlannerConfig::load(&path)
                .await
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => PlannerConfig::default(),
        };

        if let Some(beam_width) = self.beam_width {
            config.search.beam_width = beam_width;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.search.max_iterations = max_iterations;
        }
        if let Some(threshold) = self.threshold {
            config.search.convergence_threshold = threshold;
        }
        if let Some(refresh_mode) = self.refresh_mode {
            config.sourcing.refresh_mode = refresh_mode;
        }

        config.validate().context("invalid planner configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup("vendor planner");

    let config = args.resolve_config().await?;
    tracing::debug!(
        beam_width = config.search.beam_width,
        max_iterations = config.search.max_iterations,
        refresh_mode = ?config.sourcing.refresh_mode,
        "Configuration resolved"
    );

    let request_json = tokio::fs::read_to_string(&args.request)
        .await
        .with_context(|| format!("failed to read request {}", args.request.display()))?;
    let request = PlanRequest::from_json(&request_json)
        .with_context(|| format!("failed to parse request {}", args.request.display()))?;

    let planner = Planner::new(JsonCatalog::new(&args.catalog), config);
    let outcome = match planner.plan(request).await {
        Ok(outcome) => outcome,
        Err(err) => {
            logging::log_error("Planning", &err);
            return Err(err).context("planning failed");
        }
    };

    let writer = match &args.output {
        Some(path) => JsonReportWriter::to_file(path),
        None => JsonReportWriter::to_stdout(),
    };
    writer.write_report(&outcome).await.context("failed to write report")?;

    if let Some(path) = &args.output {
        tracing::info!(plan = %outcome.plan_id(), "Report written to {}", path.display());
    }
    Ok(())
}
