//! Summarize command: simulation run -> plotting-ready JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use hydrosum_io::read_parquet;
use hydrosum_summary::{SimulationSeries, summarize, to_json};

use crate::cli::SummarizeArgs;
use crate::config::HydrosumConfig;
use crate::convert;

/// Run the summary pipeline.
pub fn run(args: SummarizeArgs) -> Result<()> {
    let _cmd = info_span!("summarize").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: HydrosumConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;
    let summary_cfg = convert::build_summary_config(&config)?;

    // 2. Read the simulation table, if there is one
    let input = args.input.or_else(|| config.io.input.clone());
    let series = match &input {
        Some(path) => {
            info!(path = %path.display(), "reading simulation output");
            let table = read_parquet(path)
                .with_context(|| format!("failed to read Parquet: {}", path.display()))?;
            SimulationSeries::Available(table)
        }
        None => {
            info!("no simulation input configured; summarizing site only");
            SimulationSeries::Unavailable
        }
    };

    // 3. Summarize
    let summary = summarize(&series, &summary_cfg).context("summary failed")?;
    info!(regions = ?summary.turbine.regions, "turbine selection done");
    let json = to_json(&summary).context("failed to serialize summary")?;

    // 4. Write JSON
    let out_path = args
        .output
        .or_else(|| config.io.output.clone())
        .unwrap_or_else(|| default_output(input.as_deref()));
    std::fs::write(&out_path, &json)
        .with_context(|| format!("failed to write summary: {}", out_path.display()))?;
    info!(path = %out_path.display(), "summary written");

    Ok(())
}

/// `run.parquet` -> `run.summary.json`; `summary.json` without an input.
fn default_output(input: Option<&Path>) -> PathBuf {
    match input {
        Some(p) => p.with_extension("summary.json"),
        None => PathBuf::from("summary.json"),
    }
}
