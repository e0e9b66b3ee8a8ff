use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hydropower plant simulation summaries.
#[derive(Parser)]
#[command(
    name = "hydrosum",
    version,
    about = "Flow-duration curves, turbine selection and monthly statistics for hydropower runs"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Summarize a simulation run into plotting-ready JSON.
    Summarize(SummarizeArgs),
    /// Classify a single (flow, head) operating point.
    Classify(ClassifyArgs),
}

/// Arguments for the `summarize` subcommand.
#[derive(clap::Args)]
pub struct SummarizeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hydrosum.toml")]
    pub config: PathBuf,

    /// Override the simulation Parquet path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the summary JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Design flow (cfs for US units, m³/s for SI).
    #[arg(long)]
    pub flow: f64,

    /// Net head (ft for US units, m for SI).
    #[arg(long)]
    pub head: f64,

    /// Unit system of flow and head: "US", "SI" or "metric".
    #[arg(short, long, default_value = "SI")]
    pub units: String,
}
