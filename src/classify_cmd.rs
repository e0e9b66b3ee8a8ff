//! Classify command: one operating point -> matching turbine regions.

use anyhow::{Context, Result};
use tracing::info;

use hydrosum_turbine::{OperatingPoint, classify};

use crate::cli::ClassifyArgs;
use crate::convert;

/// Classify the operating point and print the result as JSON on stdout.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let units = convert::parse_units(&args.units)?;
    let classification = classify(OperatingPoint::new(args.flow, args.head), units)
        .context("turbine classification failed")?;

    info!(
        flow_cms = classification.point.flow,
        head_m = classification.point.head,
        n_regions = classification.regions.len(),
        "operating point classified"
    );

    let json = serde_json::to_string_pretty(&classification)
        .context("failed to serialize classification")?;
    println!("{json}");
    Ok(())
}
