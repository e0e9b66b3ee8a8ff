//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use hydrosum_summary::SummaryConfig;
use hydrosum_units::UnitSystem;

use crate::config::HydrosumConfig;

/// Parses a unit system name.
pub fn parse_units(s: &str) -> Result<UnitSystem> {
    s.parse::<UnitSystem>()
        .with_context(|| format!("invalid units setting {s:?}"))
}

/// Builds a [`SummaryConfig`] from the parsed TOML.
pub fn build_summary_config(config: &HydrosumConfig) -> Result<SummaryConfig> {
    let units = parse_units(&config.units)?;
    let site = &config.site;

    let mut summary = SummaryConfig::new(units, site.net_head);
    if let Some(q) = site.design_flow {
        summary = summary.with_design_flow(q);
    }
    if let Some(q) = site.flow {
        summary = summary.with_flow(q);
    }
    if let Some(p) = site.rated_power {
        summary = summary.with_rated_power_kw(p);
    }
    Ok(summary)
}
