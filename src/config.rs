use std::path::PathBuf;

use serde::Deserialize;

/// Top-level hydrosum configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HydrosumConfig {
    /// Unit system of flows and head: "US", "SI" or "metric".
    #[serde(default = "default_units")]
    pub units: String,

    /// Site description.
    pub site: SiteToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,
}

fn default_units() -> String {
    "US".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteToml {
    pub net_head: f64,
    #[serde(default)]
    pub design_flow: Option<f64>,
    #[serde(default)]
    pub flow: Option<f64>,
    #[serde(default)]
    pub rated_power: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: HydrosumConfig = toml::from_str(
            r#"
            units = "SI"

            [site]
            net_head = 35.0
            design_flow = 12.0
            rated_power = 3500.0

            [io]
            input = "run.parquet"
            output = "run.summary.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.units, "SI");
        assert_eq!(config.site.net_head, 35.0);
        assert_eq!(config.site.design_flow, Some(12.0));
        assert_eq!(config.site.flow, None);
        assert_eq!(config.site.rated_power, Some(3500.0));
        assert_eq!(config.io.input, Some(PathBuf::from("run.parquet")));
    }

    #[test]
    fn defaults_apply() {
        let config: HydrosumConfig = toml::from_str("[site]\nnet_head = 10.0\n").unwrap();
        assert_eq!(config.units, "US");
        assert!(config.io.input.is_none());
        assert!(config.io.output.is_none());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<HydrosumConfig, _> =
            toml::from_str("[site]\nnet_head = 10.0\nhead_loss = 2.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn site_is_required() {
        let result: Result<HydrosumConfig, _> = toml::from_str("units = \"US\"\n");
        assert!(result.is_err());
    }
}
