//! Application configuration management.
//!
//! Configuration is layered from three sources with a clear precedence:
//! built-in defaults, then an optional TOML file, then `APP_`-prefixed
//! environment variables.

use crate::Cli;
use marketlab_core::models::BaseMarket;
use marketlab_plot::{Insets, PlotError, PlotTransform, SurfaceSize};
use serde::{Deserialize, Serialize};

/// The plotting surface and axis configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphConfig {
    /// Quantity-axis maximum
    pub max_q: f64,
    /// Price-axis maximum
    pub max_p: f64,
    /// Logical surface size
    #[serde(default)]
    pub size: SurfaceSize,
    /// Padding between the surface edge and the plot rectangle
    #[serde(default)]
    pub padding: Insets,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_q: 12.0,
            max_p: 12.0,
            size: SurfaceSize::default(),
            padding: Insets::default(),
        }
    }
}

impl GraphConfig {
    /// Builds the validated plot transform for this configuration.
    pub fn transform(&self) -> Result<PlotTransform, PlotError> {
        PlotTransform::new(self.size, self.padding, self.max_q, self.max_p)
    }
}

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Plot surface and axis configuration
    #[serde(default)]
    pub graph: GraphConfig,

    /// Baseline curve intercepts that slider adjustments apply to
    #[serde(default)]
    pub base: BaseMarket,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`, e.g.
    /// `APP_GRAPH__MAX_P=15` overrides the price-axis maximum.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform_is_valid() {
        let transform = GraphConfig::default().transform().unwrap();
        assert_eq!(transform.max_q(), 12.0);
        assert_eq!(transform.max_p(), 12.0);
        assert_eq!(transform.plot_width(), 355.0);
    }

    #[test]
    fn test_default_base_market() {
        let config = AppConfig::default();
        assert_eq!(config.base.demand_intercept, 10.0);
        assert_eq!(config.base.supply_intercept, 1.0);
    }
}
