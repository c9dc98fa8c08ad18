//! Command-line interface definition and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the market graph demonstrator.
///
/// Either pick a scenario from the built-in catalog or drive the sliders by
/// hand; the manual flags also apply on top of a scenario, mirroring how the
/// interactive UI lets you keep adjusting after loading a preset.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// List the scenario catalog and exit.
    #[arg(short, long)]
    pub list: bool,

    /// Evaluate a scenario from the catalog by id.
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Rightward (+) or leftward (−) demand shift.
    #[arg(long, allow_hyphen_values = true)]
    pub demand_shift: Option<f64>,

    /// Price elasticity of demand.
    #[arg(long)]
    pub demand_elasticity: Option<f64>,

    /// Rightward (+) or leftward (−) supply shift.
    #[arg(long, allow_hyphen_values = true)]
    pub supply_shift: Option<f64>,

    /// Price elasticity of supply.
    #[arg(long)]
    pub supply_elasticity: Option<f64>,

    /// Enable a price floor at this price.
    #[arg(long)]
    pub floor: Option<f64>,

    /// Enable a price ceiling at this price.
    #[arg(long)]
    pub ceiling: Option<f64>,

    /// Include the sampled curve geometry in the report.
    #[arg(short, long)]
    pub geometry: bool,

    /// The JSON file to write (defaults to pretty-printed stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
