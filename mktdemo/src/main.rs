use std::{
    fs::File,
    io::{stdout, BufWriter, Write as _},
};

use marketlab_core::models::{MarketState, PriceControl};
use mktdemo::{report::MarketGraphReport, scenario, AppConfig, Cli};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let catalog = scenario::catalog();

    if cli.list {
        for (id, scenario) in &catalog {
            println!("{id:32} [{}] {}", scenario.category.tag(), scenario.summary);
        }
        return Ok(());
    }

    let AppConfig { graph, base } = AppConfig::load(&cli)?;
    let transform = graph.transform()?;

    // Start from the selected scenario (or the neutral baseline), then let
    // the manual flags override individual sliders and controls.
    let mut params = match &cli.scenario {
        Some(id) => {
            let scenario = catalog
                .get(id.as_str())
                .ok_or_else(|| anyhow::anyhow!("unknown scenario {id:?} (try --list)"))?;
            tracing::info!(%id, title = scenario.title, "loading scenario");
            scenario.params
        }
        None => scenario::ScenarioParams {
            adjustments: Default::default(),
            floor: None,
            ceiling: None,
        },
    };
    if let Some(v) = cli.demand_shift {
        params.adjustments.demand_shift = v;
    }
    if let Some(v) = cli.demand_elasticity {
        params.adjustments.demand_elasticity = v;
    }
    if let Some(v) = cli.supply_shift {
        params.adjustments.supply_shift = v;
    }
    if let Some(v) = cli.supply_elasticity {
        params.adjustments.supply_elasticity = v;
    }
    if let Some(p) = cli.floor {
        params.floor = Some(p);
    }
    if let Some(p) = cli.ceiling {
        params.ceiling = Some(p);
    }

    let (demand, supply) = params.adjustments.apply(&base)?;
    let state = MarketState {
        demand,
        supply,
        floor: params.floor.map(PriceControl::enabled),
        ceiling: params.ceiling.map(PriceControl::enabled),
    };

    let report = MarketGraphReport::build(
        cli.scenario.clone(),
        state,
        &params.adjustments,
        &transform,
        cli.geometry,
    );

    match &cli.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, &report)?;
        }
        None => {
            let mut out = stdout().lock();
            writeln!(out, "{}", report.render_text())?;
        }
    }

    Ok(())
}
