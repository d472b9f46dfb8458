use tbsim::{ScenarioConfig, Scenario, Integrator};
use tbsim::{export_gif, run_2d};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML, looked up under `scenarios/` unless the path exists as given
    #[arg(short, default_value = "equilateral.yaml")]
    file_name: String,

    /// Override the GIF output path from the scenario
    #[arg(long)]
    gif: Option<PathBuf>,

    /// Skip GIF export
    #[arg(long)]
    no_gif: bool,

    /// Replay the run in an interactive window
    #[arg(long)]
    view: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    info!("loading scenario {}", config_path.display());

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(gif) = args.gif {
        scenario_cfg.render.output = gif;
    }

    let scenario = Scenario::build_scenario(&scenario_cfg).context("invalid scenario")?;
    let mut integrator = Integrator::new(scenario);
    let summary = integrator.run()?;
    info!(
        "{} of {} steps, simulated time {:.3} ({:?})",
        summary.steps_run,
        summary.max_steps,
        summary.simulated_time(),
        summary.stop_reason
    );

    let output = integrator.into_output()?;

    if !args.no_gif {
        export_gif(&output, &scenario_cfg.render)?;
    }

    if args.view {
        run_2d(output, &scenario_cfg.render);
    }

    Ok(())
}
