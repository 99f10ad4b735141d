use tbsim::run_2d;
use tbsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under scenarios/; the built-in three-body preset is
    /// used when omitted
    #[arg(short)]
    file_name: Option<String>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = match &args.file_name {
        Some(name) => {
            log::info!("loading scenario {name}");
            Scenario::build_scenario(load_scenario_from_yaml(name)?)
        }
        None => {
            log::info!("no scenario file given, using the built-in three-body preset");
            Scenario::default_scenario()
        }
    };

    run_2d(scenario);

    //tbsim::bench_gravity();
    //tbsim::bench_rk4();
    //tbsim::bench_rk4_curve();

    Ok(())
}
