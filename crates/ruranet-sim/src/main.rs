//! ruranet-sim command-line entry point.

use clap::Parser;
use std::process::ExitCode;

use ruranet_core::model::catalog;
use ruranet_core::observe::init_logging;
use ruranet_core::RuranetConfig;
use ruranet_sim::cli::{Cli, Commands, ModelsArgs, RunArgs};
use ruranet_sim::{Result, ScenarioFile, SimError, SimulationRunner};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => RuranetConfig::load_from(path)?,
        None => RuranetConfig::load()?,
    };

    let log_config = cli.log_config(&config.logging)?;
    init_logging(&log_config);

    match cli.command {
        Commands::Run(args) => run_scenario(args, config),
        Commands::Models(args) => run_models(args),
        Commands::ExampleConfig => {
            print!("{}", RuranetConfig::example_yaml());
            Ok(())
        }
        Commands::ExampleScenario => {
            print!("{}", ScenarioFile::example_yaml());
            Ok(())
        }
    }
}

fn run_scenario(args: RunArgs, config: RuranetConfig) -> Result<()> {
    let mut scenario = ScenarioFile::load(&args.scenario)?;
    if args.profile.is_some() {
        scenario.profile = args.profile;
    }

    let report = SimulationRunner::new(config).run(&scenario)?;

    match args.output {
        Some(path) => report.write_json(&path)?,
        None => println!("{}", report.to_json()?),
    }

    if report.summary.failed > 0 {
        eprintln!(
            "{} of {} sites failed",
            report.summary.failed, report.summary.sites
        );
    }
    Ok(())
}

fn run_models(args: ModelsArgs) -> Result<()> {
    let json = match args.model {
        Some(id) => serde_json::to_string_pretty(&catalog::model_parameters(&id)?),
        None => serde_json::to_string_pretty(&catalog::available_models()),
    }
    .map_err(|e| SimError::Encode(e.to_string()))?;

    println!("{}", json);
    Ok(())
}
