//! Command-line interface for the scenario runner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ruranet_core::observe::{LogConfig, LogLevel};

use crate::error::{Result, SimError};

/// ruranet-sim - cellular coverage planning from scenario files
#[derive(Parser, Debug)]
#[command(
    name = "ruranet-sim",
    author,
    version,
    about = "Evaluate radio coverage for a set of base-station sites",
    long_about = r#"
ruranet-sim evaluates coverage for every site of a scenario file:

  - Okumura-Hata, COST-231, 3GPP TR 38.901 and mmWave path loss
  - Coverage radius for the scenario's receiver sensitivity
  - Grid sweep with signal tiers, covered area and population

QUICK START:
  ruranet-sim example-scenario > scenario.yaml
  ruranet-sim run scenario.yaml -o report.json
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Logging preset (development, production, quiet); replaces the
    /// config file's logging section
    #[arg(long, global = true)]
    pub log_preset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Logging settings after applying `--log-preset` and `--log-level` to
    /// the configured ones.
    pub fn log_config(&self, configured: &LogConfig) -> Result<LogConfig> {
        let mut log_config = match self.log_preset {
            Some(ref preset) => LogConfig::preset(preset).map_err(SimError::InvalidArgument)?,
            None => configured.clone(),
        };
        if let Some(ref level) = self.log_level {
            let level: LogLevel = level.parse().map_err(SimError::InvalidArgument)?;
            log_config = log_config.with_level(level);
        }
        Ok(log_config)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate every site of a scenario file
    Run(RunArgs),

    /// List the propagation models and their parameters
    Models(ModelsArgs),

    /// Print an example configuration file
    ExampleConfig,

    /// Print an example scenario file
    ExampleScenario,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scenario file (YAML)
    pub scenario: PathBuf,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Coverage profile from the configuration file
    #[arg(short, long)]
    pub profile: Option<String>,
}

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Show one model only (e.g. OKUMURA_HATA, 3GPP_TR_38901)
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args() {
        let cli = Cli::try_parse_from([
            "ruranet-sim",
            "run",
            "scenario.yaml",
            "-o",
            "report.json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.scenario, PathBuf::from("scenario.yaml"));
                assert_eq!(args.output, Some(PathBuf::from("report.json")));
                assert!(args.profile.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_and_models() {
        let cli =
            Cli::try_parse_from(["ruranet-sim", "models", "mmWave", "--config", "r.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("r.yaml")));
        assert!(cli.log_level.is_none());
        assert!(cli.log_preset.is_none());
        assert!(matches!(
            cli.command,
            Commands::Models(ModelsArgs { model: Some(ref m) }) if m == "mmWave"
        ));
    }

    #[test]
    fn test_log_preset_is_global() {
        let cli = Cli::try_parse_from([
            "ruranet-sim",
            "example-config",
            "--log-preset",
            "production",
            "-l",
            "warn",
        ])
        .unwrap();
        assert_eq!(cli.log_preset.as_deref(), Some("production"));
        assert_eq!(cli.log_level.as_deref(), Some("warn"));

        let resolved = cli.log_config(&LogConfig::default()).unwrap();
        assert_eq!(resolved, LogConfig::production().with_level(LogLevel::Warn));
    }

    #[test]
    fn test_log_config_falls_back_to_configured() {
        let configured = LogConfig::development();
        let cli = Cli::try_parse_from(["ruranet-sim", "example-config"]).unwrap();
        assert_eq!(cli.log_config(&configured).unwrap(), configured);

        let cli =
            Cli::try_parse_from(["ruranet-sim", "example-config", "--log-preset", "loud"]).unwrap();
        assert!(matches!(
            cli.log_config(&configured),
            Err(SimError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_example_commands() {
        assert!(matches!(
            Cli::try_parse_from(["ruranet-sim", "example-config"]).unwrap().command,
            Commands::ExampleConfig
        ));
        assert!(matches!(
            Cli::try_parse_from(["ruranet-sim", "example-scenario"]).unwrap().command,
            Commands::ExampleScenario
        ));
        assert!(Cli::try_parse_from(["ruranet-sim", "run"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
