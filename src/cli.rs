use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use energy_savings_sim::config::ScenarioConfig;
use energy_savings_sim::fragment;
use energy_savings_sim::sim::{ChargingStrategy, Insulation, Season};

#[derive(Parser, Debug)]
#[command(
    name = "energy-savings-sim",
    version,
    about = "Household electrification savings calculator and daily energy simulator"
)]
pub struct Cli {
    /// More log output on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annual savings, payback and cost projection.
    Savings {
        #[command(flatten)]
        scenario: ScenarioArgs,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the cumulative cost projection to CSV.
        #[arg(long)]
        projection_out: Option<PathBuf>,
    },
    /// Hour-by-hour simulation of one day.
    Simulate {
        #[command(flatten)]
        scenario: ScenarioArgs,
        #[command(flatten)]
        overrides: SimulationOverrides,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the hourly records to CSV.
        #[arg(long)]
        telemetry_out: Option<PathBuf>,
    },
    /// Print the share fragment for a scenario's household.
    Share {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// List built-in presets.
    Presets,
}

/// Where the scenario comes from. Baseline when none is given.
#[derive(Args, Debug, Default)]
#[group(required = false, multiple = false)]
pub struct ScenarioArgs {
    /// TOML scenario file.
    #[arg(long)]
    pub scenario: Option<PathBuf>,
    /// Built-in preset name.
    #[arg(long)]
    pub preset: Option<String>,
    /// Share fragment, e.g. `#bill=3000&gas=800`.
    #[arg(long)]
    pub fragment: Option<String>,
}

impl ScenarioArgs {
    pub fn load(&self) -> anyhow::Result<ScenarioConfig> {
        if let Some(path) = &self.scenario {
            ScenarioConfig::from_toml_file(path)
                .with_context(|| format!("loading scenario {}", path.display()))
        } else if let Some(name) = &self.preset {
            Ok(ScenarioConfig::from_preset(name)?)
        } else if let Some(raw) = &self.fragment {
            let household = fragment::decode(raw).context("decoding share fragment")?;
            Ok(ScenarioConfig {
                household,
                ..ScenarioConfig::baseline()
            })
        } else {
            Ok(ScenarioConfig::baseline())
        }
    }
}

/// Command-line overrides for the simulated day.
#[derive(Args, Debug, Default)]
pub struct SimulationOverrides {
    #[arg(long)]
    pub season: Option<Season>,
    /// `standard` or `free_window`.
    #[arg(long)]
    pub strategy: Option<ChargingStrategy>,
    #[arg(long)]
    pub insulation: Option<Insulation>,
    /// Move shiftable loads into the free window.
    #[arg(long)]
    pub load_shifting: bool,
}

impl SimulationOverrides {
    pub fn apply(&self, cfg: &mut ScenarioConfig) {
        let sim = &mut cfg.simulation;
        if let Some(season) = self.season {
            sim.season = season;
        }
        if let Some(strategy) = self.strategy {
            sim.strategy = strategy;
        }
        if let Some(insulation) = self.insulation {
            sim.insulation = insulation;
        }
        if self.load_shifting {
            sim.load_shifting = true;
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_with_preset() {
        let cli = Cli::try_parse_from(["energy-savings-sim", "savings", "--preset", "pool_owner"]);
        assert!(cli.is_ok(), "{cli:?}");
        if let Ok(Cli {
            command: Command::Savings { scenario, format, .. },
            ..
        }) = cli
        {
            assert_eq!(scenario.preset.as_deref(), Some("pool_owner"));
            assert_eq!(format, Format::Text);
        }
    }

    #[test]
    fn scenario_sources_are_exclusive() {
        let cli = Cli::try_parse_from([
            "energy-savings-sim",
            "savings",
            "--preset",
            "baseline",
            "--scenario",
            "house.toml",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn simulate_overrides_parse() {
        let cli = Cli::try_parse_from([
            "energy-savings-sim",
            "-vv",
            "simulate",
            "--season",
            "winter",
            "--strategy",
            "ovo",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok(), "{cli:?}");
        if let Ok(Cli {
            verbose,
            command: Command::Simulate { overrides, format, .. },
            ..
        }) = cli
        {
            assert_eq!(verbose, 2);
            assert_eq!(overrides.season, Some(Season::Winter));
            assert_eq!(overrides.strategy, Some(ChargingStrategy::FreeWindow));
            assert_eq!(format, Format::Json);
        }
    }

    #[test]
    fn fragment_source_keeps_baseline_tariff() {
        let args = ScenarioArgs {
            fragment: Some("#gas=0&ev=true".to_string()),
            ..ScenarioArgs::default()
        };
        let cfg = args.load();
        assert!(cfg.is_ok());
        if let Ok(cfg) = cfg {
            assert_eq!(cfg.household.gas_bill, 0.0);
            assert!(cfg.household.is_ev);
            assert_eq!(cfg.tariff, ScenarioConfig::baseline().tariff);
        }
    }

    #[test]
    fn overrides_apply() {
        let mut cfg = ScenarioConfig::baseline();
        let overrides = SimulationOverrides {
            insulation: Some(Insulation::Leaky),
            load_shifting: true,
            ..SimulationOverrides::default()
        };
        overrides.apply(&mut cfg);
        assert_eq!(cfg.simulation.insulation, Insulation::Leaky);
        assert!(cfg.simulation.load_shifting);
    }
}
