//! Energy savings calculator entry point: CLI wiring and report output.

mod cli;
mod telemetry;

use anyhow::{Context, bail};
use clap::Parser;
use serde_json::json;
use tracing::info;

use energy_savings_sim::config::ScenarioConfig;
use energy_savings_sim::fragment;
use energy_savings_sim::io::export::{export_hourly_csv, export_projection_csv};

use cli::{Cli, Command, Format};

fn validated(cfg: ScenarioConfig) -> anyhow::Result<ScenarioConfig> {
    let errors = cfg.validate();
    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid scenario:\n{}", lines.join("\n"));
    }
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(telemetry::level(cli.verbose, cli.quiet))?;

    match cli.command {
        Command::Savings {
            scenario,
            format,
            projection_out,
        } => {
            let cfg = validated(scenario.load()?)?;
            let result = cfg.savings_model().evaluate(&cfg.household);

            match format {
                Format::Text => println!("{result}"),
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }

            if let Some(path) = projection_out {
                export_projection_csv(&result.projection, &path)
                    .with_context(|| format!("writing projection CSV {}", path.display()))?;
                info!(path = %path.display(), "projection written");
            }
        }
        Command::Simulate {
            scenario,
            overrides,
            format,
            telemetry_out,
        } => {
            let mut cfg = scenario.load()?;
            overrides.apply(&mut cfg);
            let cfg = validated(cfg)?;

            let simulation = cfg.daily_simulation();
            let records = simulation.run(&cfg.simulation);
            let summary = simulation.summarize(&records);

            match format {
                Format::Text => {
                    for r in &records {
                        println!("{r}");
                    }
                    println!("\n{summary}");
                }
                Format::Json => {
                    let doc = json!({ "records": records, "summary": summary });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
            }

            if let Some(path) = telemetry_out {
                export_hourly_csv(&records, &path)
                    .with_context(|| format!("writing hourly CSV {}", path.display()))?;
                info!(path = %path.display(), "hourly records written");
            }
        }
        Command::Share { scenario } => {
            let cfg = validated(scenario.load()?)?;
            println!("#{}", fragment::encode(&cfg.household));
        }
        Command::Presets => {
            for name in ScenarioConfig::PRESETS {
                println!("{name}");
            }
        }
    }

    Ok(())
}
