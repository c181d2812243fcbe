//! clinscore-cli
//!
//! Command-line front end for the calculator registry: list and inspect
//! calculators, evaluate one from `field=value` arguments or a JSON file,
//! and manage the config file.

pub mod cli;
pub mod config;
pub mod input;
pub mod render;

use std::io::Write;
use std::path::PathBuf;

use clinscore_calculators::{Calculator, all_calculators, by_specialty, get_calculator};
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigAction, LogFormat};
use config::ClinscoreConfig;

/// Initialise tracing on stderr. `RUST_LOG` overrides the configured filter.
pub fn init_tracing(filter: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

pub fn config_path(cli: &Cli) -> eyre::Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => config::default_config_path(),
    }
}

fn lookup(id: &str) -> eyre::Result<&'static dyn Calculator> {
    get_calculator(id).ok_or_else(|| {
        eyre::eyre!("unknown calculator: {id} (run `clinscore list` to see available calculators)")
    })
}

/// Execute `cli` against an already-loaded config, writing results to `out`.
pub fn run(cli: &Cli, config: &ClinscoreConfig, out: &mut impl Write) -> eyre::Result<()> {
    match &cli.command {
        Commands::List { specialty, format } => {
            let calculators: Vec<&'static dyn Calculator> = match specialty {
                Some(s) => by_specialty(*s).collect(),
                None => all_calculators().to_vec(),
            };
            render::calculator_list(out, &calculators, format.unwrap_or(config.output_format))
        }
        Commands::Show { id, format } => {
            let calculator = lookup(id)?;
            render::calculator_detail(out, calculator, format.unwrap_or(config.output_format))
        }
        Commands::Calc {
            id,
            params,
            json,
            format,
        } => {
            let calculator = lookup(id)?;
            let params = input::collect_params(json.as_deref(), params)?;
            let assessment = clinscore_calculators::evaluate(id, &params)
                .wrap_err_with(|| format!("{} could not be calculated", calculator.name()))?;
            render::assessment(
                out,
                calculator,
                &assessment,
                format.unwrap_or(config.output_format),
            )
        }
        Commands::Config { action } => {
            let path = config_path(cli)?;
            match action {
                ConfigAction::Init { force } => {
                    if path.exists() && !force {
                        return Err(eyre::eyre!(
                            "config already exists at {} (use --force to overwrite)",
                            path.display()
                        ));
                    }
                    config::save_config(&path, &ClinscoreConfig::default())?;
                    writeln!(out, "wrote {}", path.display())?;
                }
                ConfigAction::Show => {
                    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
                }
                ConfigAction::Path => {
                    writeln!(out, "{}", path.display())?;
                }
            }
            Ok(())
        }
    }
}
