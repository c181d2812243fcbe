use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clinscore_core::Specialty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "clinscore")]
#[command(about = "Clinical risk scores and calculators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "CLINSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered calculators
    List {
        /// Only calculators filed under this specialty
        #[arg(long)]
        specialty: Option<Specialty>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show a calculator's parameters and classification bands
    Show {
        id: String,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Evaluate a calculator
    Calc {
        id: String,

        /// Parameters as field=value. Values that parse as JSON are taken as
        /// JSON, anything else as a string token.
        #[arg(value_name = "FIELD=VALUE")]
        params: Vec<String>,

        /// Read parameters from a JSON object file; field=value arguments
        /// override its entries
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}
