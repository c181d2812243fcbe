use clap::Parser;
use eyre::Result;

use clinscore_cli::cli::Cli;
use clinscore_cli::{config, config_path, init_tracing, run};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = config::load_or_default(&config_path(&cli)?)?;
    init_tracing(&config.log_filter, cli.log_format.unwrap_or_default());

    let stdout = std::io::stdout();
    run(&cli, &config, &mut stdout.lock())
}
