use anyhow::Result;
use clap::Parser;
use epochms::{cli::CliArgs, config::Config, logging::init_logging, sample::write_samples};
use epochms_core::ports::SystemClock;
use tracing::{error, info};

fn main() -> Result<()> {
    init_logging();

    let args = CliArgs::parse();
    let config = Config::from_cli_and_file(&args)?;
    info!(unit = ?config.output.unit, count = config.output.count, "Starting epochms");

    let stdout = std::io::stdout();
    if let Err(err) = write_samples(&SystemClock, &config.output, &mut stdout.lock()) {
        error!("Sampling failed: {:#}", err);
        return Err(err);
    }

    Ok(())
}
