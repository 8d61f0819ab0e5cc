//! CLI entry point for edge-matched tile generation

use clap::Parser;
use wavetile::io::cli::{Cli, Runner};

fn main() -> wavetile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    let report = runner.run()?;
    log::info!(
        "finished after {} attempt(s): {:?}",
        report.attempts,
        report.summary.completion
    );
    Ok(())
}
