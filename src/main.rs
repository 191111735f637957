use anyhow::{Context, Result};
use clap::Parser;
use life_console::{Args, Simulation};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("life_console=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let universe = args.build_universe()?;
    let mut simulation = Simulation::new(universe, args.run_config());

    let stdout = std::io::stdout();
    simulation
        .run(&mut stdout.lock())
        .context("failed to print the universe")?;

    Ok(())
}
