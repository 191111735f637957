use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use super::simulation::{DEFAULT_MAX_GENERATIONS, RunConfig};
use crate::domain::{Algorithm, Universe, presets};

/// Conway's Game of Life, printed generation by generation
#[derive(Debug, Parser)]
#[command(name = "life_console", version, about)]
pub struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub height: i64,

    /// Number of columns
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub width: i64,

    /// Chance in percent for each cell to start alive
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub seed_chance: i32,

    /// Seed for the random generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern in the middle instead of random life.
    /// Rows are bounded by the width and columns by the height, so on
    /// non-square universes the centred pattern may be rejected.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Stop after this many generations
    #[arg(long, default_value_t = DEFAULT_MAX_GENERATIONS)]
    pub max_generations: u64,

    /// Milliseconds to wait between generations
    #[arg(long, default_value_t = 50)]
    pub tick_ms: u64,

    /// Milliseconds to wait before the first generation
    #[arg(long, default_value_t = 500)]
    pub start_delay_ms: u64,

    #[arg(long, value_enum, default_value_t = Algorithm::Serial)]
    pub algorithm: Algorithm,
}

impl Args {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            max_generations: self.max_generations,
            start_delay: Duration::from_millis(self.start_delay_ms),
            tick_delay: Duration::from_millis(self.tick_ms),
            algorithm: self.algorithm,
        }
    }

    /// Build the starting universe, either from a pattern or by random seeding
    pub fn build_universe(&self) -> Result<Universe> {
        let mut universe = Universe::with_dimensions(self.height, self.width)
            .context("cannot create the universe")?;

        if let Some(name) = &self.pattern {
            let pattern = presets::by_name(name).ok_or_else(|| {
                let known: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
                anyhow!("unknown pattern {name:?}, expected one of: {}", known.join(", "))
            })?;
            pattern
                .place_centered(&mut universe)
                .with_context(|| format!("pattern {:?} does not fit", pattern.name))?;
            info!(pattern = pattern.name, "placed pattern");
        } else {
            let sparkled = match self.seed {
                Some(seed) => {
                    universe.seed_life_with(self.seed_chance, &mut StdRng::seed_from_u64(seed))
                }
                None => universe.seed_life(self.seed_chance),
            };
            info!(sparkled, seed_chance = self.seed_chance, "seeded life");
        }

        Ok(universe)
    }
}
