use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{Algorithm, Universe};
use crate::rendering;

/// Hard cap on the number of generations a run may last
pub const DEFAULT_MAX_GENERATIONS: u64 = 2000;

/// Where a run currently stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    /// Every cell is dead
    Dead,
    /// The generation cap was reached with life still around
    MaxGeneration,
}

/// Pacing and termination settings for a run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub max_generations: u64,
    /// Pause after the opening banner
    pub start_delay: Duration,
    /// Pause after every generation
    pub tick_delay: Duration,
    pub algorithm: Algorithm,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_generations: DEFAULT_MAX_GENERATIONS,
            start_delay: Duration::from_millis(500),
            tick_delay: Duration::from_millis(50),
            algorithm: Algorithm::default(),
        }
    }
}

/// Summary of a finished run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub state: SimulationState,
    pub generations: u64,
    /// Whether the universe ever stopped changing. This never ends a run on its own.
    pub stable: bool,
}

/// Simulation drives a universe from generation 0 until it dies or hits the cap.
pub struct Simulation {
    pub universe: Universe,
    pub generation: u64,
    config: RunConfig,
}

impl Simulation {
    pub fn new(universe: Universe, config: RunConfig) -> Self {
        Self {
            universe,
            generation: 0,
            config,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Dead takes precedence over the cap
    pub fn state(&self) -> SimulationState {
        if self.universe.universe_is_dead() {
            SimulationState::Dead
        } else if self.generation >= self.config.max_generations {
            SimulationState::MaxGeneration
        } else {
            SimulationState::Running
        }
    }

    /// Advance one generation with the configured algorithm
    pub fn step(&mut self) {
        self.config.algorithm.advance(&mut self.universe);
        self.generation += 1;
    }

    /// Run to completion, printing every generation to `out`.
    ///
    /// A stable but living universe keeps running until the cap.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<Outcome> {
        info!(
            height = self.universe.height(),
            width = self.universe.width(),
            population = self.universe.population(),
            algorithm = self.config.algorithm.name(),
            "beginning of time"
        );
        writeln!(out, "Beginning of time")?;
        out.flush()?;
        pause(self.config.start_delay);

        while self.state() == SimulationState::Running {
            writeln!(out, "{}", rendering::frame(self.generation, &self.universe))?;
            out.flush()?;
            self.step();
            debug!(
                generation = self.generation,
                population = self.universe.population(),
                stable = self.universe.is_stable(),
                "generation advanced"
            );
            pause(self.config.tick_delay);
        }

        writeln!(out, "{}", rendering::frame(self.generation, &self.universe))?;
        writeln!(out, "Ending of time")?;
        out.flush()?;

        let outcome = Outcome {
            state: self.state(),
            generations: self.generation,
            stable: self.universe.is_stable(),
        };
        info!(
            state = ?outcome.state,
            generations = outcome.generations,
            stable = outcome.stable,
            "ending of time"
        );
        Ok(outcome)
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
