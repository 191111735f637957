//! Algorithm enum for selecting how a generation is advanced.

use super::Universe;

/// Available transition implementations. Both produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// One cell after the other on the calling thread
    #[default]
    Serial,
    /// Rows computed in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Cell by cell, single thread",
            Algorithm::Parallel => "Rows split across the rayon pool",
        }
    }

    /// Advance the universe by one generation
    pub fn advance(&self, universe: &mut Universe) {
        match self {
            Algorithm::Serial => universe.advance_generation(),
            Algorithm::Parallel => universe.advance_generation_parallel(),
        }
    }
}
