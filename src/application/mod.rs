mod config;
mod simulation;

pub use config::Args;
pub use simulation::{DEFAULT_MAX_GENERATIONS, Outcome, RunConfig, Simulation, SimulationState};
