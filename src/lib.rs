// Domain layer - Universe state machine and patterns
pub mod domain;

// Application layer - Run loop and configuration
pub mod application;

// Infrastructure layer - Console rendering
pub mod rendering;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Pattern, Universe, UniverseError, presets};
pub use application::{Args, Outcome, RunConfig, Simulation, SimulationState};
