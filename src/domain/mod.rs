mod algorithm;
mod cell;
mod error;
mod patterns;
mod universe;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use error::UniverseError;
pub use patterns::{Pattern, presets};
pub use universe::Universe;
